use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

use poupa_core::{ExpenseCategory, SavingsGoal, Tab, Transaction, UserData};

mod auth;
mod config;
mod export;
mod input;
mod insights_task;
mod render;
mod setup;
mod state;

use insights_task::InsightRefresher;

#[derive(Parser, Debug)]
#[command(name = "poupa", version, about = "Poupa: personal budgeting CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One-time interactive onboarding: name, income, savings percentage
    Setup {
        /// Redo onboarding even if a profile already exists
        #[arg(long)]
        force: bool,
    },

    /// Record a transaction (an expense unless --income is given)
    Add {
        /// What the entry is (e.g. Aluguel, Uber, Salário)
        description: String,

        /// Amount; accepts 1234.56 and 1.234,56
        amount: String,

        /// Record income instead of an expense
        #[arg(long)]
        income: bool,

        /// File the expense as variable instead of fixed
        #[arg(long)]
        variable: bool,
    },

    /// Delete a transaction by id (no-op when the id is unknown)
    Rm { id: String },

    /// Replace the savings goal
    Goal {
        #[command(subcommand)]
        command: GoalCommand,
    },

    /// Render one of the dashboard tabs
    View {
        /// inicio | extrato | entradas | fixos | variaveis | metas
        #[arg(default_value = "inicio")]
        tab: Tab,
    },

    /// Fetch fresh mentor tips and print them
    Insights,

    /// Export the full statement as CSV
    Export {
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Erase all data and return to onboarding
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Credential management for the mentor call
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum GoalCommand {
    /// Save a percentage of income each month (0-100)
    Percentage { value: f64 },

    /// Save a fixed amount each month, independent of income
    Fixed { value: String },
}

#[derive(Subcommand, Debug)]
enum AuthCommand {
    /// Store the Gemini API key used for mentor tips
    PasteGeminiKey,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config file if absent
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut refresher = InsightRefresher::new();

    let result = run(cli.command, &mut refresher).await;

    // Outstanding tip refreshes only ever delay process exit, never a
    // mutation or its output.
    refresher.finish().await;
    result
}

async fn run(command: Command, refresher: &mut InsightRefresher) -> Result<()> {
    match command {
        Command::Setup { force } => {
            let data = setup::run_setup(force)?;
            trigger_refresh(refresher, &data)?;
        }

        Command::Add {
            description,
            amount,
            income,
            variable,
        } => {
            let mut data = load_onboarded()?;

            let description = input::validate_description(&description)?;
            let value = input::parse_amount(&amount)?;

            let transaction = if income {
                Transaction::income(description, value)
            } else if variable {
                Transaction::expense(description, value, ExpenseCategory::Variable)
            } else {
                Transaction::expense(description, value, ExpenseCategory::Fixed)
            };
            let id = transaction.id.clone();

            data.add_transaction(transaction);
            state::save_user_data(&data)?;
            println!("Registrado (id={id})");
            trigger_refresh(refresher, &data)?;
        }

        Command::Rm { id } => {
            let mut data = load_onboarded()?;
            if data.delete_transaction(&id) {
                state::save_user_data(&data)?;
                println!("Removido: {id}");
                trigger_refresh(refresher, &data)?;
            } else {
                println!("Nenhum registro com id {id}; nada a fazer.");
            }
        }

        Command::Goal { command } => {
            let mut data = load_onboarded()?;
            let goal = match command {
                GoalCommand::Percentage { value } => {
                    if !(0.0..=100.0).contains(&value) {
                        bail!("porcentagem fora do intervalo 0-100: {value}");
                    }
                    SavingsGoal::percentage(value)
                }
                GoalCommand::Fixed { value } => SavingsGoal::fixed(input::parse_amount(&value)?),
            };

            data.set_savings_goal(goal);
            state::save_user_data(&data)?;

            let cfg = config::load_config()?;
            render::render_metas(&data, &data.summary(), &cfg);
            trigger_refresh(refresher, &data)?;
        }

        Command::View { tab } => {
            let data = load_onboarded()?;
            let cfg = config::load_config()?;
            let summary = data.summary();

            match tab.scope() {
                Some(scope) => render::render_listing(tab, scope, &data, &cfg),
                None => match tab {
                    Tab::Metas => render::render_metas(&data, &summary, &cfg),
                    _ => {
                        let insights = state::read_insight_cache()?.unwrap_or_else(|| {
                            "Sem dicas ainda. Rode `poupa insights` para gerar.".to_string()
                        });
                        render::render_inicio(&data, &summary, &insights, &cfg);
                        // Warm the cache for the next visit.
                        trigger_refresh(refresher, &data)?;
                    }
                },
            }
        }

        Command::Insights => {
            let data = load_onboarded()?;
            let cfg = config::load_config()?;
            let key = auth::resolve_gemini_key()?;

            let text = poupa_insight::fetch_insights(
                &cfg.insight_config(key),
                &data.summary(),
                &data.transactions,
            )
            .await;

            state::write_insight_cache(&text)?;
            let _ = state::append_mentor_log(&text);
            println!("{text}");
        }

        Command::Export { out } => {
            let data = load_onboarded()?;
            match out {
                Some(path) => export::export_to_path(&data, &path)?,
                None => export::write_csv(&data, io::stdout())?,
            }
        }

        Command::Reset { yes } => {
            if !yes && !confirm("Tem certeza que deseja apagar todos os dados?")? {
                println!("Cancelado.");
                return Ok(());
            }

            let mut data = state::load_user_data()?;
            data.reset();
            state::save_user_data(&data)?;
            state::clear_insight_cache()?;
            println!("Dados apagados. Rode `poupa setup` para recomeçar.");
        }

        Command::Auth { command } => match command {
            AuthCommand::PasteGeminiKey => auth::paste_gemini_key()?,
        },

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
        },
    }

    Ok(())
}

/// Every command past onboarding needs a profile on disk.
fn load_onboarded() -> Result<UserData> {
    let data = state::load_user_data()?;
    if !data.onboarded {
        bail!("Nenhum perfil encontrado. Rode: poupa setup");
    }
    Ok(data)
}

fn confirm(question: &str) -> Result<bool> {
    print!("{question} [s/N] ");
    io::stdout().flush().ok();
    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .context("read confirmation")?;
    let answer = answer.trim().to_lowercase();
    Ok(matches!(answer.as_str(), "s" | "sim" | "y" | "yes"))
}

fn trigger_refresh(refresher: &mut InsightRefresher, data: &UserData) -> Result<()> {
    let cfg = config::load_config()?;
    let key = auth::resolve_gemini_key()?;
    refresher.trigger(
        cfg.insight_config(key),
        data.summary(),
        data.transactions.clone(),
    );
    Ok(())
}
