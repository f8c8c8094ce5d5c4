//! Interactive first-run wizard.

use anyhow::{Context, Result, bail};
use std::io::{self, Write};

use poupa_core::{Onboarding, UserData};

use crate::input::parse_amount;
use crate::state;

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

/// Run the three-step wizard and persist the resulting profile.
pub fn run_setup(force: bool) -> Result<UserData> {
    let existing = state::load_user_data()?;
    if existing.onboarded && !force {
        bail!(
            "Profile already exists at {} (pass --force to redo onboarding)",
            state::data_path()?.display()
        );
    }

    println!("Boas-vindas! 👋");
    println!("Vamos simplificar sua vida financeira.\n");

    let mut wizard = Onboarding::new();

    // Step 1: first name, required.
    loop {
        let name = prompt("Qual o seu primeiro nome?")?;
        if wizard.submit_name(&name) {
            break;
        }
        println!("Um nome é necessário para continuar.");
    }

    // Step 2: fixed monthly income. Unparseable input counts as zero, the
    // same as leaving the field blank.
    let raw = prompt("Qual o valor total que você recebe fixo por mês? (R$)")?;
    let income = parse_amount(&raw).unwrap_or(0.0);
    let _ = wizard.submit_income(income);

    // Step 3: savings percentage, 0-50, default 10.
    let percent = loop {
        let raw = prompt("Qual porcentagem da sua renda você deseja guardar todos os meses? (0-50, padrão 10)")?;
        if raw.is_empty() {
            break 10.0;
        }
        match raw.parse::<f64>() {
            Ok(v) if (0.0..=50.0).contains(&v) => break v,
            _ => println!("Informe um número entre 0 e 50."),
        }
    };
    let _ = wizard.submit_savings_percent(percent);
    println!("{}\n", Onboarding::percent_hint(percent));

    let data = wizard.finish().context("wizard did not complete")?;
    state::save_user_data(&data)?;

    println!("Vamos Começar! Perfil salvo em {}", state::data_path()?.display());
    println!("\nPróximos passos:");
    println!("- poupa add \"Aluguel\" 1200            (registrar uma despesa fixa)");
    println!("- poupa add \"Uber\" 35,90 --variable   (despesa variável)");
    println!("- poupa view inicio                    (resumo do mês)");
    println!("- poupa auth paste-gemini-key          (dicas do mentor IA)");

    Ok(data)
}
