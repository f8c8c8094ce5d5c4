//! CSV export of the full statement.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use poupa_core::UserData;

/// Write every ledger entry, insertion order preserved, one row each.
pub fn write_csv<W: Write>(data: &UserData, out: W) -> Result<()> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record(["id", "description", "amount", "type", "category"])?;

    for t in data.transactions.iter() {
        let amount = format!("{:.2}", t.amount);
        w.write_record([
            t.id.as_str(),
            t.description.as_str(),
            amount.as_str(),
            t.kind.as_str(),
            t.category.as_str(),
        ])?;
    }

    w.flush()?;
    Ok(())
}

pub fn export_to_path(data: &UserData, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create {}", path.display()))?;
    write_csv(data, file)?;
    println!(
        "Exported {} entries to {}",
        data.transactions.len(),
        path.display()
    );
    Ok(())
}
