use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use crate::models::Transaction;

pub(crate) mod sample;

/// Resolve and load the transaction set.
///
/// An explicit `--file` path wins. Otherwise the default data file is used
/// when it exists, and the built-in sample set when it does not. Returns the
/// transactions plus a short label describing where they came from.
pub(crate) fn load(file_override: Option<&str>) -> Result<(Vec<Transaction>, String)> {
    if let Some(raw) = file_override {
        let path = PathBuf::from(shellexpand(raw));
        let transactions = load_file(&path)?;
        let label = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file")
            .to_string();
        return Ok((transactions, label));
    }

    let path = default_path()?;
    if path.exists() {
        let transactions = load_file(&path)?;
        Ok((transactions, "transactions.json".into()))
    } else {
        Ok((sample::transactions(), "sample data".into()))
    }
}

/// Default transactions file: the platform data dir, e.g.
/// `~/.local/share/spendview/transactions.json` on Linux.
pub(crate) fn default_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "spendview", "SpendView")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().join("transactions.json"))
}

/// Load a transactions file, picking the format from its extension.
pub(crate) fn load_file(path: &Path) -> Result<Vec<Transaction>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        _ => anyhow::bail!(
            "Unsupported transactions file (expected .json or .csv): {}",
            path.display()
        ),
    }
}

fn load_json(path: &Path) -> Result<Vec<Transaction>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let transactions = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(transactions)
}

fn load_csv(path: &Path) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let headers = rdr.headers().context("Failed to read CSV header")?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    };
    let date_col = column("date")
        .ok_or_else(|| anyhow::anyhow!("CSV has no 'date' column: {}", path.display()))?;
    let amount_col = column("amount")
        .ok_or_else(|| anyhow::anyhow!("CSV has no 'amount' column: {}", path.display()))?;
    let category_col = column("category")
        .ok_or_else(|| anyhow::anyhow!("CSV has no 'category' column: {}", path.display()))?;
    let note_col = column("note");

    let mut transactions = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        // Line numbers are 1-based and line 1 is the header
        let line = i + 2;
        let record = result.with_context(|| format!("Failed to read CSV line {line}"))?;
        let field = |col: usize| record.get(col).unwrap_or("").trim().to_string();

        let raw_amount = field(amount_col);
        let cleaned = raw_amount.replace(['$', ','], "");
        let amount = Decimal::from_str(cleaned.trim())
            .with_context(|| format!("Bad amount '{raw_amount}' on CSV line {line}"))?;

        transactions.push(Transaction::new(
            field(date_col),
            amount,
            field(category_col),
            note_col.map(field).unwrap_or_default(),
        ));
    }

    Ok(transactions)
}

/// Expand a leading `~/` to the user's home directory.
pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests;
