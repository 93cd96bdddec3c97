use anyhow::{Context, Result};

use crate::data;
use crate::models::Transaction;
use crate::summary::{summarize, MonthKey};
use crate::ui::util::{format_amount, format_percent, truncate};

pub(crate) fn as_cli(args: &[String], file_override: Option<&str>) -> Result<()> {
    match args[0].as_str() {
        "summary" | "s" => cli_summary(&args[1..], file_override),
        "export" => cli_export(&args[1..], file_override),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendview {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("SpendView — monthly spending summary for the terminal");
    println!();
    println!("Usage: spendview [--file <path>] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch the interactive dashboard");
    println!("  summary [YYYY-MM]             Print a month's category summary");
    println!("  export [path]                 Write a month's category summary as CSV");
    println!("    --month <YYYY-MM>           Month to export (default: current)");
    println!("  --file <path>                 Transactions file (.json or .csv) to load");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn parse_month_arg(raw: &str) -> Result<MonthKey> {
    MonthKey::parse(raw)
        .ok_or_else(|| anyhow::anyhow!("Invalid month '{raw}' (expected YYYY-MM)"))
}

fn month_txn_count(transactions: &[Transaction], month: MonthKey) -> usize {
    transactions
        .iter()
        .filter(|t| t.year_month() == Some((month.year, month.month)))
        .count()
}

fn cli_summary(args: &[String], file_override: Option<&str>) -> Result<()> {
    let month = match args.first().filter(|a| !a.starts_with('-')) {
        Some(raw) => parse_month_arg(raw)?,
        None => MonthKey::current(),
    };

    let (transactions, source_label) = data::load(file_override)?;
    let result = summarize(&transactions, month.year, month.month);

    println!("SpendView — {} ({month})", month.label());
    println!("{}", "─".repeat(48));
    println!("  Total Spending:  {}", format_amount(result.total));
    println!("  Transactions:    {}", month_txn_count(&transactions, month));
    println!("  Source:          {source_label}");

    if result.is_empty() {
        println!();
        println!("No transactions found for this month.");
        return Ok(());
    }

    println!();
    println!("  {:<24} {:>12} {:>8}", "Category", "Amount", "%");
    println!("  {}", "─".repeat(46));
    for summary in &result.summaries {
        println!(
            "  {:<24} {:>12} {:>8}",
            truncate(&summary.category, 24),
            format_amount(summary.amount),
            format_percent(summary.percentage),
        );
    }

    Ok(())
}

fn cli_export(args: &[String], file_override: Option<&str>) -> Result<()> {
    let month = match args.windows(2).find(|w| w[0] == "--month") {
        Some(pair) => parse_month_arg(&pair[1])?,
        None => MonthKey::current(),
    };

    // Output path is the first non-flag argument
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| data::shellexpand(a))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            format!("{home}/spendview-summary-{month}.csv")
        });

    let (transactions, _) = data::load(file_override)?;
    let result = summarize(&transactions, month.year, month.month);

    if result.is_empty() {
        println!("No transactions for {month}");
        return Ok(());
    }

    let mut wtr = csv::Writer::from_path(&output_path)
        .with_context(|| format!("Failed to create {output_path}"))?;
    wtr.write_record(["category", "amount", "percentage"])?;
    for summary in &result.summaries {
        let amount = format!("{:.2}", summary.amount);
        let percentage = format!("{:.2}", summary.percentage);
        wtr.write_record([summary.category.as_str(), &amount, &percentage])?;
    }
    wtr.flush()?;

    println!(
        "Exported {} categories for {month} to {output_path}",
        result.summaries.len()
    );
    Ok(())
}
