mod data;
mod models;
mod run;
mod summary;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let (file_override, rest) = split_file_flag(&args[1..])?;

    if rest.is_empty() {
        run::as_tui(file_override.as_deref())
    } else {
        run::as_cli(&rest, file_override.as_deref())
    }
}

/// Pull `--file <path>` out of the argument list; everything else is the
/// command for CLI mode (empty means TUI mode).
fn split_file_flag(args: &[String]) -> Result<(Option<String>, Vec<String>)> {
    let mut file = None;
    let mut rest = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--file" || arg == "-f" {
            file = Some(
                iter.next()
                    .ok_or_else(|| anyhow::anyhow!("--file requires a path"))?
                    .clone(),
            );
        } else {
            rest.push(arg.clone());
        }
    }
    Ok((file, rest))
}
