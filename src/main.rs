use std::io::{self, BufRead, Write};

use clap::Parser;
use identcase::{Case, Options};
use miette::{IntoDiagnostic, Result};

/// Convert identifiers between case conventions.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// The case to convert to, e.g. 'snake' or 'camelCase'.
    #[arg(short = 'c', long = "case", value_name = "STYLE")]
    case: Case,
    /// Only these characters separate words; all other punctuation is kept.
    #[arg(short = 's', long, value_name = "CHARS", default_value = "")]
    separators: String,
    /// Keep these characters in the output. Ignored if --separators is set.
    #[arg(short = 'k', long, value_name = "CHARS", default_value = "")]
    keep: String,
    /// Start a new word before a run of kept characters.
    #[arg(long)]
    separate_before: bool,
    /// Do not start a new word after a run of kept characters.
    #[arg(long)]
    no_separate_after: bool,
    /// Strings to convert. If none are given, each line of stdin is converted.
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,
}

pub fn main() -> Result<()> {
    miette::set_panic_hook();

    let args = Args::parse();
    let opts = Options::new()
        .separate_before(args.separate_before)
        .separate_after(!args.no_separate_after)
        .with_separators(&args.separators)
        .with_keep(&args.keep);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    if args.inputs.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.into_diagnostic()?;
            writeln!(stdout, "{}", args.case.convert_with_options(&line, &opts)).into_diagnostic()?;
        }
    } else {
        for input in &args.inputs {
            writeln!(stdout, "{}", args.case.convert_with_options(input, &opts)).into_diagnostic()?;
        }
    }
    Ok(())
}
