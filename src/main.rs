use std::{
    fmt::Write,
    path::PathBuf,
};

use clap::Parser;
use scout_kmp::{Kmp, input::TextSource};
use tracing_subscriber::{EnvFilter, fmt};

/// Find a pattern in text with Knuth-Morris-Pratt.
///
/// Match positions are character indices into the text.
#[derive(Parser)]
#[command(name = "scout-kmp")]
struct Cli {
    /// Pattern to search for.
    pattern: String,
    /// Text to search. Read from stdin when neither this nor --file is given.
    #[arg(conflicts_with = "file")]
    text: Option<String>,
    /// Read the text from a file.
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Print every match instead of only the first.
    #[arg(short, long)]
    all: bool,
    /// With --all, include overlapping matches.
    #[arg(long, requires = "all")]
    overlapping: bool,
    /// Also print the failure array of the pattern.
    #[arg(long)]
    failure: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Return the output for one search: the failure array if asked for, then
/// one match start per line, or `not found`.
fn render(cli: &Cli, kmp: &Kmp<char>, text: &[char]) -> String {
    let starts: Vec<usize> = if !cli.all {
        kmp.find(text).map(|l| l.start).into_iter().collect()
    } else if cli.overlapping {
        kmp.find_overlapping_iter(text).map(|l| l.start).collect()
    } else {
        kmp.find_iter(text).map(|l| l.start).collect()
    };
    tracing::info!(pattern = %cli.pattern, text_len = text.len(), matches = starts.len(), "search finished");

    let mut out = String::new();
    if cli.failure {
        let _ = writeln!(out, "failure: {:?}", kmp.failure());
    }
    if starts.is_empty() {
        out.push_str("not found\n");
    }
    for start in starts {
        let _ = writeln!(out, "{start}");
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    let text: Vec<char> = TextSource::from_args(cli.text.clone(), cli.file.clone()).load()?.chars().collect();
    let pattern: Vec<char> = cli.pattern.chars().collect();
    let kmp = Kmp::new(&pattern);
    print!("{}", render(&cli, &kmp, &text));
    Ok(())
}
