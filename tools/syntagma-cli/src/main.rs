use clap::Parser;
use std::fs;
use std::path::PathBuf;

use syntagma_ingest::{build_text, AnnotatedDocument};

#[derive(Parser)]
#[command(author, version, about = "Converts a stored annotation-engine response into record JSON")]
struct Cli {
    /// Engine response document (JSON)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Output path; prints to stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let input_data = fs::read_to_string(&cli.input)?;
    let document: AnnotatedDocument = serde_json::from_str(&input_data)?;

    let text = build_text(&document)?;
    let record = syntagma_convert::convert(&text);
    let json = serde_json::to_string_pretty(&record)?;

    match cli.output {
        Some(path) => {
            fs::write(&path, json)?;
            println!("✅ {} sentences written to {:?}", record.sentences.len(), path);
        }
        None => println!("{json}"),
    }

    Ok(())
}
