use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use clap::Parser;
use log::error;
use uztext::core::config::Config;
use uztext::core::engine::TextEngine;
use uztext::core::error::Result;
use uztext::extract::ExtractorRegistry;
use uztext::report::text::{format_pairs, format_words};
use uztext::report::ReportWriter;

/// Find stop words and word frequencies in Uzbek text
#[derive(Parser, Debug)]
#[command(name = "uztext", version)]
struct Args {
    /// Stop word list, one word per line [default: uz.txt or $UZTEXT_STOP_WORDS]
    #[arg(long)]
    stop_words: Option<PathBuf>,

    /// Read text from a .txt, .docx or .pdf file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write output.txt and output.json
    #[arg(long)]
    save: bool,

    /// Directory for saved output [default: . or $UZTEXT_OUTPUT_DIR]
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        error!("{}", e);
        eprintln!("{}", e.context);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(path) = args.stop_words {
        config.stop_words_path = path;
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }

    let engine = TextEngine::from_config(&config)?;

    let text = match args.input {
        Some(path) => ExtractorRegistry::new().extract_file(&path)?,
        None => prompt_line("Input text:")?,
    };

    let result = engine.analyze(&text);

    println!("\nStop words found: {}", format_words(result.stop_words()));
    println!("\nText without stop words: {}", result.edited_text());
    println!(
        "\nTop {} most frequent words: {}",
        config.frequency_limit,
        format_pairs(result.most_frequent())
    );
    println!(
        "Top {} least frequent words: {}",
        config.frequency_limit,
        format_pairs(result.least_frequent())
    );

    if args.save {
        let report = ReportWriter::new(&config.output_dir).write_all(&result)?;
        println!(
            "\nResults written to {} and {}.",
            report.text_path.display(),
            report.json_path.display()
        );
    }

    Ok(())
}

fn prompt_line(prompt: &str) -> Result<String> {
    println!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
