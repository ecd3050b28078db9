//! Amount Words CLI
//!
//! Spells a single amount, or a CSV file of amounts, as English words.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- 123.45 USD
//! cargo run -- amounts.csv > phrased.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use amount_words::{Amount, AmountInWords, Converter, Result, WordsError};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use std::str::FromStr;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.as_slice() {
        [_, amount, currency] => phrase_single(amount, currency),
        [_, input_path] => phrase_file(input_path),
        _ => Err(WordsError::MissingArgument),
    }
}

fn phrase_single(amount: &str, currency: &str) -> Result<()> {
    let amount = Amount::from_str(amount)?;
    let words = AmountInWords::new(amount, currency.trim())?;
    println!("{}", words.amount_in_word);
    Ok(())
}

fn phrase_file(input_path: &str) -> Result<()> {
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let stdout = io::stdout();
    let handle = stdout.lock();

    let mut converter = Converter::new(handle)?;
    converter.process_csv(reader)?;
    converter.finish()?;

    Ok(())
}
