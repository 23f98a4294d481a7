use std::process::ExitCode;
use clap::Parser;
use std::time::Instant;

use wordrack::dictionary::DictionarySource;
use wordrack::errors::SourceError;
use wordrack::finder;
use wordrack::finder::SearchStatus;

/// Longest-word finder for a rack of letters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The letters available (at most 12, a-z/A-Z only)
    letters: String,

    /// Path to the dictionary file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/wordlist.txt")
    )]
    dictionary: String,

    /// Print every equally-longest word instead of just the first
    #[arg(short, long)]
    all: bool,
}

/// Entry point of the wordrack CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("WORDRACK_DEBUG").is_ok();
    wordrack::log::init_logger(debug_enabled);

    log::info!("Starting wordrack");

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a SourceError
        if let Some(source_err) = e.downcast_ref::<SourceError>() {
            eprintln!("Error: {}", source_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the wordrack CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Search the dictionary file for the longest fitting word.
/// 3. Print the answer(s) on stdout.
/// 4. Print the search status and timing on stderr.
///
/// A query or dictionary that fails validation is reported on stderr but
/// still exits 0; only an unreadable dictionary file bubbles up to
/// [`main`] as an error.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Search the dictionary for the longest word the letters can spell
    let t_search = Instant::now();
    let source = DictionarySource::from_path(&cli.dictionary);
    let result = finder::search(&cli.letters, &source)?;
    let search_secs = t_search.elapsed().as_secs_f64();

    // 2. Print the answer on stdout; status goes to stderr
    match &result.status {
        SearchStatus::Found => {
            if cli.all {
                for word in &result.words {
                    println!("{word}");
                }
            } else if let Some(word) = result.canonical() {
                println!("{word}");
            }
            eprintln!(
                "✓ Found {} word(s) of length {}",
                result.words.len(),
                result.canonical().map_or(0, |w| w.chars().count())
            );
        }
        SearchStatus::NoMatch => {
            println!("no result");
            eprintln!("✓ No dictionary word fits these letters");
        }
        SearchStatus::RejectedQuery(rejection) => {
            println!("no result");
            eprintln!("⚠️  {}", rejection.display_detailed());
        }
        SearchStatus::RejectedDictionary(rejection) => {
            println!("no result");
            eprintln!("⚠️  {}", rejection.display_detailed());
        }
    }

    // 3. Print diagnostics (timing) to stderr
    eprintln!("Searched in {search_secs:.3}s.");

    Ok(())
}
