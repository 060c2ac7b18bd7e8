//! Word Dict - five-letter word lists from system dictionaries
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use word_dict::cli::Args;
use word_dict::filter::WORD_LENGTH;
use word_dict::output::print_words;
use word_dict::processor::{Processor, ProcessorConfig};
use word_dict::report::{print_error, print_header, print_info, print_warning};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = ProcessorConfig::from_args(&args);

    if config.verbose {
        print_config(&config);
    }

    let processor = Processor::new(config);
    let outcome = processor.process()?;

    if outcome.words.is_empty() && !processor.config().quiet {
        print_warning("No words matched the filter");
    }

    print_words(&outcome.words, processor.config().format)?;

    if processor.config().stats {
        outcome.stats.print_summary();
    }

    Ok(())
}

/// Print configuration summary
fn print_config(config: &ProcessorConfig) {
    print_header("Configuration");

    print_info(&format!("Language:     {}", config.language.name()));
    print_info(&format!("Dictionary:   {:?}", config.dictionary));
    print_info(&format!("Word length:  {}", WORD_LENGTH));
    print_info(&format!("Alphabet:     {} characters", config.language.charset().len()));
    print_info(&format!("Format:       {:?}", config.format));
}
