//! Core processing engine
//!
//! One pass over a dictionary: read, normalize, filter, deduplicate, sort.

use crate::cli::Args;
use crate::dedup::WordSet;
use crate::encoding::read_dictionary;
use crate::filter::{Rejection, WordFilter, WORD_LENGTH};
use crate::language::Language;
use crate::output::OutputFormat;
use crate::report::FilterStats;

use anyhow::Context;
use std::path::PathBuf;

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub dictionary: PathBuf,
    pub language: Language,
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub stats: bool,
}

impl ProcessorConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            dictionary: args.dictionary_path(),
            language: args.language,
            format: args.format,
            quiet: args.quiet,
            verbose: args.verbose,
            stats: args.stats,
        }
    }

    /// Build the word filter for the configured language
    pub fn word_filter(&self) -> WordFilter {
        WordFilter::new(WORD_LENGTH, self.language.charset())
    }
}

/// Sorted words plus the counters collected while producing them
#[derive(Debug)]
pub struct ProcessOutcome {
    pub words: Vec<String>,
    pub stats: FilterStats,
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    /// Read the configured dictionary and build the sorted word list
    pub fn process(&self) -> anyhow::Result<ProcessOutcome> {
        let path = &self.config.dictionary;

        log::info!(
            "Building {}-letter {} word list from {:?}",
            WORD_LENGTH,
            self.config.language.name(),
            path
        );

        let text = read_dictionary(path)
            .with_context(|| format!("Cannot load {} dictionary", self.config.language.name()))?;

        let filter = self.config.word_filter();
        let mut stats = FilterStats::new();
        stats.input_bytes = text.len() as u64;

        let words = filter_words(&text, &filter, &mut stats);

        log::debug!(
            "{} lines read, {} matched, {} unique",
            stats.total_lines,
            stats.matched_lines(),
            stats.unique_words
        );

        Ok(ProcessOutcome { words, stats })
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }
}

/// Filter dictionary text into a sorted list of unique qualifying words
pub fn filter_words(text: &str, filter: &WordFilter, stats: &mut FilterStats) -> Vec<String> {
    // Every kept word takes at least WORD_LENGTH bytes plus a newline
    let mut set = WordSet::with_capacity(text.len() / (WORD_LENGTH + 1));

    for line in text.lines() {
        stats.total_lines += 1;

        let word = filter.normalize(line);

        match filter.check(&word) {
            Ok(()) => {
                if !set.insert(word) {
                    stats.duplicate_words += 1;
                }
            }
            Err(Rejection::Length) => stats.length_rejected += 1,
            Err(Rejection::Charset) => stats.charset_rejected += 1,
        }
    }

    stats.unique_words = set.len() as u64;
    set.into_sorted_vec()
}
