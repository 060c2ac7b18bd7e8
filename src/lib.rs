//! # Word Dict
//!
//! Builds word lists for word games out of the plain dictionaries shipped in
//! `/usr/share/dict/`.
//!
//! A single pass reads the whole dictionary, lower-cases every line, keeps the
//! five-letter words spelled only with the language's alphabet, removes
//! duplicates and sorts the result.
//!
//! ## Usage
//!
//! ```bash
//! # Spanish (default preset), JSON array on stdout
//! word-dict > words-es.json
//!
//! # British English, one word per line
//! word-dict -L british-english -f lines
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use word_dict::language::Language;
//! use word_dict::output::OutputFormat;
//! use word_dict::processor::{Processor, ProcessorConfig};
//!
//! let config = ProcessorConfig {
//!     dictionary: Language::AmericanEnglish.dictionary_path().to_path_buf(),
//!     language: Language::AmericanEnglish,
//!     format: OutputFormat::Json,
//!     quiet: false,
//!     verbose: false,
//!     stats: false,
//! };
//!
//! let outcome = Processor::new(config).process().unwrap();
//! println!("{} words", outcome.words.len());
//! ```

pub mod cli;
pub mod dedup;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod language;
pub mod output;
pub mod processor;
pub mod report;

pub use cli::Args;
pub use error::DictError;
pub use processor::{Processor, ProcessorConfig};
