//! Command-line interface definition for word-dict

use crate::language::Language;
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Build a five-letter word list from a system dictionary
///
/// Reads a dictionary with one word per line, keeps the lower-cased words of
/// five letters spelled only with the language's letters, removes
/// duplicates and prints them sorted to stdout.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "word-dict",
    version,
    about = "Build five-letter word lists from system dictionaries",
    after_help = r#"EXAMPLES:
    # Spanish word list as a JSON array
    word-dict > words-es.json

    # British English, one word per line
    word-dict -L british-english -f lines

    # Custom dictionary file with the American English alphabet
    word-dict -L american-english -d ./words.txt --stats"#
)]
pub struct Args {
    /// Language preset: picks the alphabet and the default dictionary
    #[arg(short = 'L', long, value_enum, default_value_t = Language::Spanish)]
    pub language: Language,

    /// Dictionary file (default: the preset's file under /usr/share/dict)
    #[arg(short, long, value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Print filtering statistics to stderr
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - errors only
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Get the dictionary path, defaulting to the language preset's file
    pub fn dictionary_path(&self) -> PathBuf {
        self.dictionary
            .clone()
            .unwrap_or_else(|| self.language.dictionary_path().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["word-dict"]).unwrap();

        assert_eq!(args.language, Language::Spanish);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.dictionary_path(), Path::new("/usr/share/dict/spanish"));
    }

    #[test]
    fn test_language_and_override() {
        let args = Args::try_parse_from([
            "word-dict",
            "-L",
            "american-english",
            "-d",
            "words.txt",
            "-f",
            "lines",
        ])
        .unwrap();

        assert_eq!(args.language, Language::AmericanEnglish);
        assert_eq!(args.format, OutputFormat::Lines);
        assert_eq!(args.dictionary_path(), PathBuf::from("words.txt"));
    }

    #[test]
    fn test_word_length_is_not_configurable() {
        assert!(Args::try_parse_from(["word-dict", "--length", "6"]).is_err());
        assert!(Args::try_parse_from(["word-dict", "-l", "6"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["word-dict", "-q", "-v"]).is_err());
    }
}
