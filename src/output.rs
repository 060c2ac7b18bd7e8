//! Output rendering
//!
//! The word list is written to standard output only; status and logs go to stderr.

use clap::ValueEnum;
use std::io::{self, BufWriter, Write};

/// How the sorted word list is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// A single JSON array of strings, ready to be saved as a word asset
    #[default]
    Json,
    /// One word per line
    Lines,
}

/// Write `words` to `writer` in the given format, followed by a newline
pub fn write_words<W: Write>(
    mut writer: W,
    words: &[String],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut writer, words)?;
            writeln!(writer)?;
        }
        OutputFormat::Lines => {
            for word in words {
                writeln!(writer, "{}", word)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Print the word list to standard output
pub fn print_words(words: &[String], format: OutputFormat) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let writer = BufWriter::new(stdout.lock());
    write_words(writer, words, format)
}
