//! Language presets
//!
//! Each preset pairs a system dictionary (as shipped under `/usr/share/dict/`)
//! with the characters its words may be spelled with.

use crate::filter::Charset;
use clap::ValueEnum;
use std::path::Path;

/// Characters Spanish words may use on top of the ASCII letters
pub const SPANISH_EXTRA_CHARS: [char; 6] = ['ñ', 'á', 'é', 'í', 'ó', 'ú'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    AmericanEnglish,
    BritishEnglish,
    #[default]
    Spanish,
}

impl Language {
    /// Default dictionary location for this language
    pub fn dictionary_path(self) -> &'static Path {
        let path = match self {
            Self::AmericanEnglish => "/usr/share/dict/american-english",
            Self::BritishEnglish => "/usr/share/dict/british-english",
            Self::Spanish => "/usr/share/dict/spanish",
        };
        Path::new(path)
    }

    pub fn charset(self) -> Charset {
        match self {
            Self::AmericanEnglish | Self::BritishEnglish => Charset::ascii_letters(),
            Self::Spanish => Charset::with_extra(&SPANISH_EXTRA_CHARS),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::AmericanEnglish => "American English",
            Self::BritishEnglish => "British English",
            Self::Spanish => "Spanish",
        }
    }
}
