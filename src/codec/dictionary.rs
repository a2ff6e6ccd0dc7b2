//! Fixed digit ↔ letter bijections, one per encoding scheme

use crate::codec::EncodingScheme;
use crate::error::{Error, Result};

/// Positional bijection between digit characters and letter symbols
#[derive(Debug, PartialEq, Eq)]
pub struct SubstitutionDictionary {
    digits: &'static [u8],
    symbols: &'static [u8],
}

static V4_DICTIONARY: SubstitutionDictionary = SubstitutionDictionary {
    digits: b"0123456789",
    symbols: b"ABCDEFGHIJ",
};

static V5_DICTIONARY: SubstitutionDictionary = SubstitutionDictionary {
    digits: b"0123456789abcdef",
    symbols: b"BCDEFGHJKMNPQRST",
};

impl SubstitutionDictionary {
    /// Dictionary for an encoding scheme
    pub fn for_scheme(scheme: EncodingScheme) -> &'static Self {
        match scheme {
            EncodingScheme::V4 => &V4_DICTIONARY,
            EncodingScheme::V5 => &V5_DICTIONARY,
        }
    }

    /// Dictionary for a raw protocol version number
    pub fn for_version(version: u8) -> Result<&'static Self> {
        EncodingScheme::try_from(version).map(Self::for_scheme)
    }

    /// Digit alphabet (the dictionary's domain)
    pub fn digits(&self) -> &'static str {
        // Both tables are ASCII literals.
        std::str::from_utf8(self.digits).unwrap_or_default()
    }

    /// Letter alphabet (the dictionary's range)
    pub fn symbols(&self) -> &'static str {
        std::str::from_utf8(self.symbols).unwrap_or_default()
    }

    /// Letter standing in for `digit`, if the digit is in the domain
    pub fn substitute(&self, digit: char) -> Option<char> {
        position_of(self.digits, digit).map(|i| char::from(self.symbols[i]))
    }

    /// Digit a letter stands for, if the letter is in the range
    pub fn restore(&self, symbol: char) -> Option<char> {
        position_of(self.symbols, symbol).map(|i| char::from(self.digits[i]))
    }

    /// Substitute every digit of `digits`, failing on the first one outside the domain
    pub fn substitute_all(&self, digits: &str) -> Result<String> {
        digits
            .chars()
            .enumerate()
            .map(|(position, digit)| {
                self.substitute(digit).ok_or(Error::Decode {
                    symbol: digit,
                    position,
                })
            })
            .collect()
    }

    /// Restore every symbol of `code`, failing on the first one outside the range
    pub fn restore_all(&self, code: &str) -> Result<String> {
        code.chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.restore(symbol)
                    .ok_or(Error::Decode { symbol, position })
            })
            .collect()
    }
}

fn position_of(table: &[u8], c: char) -> Option<usize> {
    u8::try_from(c)
        .ok()
        .and_then(|b| table.iter().position(|&t| t == b))
}
