//! Character classes and the in-place random fill.
//!
//! Each [`CharacterClass`] is declared as a list of inclusive byte ranges. The
//! ranges are expanded into a flat alphabet at compile time, so a fill is one
//! bounded draw plus one table lookup per byte.

use crate::RandSource;
use core::ops::RangeInclusive;

const LOWER_RANGES: &[RangeInclusive<u8>] = &[b'a'..=b'z'];
const UPPER_RANGES: &[RangeInclusive<u8>] = &[b'A'..=b'Z'];
const MIXED_RANGES: &[RangeInclusive<u8>] = &[b'A'..=b'Z', b'a'..=b'z'];

/// Printable ASCII without space and without `"`, `'`, `\` and `` ` ``.
const PRINTABLE_RANGES: &[RangeInclusive<u8>] = &[
    b'!'..=b'!',
    b'#'..=b'&',
    b'('..=b'[',
    b']'..=b'_',
    b'a'..=b'~',
];

const LOWER: [u8; alphabet_len(LOWER_RANGES)] = expand(LOWER_RANGES);
const UPPER: [u8; alphabet_len(UPPER_RANGES)] = expand(UPPER_RANGES);
const MIXED: [u8; alphabet_len(MIXED_RANGES)] = expand(MIXED_RANGES);
const PRINTABLE: [u8; alphabet_len(PRINTABLE_RANGES)] = expand(PRINTABLE_RANGES);

const fn alphabet_len(ranges: &[RangeInclusive<u8>]) -> usize {
    let mut len = 0;
    let mut i = 0;
    while i < ranges.len() {
        len += (*ranges[i].end() - *ranges[i].start()) as usize + 1;
        i += 1;
    }
    len
}

const fn expand<const N: usize>(ranges: &[RangeInclusive<u8>]) -> [u8; N] {
    let mut out = [0; N];
    let mut pos = 0;
    let mut i = 0;
    while i < ranges.len() {
        let mut byte = *ranges[i].start();
        while byte <= *ranges[i].end() {
            out[pos] = byte;
            pos += 1;
            if byte == u8::MAX {
                break;
            }
            byte += 1;
        }
        i += 1;
    }
    assert!(pos == N, "alphabet length mismatch");
    out
}

/// The alphabet random bytes are drawn from. Fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterClass {
    /// 90 visible ASCII symbols: `0x21..=0x7E` minus `"`, `'`, `\` and `` ` ``.
    #[default]
    AllPrintable,
    /// `A-Z` and `a-z`.
    LettersMixedCase,
    /// `a-z`.
    LettersLower,
    /// `A-Z`.
    LettersUpper,
}

impl CharacterClass {
    /// Returns the inclusive byte ranges this class draws from.
    pub const fn ranges(self) -> &'static [RangeInclusive<u8>] {
        match self {
            Self::AllPrintable => PRINTABLE_RANGES,
            Self::LettersMixedCase => MIXED_RANGES,
            Self::LettersLower => LOWER_RANGES,
            Self::LettersUpper => UPPER_RANGES,
        }
    }

    /// Returns every symbol of the class in ascending order.
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            Self::AllPrintable => &PRINTABLE,
            Self::LettersMixedCase => &MIXED,
            Self::LettersLower => &LOWER,
            Self::LettersUpper => &UPPER,
        }
    }

    /// Returns `true` if `byte` belongs to the class.
    pub fn contains(self, byte: u8) -> bool {
        self.ranges().iter().any(|range| range.contains(&byte))
    }

    /// Overwrites every byte of `bytes` with an independent uniform draw from
    /// the class.
    pub fn fill<R: RandSource + ?Sized>(self, rng: &mut R, bytes: &mut [u8]) {
        let alphabet = self.alphabet();
        for byte in bytes {
            *byte = alphabet[rng.below(alphabet.len())];
        }
    }
}
