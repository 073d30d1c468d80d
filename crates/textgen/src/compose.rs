//! Word and line layout.
//!
//! [`compose`] turns a buffer into lines of words. Every byte of the buffer
//! is written exactly once, and the result is deterministic for a fixed random
//! sequence.

use crate::{CharacterClass, RandSource};

/// Shortest word the composer emits.
pub const WORD_LEN_MIN: usize = 2;
/// Longest word the composer emits.
pub const WORD_LEN_MAX: usize = 30;
/// Probability that a word ends its line.
pub const LINE_BREAK_PROBABILITY: f64 = 0.1;
/// Maximum number of words on one line.
pub const WORDS_PER_LINE_MAX: usize = 20;

/// Byte sequence that terminates a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineSeparator {
    /// `\n`
    #[default]
    Unix,
    /// `\r\n`
    Windows,
}

impl LineSeparator {
    /// Returns the separator for the host operating system.
    pub const fn native() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }

    /// Returns the bytes written at the end of a line.
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Unix => b"\n",
            Self::Windows => b"\r\n",
        }
    }

    /// Number of bytes the separator occupies: 1 for `\n`, 2 for `\r\n`.
    pub const fn width(self) -> usize {
        self.as_bytes().len()
    }
}

/// Number of bytes at the end of a buffer in which no new word starts.
///
/// The reserve is large enough for the longest word plus the widest separator,
/// so a word and its separator never straddle the end of the buffer. Whatever
/// is left after the last word is filled directly.
pub const fn tail_reserve(separator: LineSeparator) -> usize {
    WORD_LEN_MAX + 1 + separator.width() - 1
}

/// Fills all of `buffer` with words from `class`, separated by spaces and
/// line breaks.
///
/// A word is 2 to 30 bytes long. It ends its line with probability 0.1, and
/// always when it is the 20th word of the line. Bytes after the last word are
/// drawn from `class` directly with no separator.
pub fn compose<R: RandSource + ?Sized>(
    buffer: &mut [u8],
    separator: LineSeparator,
    class: CharacterClass,
    rng: &mut R,
) {
    let sep = separator.as_bytes();
    let limit = buffer.len().saturating_sub(tail_reserve(separator));
    let mut written = 0;
    let mut words = 0;

    while written < limit {
        // Break on the 20th word. An open line holds at most 19 words plus
        // the tail fill that follows its last space.
        let line_break = words + 1 >= WORDS_PER_LINE_MAX || rng.chance(LINE_BREAK_PROBABILITY);
        let room = buffer.len() - written - sep.len();
        let len = word_len(rng).min(room);

        class.fill(rng, &mut buffer[written..written + len]);
        written += len;

        if line_break {
            buffer[written..written + sep.len()].copy_from_slice(sep);
            written += sep.len();
            words = 0;
        } else {
            buffer[written] = b' ';
            written += 1;
            words += 1;
        }
    }

    class.fill(rng, &mut buffer[written..]);
}

/// Fills all of `buffer` with uniformly distributed bytes.
pub fn compose_raw<R: RandSource + ?Sized>(buffer: &mut [u8], rng: &mut R) {
    rng.fill_raw(buffer);
}

#[inline]
fn word_len<R: RandSource + ?Sized>(rng: &mut R) -> usize {
    WORD_LEN_MIN + rng.below(WORD_LEN_MAX - WORD_LEN_MIN + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};

    /// Draws fixed word lengths and a fixed line-break decision.
    struct Scripted {
        below: usize,
        chance: bool,
        draws: usize,
    }

    impl Scripted {
        fn new(below: usize, chance: bool) -> Self {
            Self {
                below,
                chance,
                draws: 0,
            }
        }
    }

    impl RandSource for Scripted {
        fn below(&mut self, bound: usize) -> usize {
            self.draws += 1;
            self.below.min(bound - 1)
        }
        fn chance(&mut self, _p: f64) -> bool {
            self.chance
        }
    }

    fn lines(bytes: &[u8]) -> Vec<&[u8]> {
        bytes.split(|&b| b == b'\n').collect()
    }

    #[test]
    fn separator_width_matches_bytes() {
        assert_eq!(LineSeparator::Unix.width(), 1);
        assert_eq!(LineSeparator::Windows.width(), 2);
        assert_eq!(LineSeparator::Windows.as_bytes(), b"\r\n");
    }

    #[test]
    fn tail_reserve_covers_word_and_separator() {
        assert_eq!(tail_reserve(LineSeparator::Unix), 31);
        assert_eq!(tail_reserve(LineSeparator::Windows), 32);
    }

    #[test]
    fn golden_shortest_words() {
        let mut buffer = [0u8; 40];
        let mut rng = Scripted::new(0, false);
        compose(
            &mut buffer,
            LineSeparator::Unix,
            CharacterClass::LettersLower,
            &mut rng,
        );
        let expected = [b"aa aa aa ".as_slice(), &[b'a'; 31]].concat();
        assert_eq!(buffer.as_slice(), expected.as_slice());
    }

    #[test]
    fn golden_every_word_breaks_line() {
        let mut buffer = [0u8; 40];
        let mut rng = Scripted::new(0, true);
        compose(
            &mut buffer,
            LineSeparator::Windows,
            CharacterClass::LettersUpper,
            &mut rng,
        );
        // limit = 40 - 32 = 8: two words of "AA\r\n" reach it.
        let expected = [b"AA\r\nAA\r\n".as_slice(), &[b'A'; 32]].concat();
        assert_eq!(buffer.as_slice(), expected.as_slice());
    }

    #[test]
    fn line_break_is_forced_at_twenty_words() {
        let mut buffer = vec![0u8; 400];
        let mut rng = Scripted::new(0, false);
        compose(
            &mut buffer,
            LineSeparator::Unix,
            CharacterClass::LettersLower,
            &mut rng,
        );
        let first = lines(&buffer)[0];
        let words: Vec<_> = first.split(|&b| b == b' ').collect();
        assert_eq!(words.len(), WORDS_PER_LINE_MAX);
        assert!(words.iter().all(|w| *w == b"aa"));
    }

    #[test]
    fn small_buffer_is_filled_directly() {
        for len in [0, 1, 2, 5, 31] {
            let mut buffer = vec![0u8; len];
            let mut rng = Scripted::new(3, true);
            compose(
                &mut buffer,
                LineSeparator::Unix,
                CharacterClass::LettersLower,
                &mut rng,
            );
            assert!(buffer.iter().all(|&b| b == b'd'), "len {len}");
            assert_eq!(rng.draws, len);
        }
    }

    #[test]
    fn every_byte_is_written() {
        let mut rng = SmallRng::seed_from_u64(42);
        for len in [32, 33, 64, 100, 1000, 4096] {
            let mut buffer = vec![0u8; len];
            compose(
                &mut buffer,
                LineSeparator::Windows,
                CharacterClass::AllPrintable,
                &mut rng,
            );
            assert!(!buffer.contains(&0), "len {len}");
        }
    }

    #[test]
    fn output_obeys_word_grammar() {
        let mut rng = SmallRng::seed_from_u64(1234);
        let mut buffer = vec![0u8; 64 * 1024];
        compose(
            &mut buffer,
            LineSeparator::Unix,
            CharacterClass::LettersMixedCase,
            &mut rng,
        );

        assert!(!buffer.windows(2).any(|w| w == b"  "));
        assert_ne!(buffer[0], b' ');
        assert_ne!(buffer[0], b'\n');
        assert_ne!(*buffer.last().unwrap(), b' ');
        assert_ne!(*buffer.last().unwrap(), b'\n');

        let lines = lines(&buffer);
        let last = lines.len() - 1;
        for (i, line) in lines.iter().enumerate() {
            let words: Vec<_> = line.split(|&b| b == b' ').collect();
            assert!(words.len() <= WORDS_PER_LINE_MAX);
            for word in &words[..words.len() - usize::from(i == last)] {
                assert!((WORD_LEN_MIN..=WORD_LEN_MAX).contains(&word.len()));
                assert!(word.iter().all(u8::is_ascii_alphabetic));
            }
        }
    }

    #[test]
    fn windows_separator_is_never_split() {
        let mut rng = SmallRng::seed_from_u64(99);
        let mut buffer = vec![0u8; 16 * 1024];
        compose(
            &mut buffer,
            LineSeparator::Windows,
            CharacterClass::LettersLower,
            &mut rng,
        );
        for (i, &b) in buffer.iter().enumerate() {
            if b == b'\r' {
                assert_eq!(buffer[i + 1], b'\n');
            }
            if b == b'\n' {
                assert_eq!(buffer[i - 1], b'\r');
            }
        }
    }

    #[test]
    fn same_seed_same_text() {
        let mut a = vec![0u8; 8192];
        let mut b = vec![0u8; 8192];
        compose(
            &mut a,
            LineSeparator::Unix,
            CharacterClass::AllPrintable,
            &mut SmallRng::seed_from_u64(5),
        );
        compose(
            &mut b,
            LineSeparator::Unix,
            CharacterClass::AllPrintable,
            &mut SmallRng::seed_from_u64(5),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn raw_fills_whole_buffer() {
        let mut rng = Scripted::new(200, false);
        let mut buffer = [0u8; 16];
        compose_raw(&mut buffer, &mut rng);
        assert_eq!(buffer, [200u8; 16]);
    }
}
