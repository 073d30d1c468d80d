//! Byte counts with unit suffixes.
//!
//! Lower-case units are binary, upper-case units are decimal:
//!
//! | Suffix | Factor     |
//! |--------|------------|
//! | `k`    | 1024       |
//! | `K`    | 1000       |
//! | `m`    | 1024²      |
//! | `M`    | 1000²      |
//! | `g`    | 1024³      |
//! | `G`    | 1000³      |

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ByteSizeError {
    #[error("size is empty")]
    Empty,

    #[error("can't parse size \"{0}\"")]
    Invalid(String),

    #[error("size \"{0}\" is too large")]
    Overflow(String),
}

/// Parses `N` or `N` followed by one of `kKmMgG`.
pub fn parse_byte_size(raw: &str) -> Result<u64, ByteSizeError> {
    let raw = raw.trim();
    let Some(last) = raw.chars().last() else {
        return Err(ByteSizeError::Empty);
    };

    let (digits, factor) = match last {
        'k' => (&raw[..raw.len() - 1], 1 << 10),
        'K' => (&raw[..raw.len() - 1], 1_000),
        'm' => (&raw[..raw.len() - 1], 1 << 20),
        'M' => (&raw[..raw.len() - 1], 1_000_000),
        'g' => (&raw[..raw.len() - 1], 1 << 30),
        'G' => (&raw[..raw.len() - 1], 1_000_000_000),
        _ => (raw, 1),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ByteSizeError::Invalid(raw.to_owned()));
    }

    digits
        .parse::<u64>()
        .ok()
        .and_then(|n| n.checked_mul(factor))
        .ok_or_else(|| ByteSizeError::Overflow(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_byte_size("0"), Ok(0));
        assert_eq!(parse_byte_size("37"), Ok(37));
        assert_eq!(parse_byte_size(" 4096 "), Ok(4096));
    }

    #[test]
    fn binary_and_decimal_units() {
        assert_eq!(parse_byte_size("1k"), Ok(1024));
        assert_eq!(parse_byte_size("1K"), Ok(1000));
        assert_eq!(parse_byte_size("8m"), Ok(8 * 1024 * 1024));
        assert_eq!(parse_byte_size("3M"), Ok(3_000_000));
        assert_eq!(parse_byte_size("2g"), Ok(2 * 1024 * 1024 * 1024));
        assert_eq!(parse_byte_size("5G"), Ok(5_000_000_000));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_byte_size(""), Err(ByteSizeError::Empty));
        assert!(matches!(parse_byte_size("k"), Err(ByteSizeError::Invalid(_))));
        assert!(matches!(parse_byte_size("-5"), Err(ByteSizeError::Invalid(_))));
        assert!(matches!(parse_byte_size("12x"), Err(ByteSizeError::Invalid(_))));
        assert!(matches!(parse_byte_size("1.5m"), Err(ByteSizeError::Invalid(_))));
    }

    #[test]
    fn rejects_overflow() {
        assert!(matches!(
            parse_byte_size("99999999999999G"),
            Err(ByteSizeError::Overflow(_))
        ));
        assert!(matches!(
            parse_byte_size("99999999999999999999"),
            Err(ByteSizeError::Overflow(_))
        ));
    }
}
