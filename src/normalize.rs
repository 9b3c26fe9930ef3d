//! Input normalization for the two console prompts.
//!
//! Raw console input is untrusted text; everything downstream works on the
//! validated forms built here. The name becomes a non-empty, space-free,
//! lower-cased cyclic alphabet ([`Name`]), and the matriculation number
//! becomes a plain sequence of decimal digit values.

use thiserror::Error;

/// Errors raised while normalizing console input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("name is empty after removing spaces")]
    EmptyName,
    #[error("matriculation number contains non-digit character {ch:?} at position {pos}")]
    NonDigit { ch: char, pos: usize },
}

/// A normalized name: lower-cased, space-free, guaranteed non-empty.
///
/// Acts as a fixed cyclic alphabet; [`Name::cycle_char`] indexes it modulo
/// its length, so any index is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    chars: Vec<char>,
}

impl Name {
    /// Character at `idx`, wrapping around past the end of the name.
    pub fn cycle_char(&self, idx: usize) -> char {
        self.chars[idx % self.chars.len()]
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Build a [`Name`] from raw input: lower-case it and delete every ASCII
/// space (runs of spaces vanish entirely, leading and trailing included).
///
/// # Errors
/// - [`InputError::EmptyName`] if nothing is left after removing spaces.
pub fn normalize_name(raw: &str) -> Result<Name, InputError> {
    let chars: Vec<char> = raw.to_lowercase().chars().filter(|&ch| ch != ' ').collect();
    if chars.is_empty() {
        return Err(InputError::EmptyName);
    }
    Ok(Name { chars })
}

/// Parse the raw matriculation-number input into digit values.
///
/// Lower-cases the input, collapses each run of ASCII spaces to a single
/// space, then converts every remaining character to a decimal digit. A
/// surviving space is itself a conversion failure, so internal spaces are
/// rejected rather than skipped.
///
/// # Errors
/// - [`InputError::NonDigit`] for the first character (position relative to
///   the collapsed text) that is not a decimal digit.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_digits(raw: &str) -> Result<Vec<u8>, InputError> {
    let collapsed = collapse_spaces(&raw.to_lowercase());
    let mut digits = Vec::with_capacity(collapsed.len());
    for (pos, ch) in collapsed.chars().enumerate() {
        match ch.to_digit(10) {
            // to_digit(10) yields 0..=9, so the cast never truncates
            Some(value) => digits.push(value as u8),
            None => return Err(InputError::NonDigit { ch, pos }),
        }
    }
    Ok(digits)
}

/// Replace each run of ASCII spaces with a single space.
fn collapse_spaces(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut prev_was_space = false;
    for ch in text.chars() {
        if ch == ' ' {
            if !prev_was_space {
                collapsed.push(ch);
            }
            prev_was_space = true;
        } else {
            collapsed.push(ch);
            prev_was_space = false;
        }
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_name_lowercases_and_removes_all_spaces() {
        let name = normalize_name("Ada  Lovelace").unwrap();
        assert_eq!(name.to_string(), "adalovelace");
    }

    #[test]
    fn normalize_name_strips_leading_and_trailing_spaces() {
        let name = normalize_name("  Bo  ").unwrap();
        assert_eq!(name.to_string(), "bo");
    }

    #[test]
    fn normalize_name_rejects_empty_input() {
        assert_eq!(normalize_name("").unwrap_err(), InputError::EmptyName);
    }

    #[test]
    fn normalize_name_rejects_all_space_input() {
        assert_eq!(normalize_name("    ").unwrap_err(), InputError::EmptyName);
    }

    #[test]
    fn cycle_char_wraps_past_the_end() {
        let name = normalize_name("ab").unwrap();
        assert_eq!(name.cycle_char(0), 'a');
        assert_eq!(name.cycle_char(1), 'b');
        assert_eq!(name.cycle_char(2), 'a');
        assert_eq!(name.cycle_char(5), 'b');
    }

    #[test]
    fn parse_digits_converts_every_character() {
        assert_eq!(parse_digits("0987512").unwrap(), vec![0, 9, 8, 7, 5, 1, 2]);
    }

    #[test]
    fn parse_digits_accepts_empty_input() {
        assert_eq!(parse_digits("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn parse_digits_rejects_letters_after_lowercasing() {
        let err = parse_digits("12A4").unwrap_err();
        assert_eq!(err, InputError::NonDigit { ch: 'a', pos: 2 });
    }

    #[test]
    fn parse_digits_rejects_internal_spaces() {
        // runs collapse to a single space, which is still not a digit
        let err = parse_digits("12   34").unwrap_err();
        assert_eq!(err, InputError::NonDigit { ch: ' ', pos: 2 });
    }

    #[test]
    fn collapse_spaces_only_merges_runs() {
        assert_eq!(collapse_spaces("a  b   c"), "a b c");
        assert_eq!(collapse_spaces(" 12 "), " 12 ");
    }
}
