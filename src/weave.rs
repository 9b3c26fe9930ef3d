//! Recursive derivation of a character sequence from a name and a digit
//! sequence.
//!
//! Each level of recursion contributes `digits.len() / 2` characters pulled
//! cyclically from the name, then descends on the front half of the digit
//! slice. The slice strictly shrinks at every step, so recursion terminates
//! once one or zero digits remain; depth is bounded by log2 of the input
//! length.

use crate::normalize::Name;

/// Derive a character sequence from `name` by repeatedly halving `digits`.
///
/// Pure and deterministic: identical inputs always produce identical output.
/// An empty or single-digit slice yields an empty result (`1 / 2 == 0`).
pub fn chk(name: &Name, digits: &[u8]) -> Vec<char> {
    let mut result = Vec::new();
    if !digits.is_empty() {
        let half = digits.len() / 2;
        for idx in 0..half {
            result.push(name.cycle_char(idx));
        }
        result.extend(chk(name, &digits[..half]));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_name;

    fn name(raw: &str) -> Name {
        normalize_name(raw).unwrap()
    }

    #[test]
    fn empty_digits_yield_empty_result() {
        assert_eq!(chk(&name("ab"), &[]), Vec::<char>::new());
    }

    #[test]
    fn single_digit_yields_empty_result() {
        // 1 / 2 == 0, so nothing is contributed before the base case
        assert_eq!(chk(&name("ab"), &[7]), Vec::<char>::new());
    }

    #[test]
    fn four_digits_with_two_letter_name() {
        // half=2 -> 'a','b'; recurse on 2 -> half=1 -> 'a'; recurse on 1 -> []
        assert_eq!(chk(&name("ab"), &[1, 2, 3, 4]), vec!['a', 'b', 'a']);
    }

    #[test]
    fn six_digits_with_single_letter_name() {
        // half=3 -> "xxx"; recurse on 3 -> half=1 -> "x"; recurse on 1 -> []
        let result = chk(&name("x"), &[0, 0, 0, 0, 0, 0]);
        assert_eq!(result, vec!['x', 'x', 'x', 'x']);
    }

    #[test]
    fn cycling_restarts_at_every_level() {
        // half=4 wraps around "abc" once; each deeper level starts at 'a' again
        let result = chk(&name("abc"), &[9, 9, 9, 9, 9, 9, 9, 9]);
        assert_eq!(result, vec!['a', 'b', 'c', 'a', 'a', 'b', 'a']);
    }

    #[test]
    fn digit_values_do_not_influence_the_output() {
        // only the length of the digit sequence matters
        assert_eq!(chk(&name("ab"), &[1, 2, 3, 4]), chk(&name("ab"), &[9, 8, 7, 6]));
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let n = name("Silvio Peroni");
        let digits = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(chk(&n, &digits), chk(&n, &digits));
    }
}
