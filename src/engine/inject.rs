//! Symbol and number injectors

use super::accumulator::CandidateAccumulator;
use super::alphabet::Alphabet;
use crate::error::Result;

/// Insert every symbol at every interior character boundary of `s`,
/// keeping results inside the accumulator's window.
///
/// Inputs of length <= 1 have no interior point and emit nothing.
/// Cost is O(chars(s) * |symbols|), the dominant driver with long bases.
pub fn inject_symbols(s: &str, alphabet: &Alphabet, acc: &mut CandidateAccumulator) -> Result<()> {
    let window = acc.window();
    let char_len = s.chars().count();
    // Every injected candidate has exactly char_len + 1 characters
    if !window.contains(char_len + 1) {
        return Ok(());
    }

    for (pos, _) in s.char_indices().skip(1) {
        for &sym in alphabet.symbols() {
            let mut candidate = String::with_capacity(s.len() + sym.len_utf8());
            candidate.push_str(&s[..pos]);
            candidate.push(sym);
            candidate.push_str(&s[pos..]);
            acc.push(candidate)?;
        }
    }
    Ok(())
}

/// Prepend and append every numbers-table entry to `s`, filtered by the
/// accumulator's window.
///
/// An entry that cannot fit (`chars(s) + chars(num) > max`) is skipped in
/// both orientations before any allocation. With the exhaustive profile
/// this early exit is what keeps the injector tractable.
pub fn inject_numbers(s: &str, alphabet: &Alphabet, acc: &mut CandidateAccumulator) -> Result<()> {
    let window = acc.window();
    let char_len = s.chars().count();
    if char_len + alphabet.min_number_len() > window.max {
        return Ok(());
    }

    for num in alphabet.numbers() {
        if char_len + num.len() > window.max {
            continue;
        }
        acc.push(format!("{}{}", num, s))?;
        acc.push(format!("{}{}", s, num))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LengthWindow, NumberProfile};

    fn acc(min: usize, max: usize) -> CandidateAccumulator {
        CandidateAccumulator::new(LengthWindow::new(min, max), None)
    }

    #[test]
    fn test_symbol_injection_interior_only() {
        let alphabet = Alphabet::new(NumberProfile::Basic);
        let mut acc = acc(3, 3);
        inject_symbols("ab", &alphabet, &mut acc).unwrap();
        // One interior point, 30 symbols
        assert_eq!(acc.len(), 30);
        assert!(acc.contains("a!b"));
        assert!(acc.contains("a~b"));
        assert!(!acc.contains("!ab"));
        assert!(!acc.contains("ab!"));
    }

    #[test]
    fn test_symbol_injection_short_input() {
        let alphabet = Alphabet::new(NumberProfile::Basic);
        let mut acc = acc(1, 10);
        inject_symbols("a", &alphabet, &mut acc).unwrap();
        inject_symbols("", &alphabet, &mut acc).unwrap();
        assert!(acc.is_empty());
    }

    #[test]
    fn test_symbol_injection_window_filter() {
        let alphabet = Alphabet::new(NumberProfile::Basic);
        // "abc" + one symbol is 4 chars, outside 6..=16
        let mut acc = acc(6, 16);
        inject_symbols("abc", &alphabet, &mut acc).unwrap();
        assert!(acc.is_empty());
    }

    #[test]
    fn test_symbol_injection_multibyte_boundaries() {
        let alphabet = Alphabet::new(NumberProfile::Basic);
        let mut acc = acc(3, 3);
        inject_symbols("éz", &alphabet, &mut acc).unwrap();
        assert_eq!(acc.len(), 30);
        assert!(acc.contains("é!z"));
    }

    #[test]
    fn test_number_injection_both_orientations() {
        let alphabet = Alphabet::new(NumberProfile::Basic);
        let mut acc = acc(3, 3);
        inject_numbers("ab", &alphabet, &mut acc).unwrap();
        // 10 digits, prefix and suffix forms
        assert_eq!(acc.len(), 20);
        assert!(acc.contains("7ab"));
        assert!(acc.contains("ab7"));
    }

    #[test]
    fn test_number_injection_early_skip() {
        let alphabet = Alphabet::new(NumberProfile::Exhaustive { bound: 10_000 });
        // Only 1-char entries fit a max of 5 around a 4-char word
        let mut acc = acc(1, 5);
        inject_numbers("word", &alphabet, &mut acc).unwrap();
        assert_eq!(acc.len(), 20);
        assert!(acc.contains("word9"));
        assert!(!acc.contains("word10"));
    }

    #[test]
    fn test_number_injection_nothing_fits() {
        let alphabet = Alphabet::new(NumberProfile::Basic);
        let mut acc = acc(1, 4);
        inject_numbers("word", &alphabet, &mut acc).unwrap();
        assert!(acc.is_empty());
    }
}
