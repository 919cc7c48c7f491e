//! Suffix/prefix/infix combiner (strong mode)

use super::accumulator::CandidateAccumulator;
use super::alphabet::Alphabet;
use crate::error::Result;
use crate::types::CombinerProfile;

/// Attach symbol/number fragments to `s` according to the combiner profile.
///
/// `Cross` forms a `symbol + number` compound fragment and places it as
/// suffix, prefix, and floor-half middle insertion. `Fixed` emits the seven
/// legacy concatenation patterns over each symbol/digit pair.
pub fn combine(
    s: &str,
    alphabet: &Alphabet,
    profile: CombinerProfile,
    acc: &mut CandidateAccumulator,
) -> Result<()> {
    match profile {
        CombinerProfile::Cross => combine_cross(s, alphabet, acc),
        CombinerProfile::Fixed => combine_fixed(s, alphabet, acc),
    }
}

fn combine_cross(s: &str, alphabet: &Alphabet, acc: &mut CandidateAccumulator) -> Result<()> {
    let window = acc.window();
    let char_len = s.chars().count();
    // Smallest possible fragment is symbol + shortest number entry
    if char_len + 1 + alphabet.min_number_len() > window.max {
        return Ok(());
    }

    // Middle insertion happens at the floor-half character boundary, a
    // single fixed point rather than all interior points
    let mid = s
        .char_indices()
        .nth(char_len / 2)
        .map(|(pos, _)| pos)
        .unwrap_or(s.len());

    for &sym in alphabet.symbols() {
        for num in alphabet.numbers() {
            // part = sym + num, at least two characters
            if char_len + 1 + num.len() > window.max {
                continue;
            }
            let mut part = String::with_capacity(sym.len_utf8() + num.len());
            part.push(sym);
            part.push_str(num);

            acc.push(format!("{}{}", s, part))?;
            acc.push(format!("{}{}", part, s))?;
            acc.push(format!("{}{}{}", &s[..mid], part, &s[mid..]))?;
        }
    }
    Ok(())
}

fn combine_fixed(s: &str, alphabet: &Alphabet, acc: &mut CandidateAccumulator) -> Result<()> {
    let window = acc.window();
    let char_len = s.chars().count();
    // Shortest pattern adds a single symbol or digit
    if char_len + 1 > window.max {
        return Ok(());
    }

    // Single attachments once per symbol or number, not once per pair
    for &sym in alphabet.symbols() {
        acc.push(format!("{}{}", s, sym))?;
        acc.push(format!("{}{}", sym, s))?;
    }
    for num in alphabet.numbers() {
        if char_len + num.len() > window.max {
            continue;
        }
        acc.push(format!("{}{}", s, num))?;
        acc.push(format!("{}{}", num, s))?;
    }

    for &sym in alphabet.symbols() {
        for num in alphabet.numbers() {
            if char_len + 1 + num.len() > window.max {
                continue;
            }
            acc.push(format!("{}{}{}", s, sym, num))?;
            acc.push(format!("{}{}{}", sym, s, num))?;
            acc.push(format!("{}{}{}", num, s, sym))?;
        }
    }
    Ok(())
}
