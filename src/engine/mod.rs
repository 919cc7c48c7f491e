//! Mutation engine - expand seed tokens into password candidates
//!
//! Pipeline: seed permutations -> case variants -> (strong mode) symbol
//! injection, number injection, and combined fragments -> deduplicated,
//! sorted output.

mod accumulator;
mod alphabet;
mod case;
mod combine;
mod driver;
mod inject;

pub use accumulator::CandidateAccumulator;
pub use alphabet::{Alphabet, SYMBOLS};
pub use case::case_variants;
pub use combine::combine;
pub use driver::MutationEngine;
pub use inject::{inject_numbers, inject_symbols};
