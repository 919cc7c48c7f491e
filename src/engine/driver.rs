//! Combination driver - permutation enumeration and the mutation pipeline

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use futures::future::join_all;
use parking_lot::Mutex;

use super::accumulator::CandidateAccumulator;
use super::alphabet::Alphabet;
use super::case::case_variants;
use super::combine::combine;
use super::inject::{inject_numbers, inject_symbols};
use crate::error::{Result, WordforgeError};
use crate::types::{CombinerProfile, GenerationReport, MutationConfig};

/// Mutation engine: expands seed tokens into a sorted candidate wordlist
pub struct MutationEngine {
    config: MutationConfig,
    alphabet: Arc<Alphabet>,
}

impl MutationEngine {
    /// Create an engine; the alphabet tables are built once here and
    /// shared read-only afterwards.
    pub fn new(config: MutationConfig) -> Self {
        let alphabet = Arc::new(Alphabet::new(config.numbers));
        Self { config, alphabet }
    }

    pub fn config(&self) -> &MutationConfig {
        &self.config
    }

    /// Enumerate base strings: all ordered permutations of the seed list
    /// for group sizes 1 and 2, each concatenated in permutation order.
    pub fn bases(seeds: &[String]) -> Vec<String> {
        let mut bases = Vec::with_capacity(seeds.len() * seeds.len());
        for seed in seeds {
            bases.push(seed.clone());
        }
        for (i, first) in seeds.iter().enumerate() {
            for (j, second) in seeds.iter().enumerate() {
                if i != j {
                    bases.push(format!("{}{}", first, second));
                }
            }
        }
        bases
    }

    /// Run the full pipeline for one base string
    fn mutate_base(&self, base: &str, acc: &mut CandidateAccumulator) -> Result<()> {
        for variant in case_variants(base, self.config.cases) {
            acc.push(variant.clone())?;

            if self.config.strong {
                // Injectors run on every case variant, including ones
                // outside the window: an under-min variant can still grow
                // into the window once a fragment is attached.
                inject_symbols(&variant, &self.alphabet, acc)?;
                if self.config.combiner == CombinerProfile::Cross {
                    inject_numbers(&variant, &self.alphabet, acc)?;
                }
                combine(&variant, &self.alphabet, self.config.combiner, acc)?;
            }
        }
        Ok(())
    }

    /// Generate the sorted candidate list, single-threaded.
    ///
    /// An empty seed list yields an empty list; callers are expected to
    /// reject that case earlier with a friendlier message.
    pub fn generate(&self, seeds: &[String]) -> Result<Vec<String>> {
        let mut acc = CandidateAccumulator::new(self.config.window, self.config.max_candidates);
        let bases = Self::bases(seeds);
        tracing::debug!(
            seeds = seeds.len(),
            bases = bases.len(),
            strong = self.config.strong,
            "starting generation"
        );

        for base in &bases {
            self.mutate_base(base, &mut acc)?;
        }

        tracing::info!(candidates = acc.len(), "generation complete");
        Ok(acc.into_sorted(self.config.sort))
    }

    /// Build the run summary for a finished generation
    pub fn report(
        &self,
        seeds: &[String],
        candidates: &[String],
        elapsed: std::time::Duration,
    ) -> GenerationReport {
        GenerationReport {
            seed_count: seeds.len(),
            base_count: Self::bases(seeds).len(),
            candidate_count: candidates.len(),
            strong: self.config.strong,
            window: self.config.window,
            numbers: self.config.numbers,
            elapsed,
            generated_at: Utc::now(),
        }
    }

    /// Generate and return the run summary alongside the list
    pub fn generate_with_report(
        &self,
        seeds: &[String],
    ) -> Result<(Vec<String>, GenerationReport)> {
        let start = Instant::now();
        let candidates = self.generate(seeds)?;
        let report = self.report(seeds, &candidates, start.elapsed());
        Ok((candidates, report))
    }

    /// Generate in parallel by partitioning bases across blocking workers.
    ///
    /// Each worker accumulates into a local set; the union after all
    /// workers complete equals the sequential result regardless of
    /// execution order. Every local set is a subset of that union, so the
    /// per-worker cap check is a safe early bail and the merged set is the
    /// authoritative one.
    pub async fn generate_parallel(&self, seeds: &[String]) -> Result<Vec<String>> {
        let bases = Self::bases(seeds);
        let workers = self.config.concurrency.max(1).min(bases.len().max(1));
        if workers <= 1 {
            return self.generate(seeds);
        }

        tracing::debug!(
            bases = bases.len(),
            workers,
            "starting parallel generation"
        );

        let chunk_size = bases.len().div_ceil(workers);
        let merged = Arc::new(Mutex::new(CandidateAccumulator::new(
            self.config.window,
            self.config.max_candidates,
        )));
        // Set by the first failing worker so the others stop between
        // bases instead of finishing their chunks
        let aborted = Arc::new(AtomicBool::new(false));
        let mut handles = Vec::with_capacity(workers);

        for chunk in bases.chunks(chunk_size) {
            let chunk: Vec<String> = chunk.to_vec();
            let engine = self.clone_for_worker();
            let merged = Arc::clone(&merged);
            let aborted = Arc::clone(&aborted);

            handles.push(tokio::task::spawn_blocking(move || {
                let mut local =
                    CandidateAccumulator::new(engine.config.window, engine.config.max_candidates);
                for base in &chunk {
                    if aborted.load(Ordering::Relaxed) {
                        return Ok(());
                    }
                    if let Err(e) = engine.mutate_base(base, &mut local) {
                        aborted.store(true, Ordering::Relaxed);
                        return Err(e);
                    }
                }
                merged.lock().merge(local).map_err(|e| {
                    aborted.store(true, Ordering::Relaxed);
                    e
                })
            }));
        }

        for joined in join_all(handles).await {
            joined.map_err(|e| WordforgeError::internal(format!("worker panicked: {}", e)))??;
        }

        let merged = Arc::try_unwrap(merged)
            .map_err(|_| WordforgeError::internal("accumulator still shared after join"))?
            .into_inner();

        tracing::info!(candidates = merged.len(), "parallel generation complete");
        Ok(merged.into_sorted(self.config.sort))
    }

    fn clone_for_worker(&self) -> Self {
        Self {
            config: self.config.clone(),
            alphabet: Arc::clone(&self.alphabet),
        }
    }
}
