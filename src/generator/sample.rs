//! Filtered sampling of generated strings.

use super::choice::ChoiceSource;
use super::walker::{RandomWalker, WalkPolicy};
use crate::core::Dfa;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// How many strings to collect and how hard to try.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Number of accepted strings to return
    pub count: usize,

    /// Upper bound on walks before giving up
    pub max_attempts: usize,

    /// Steps after which a single walk is abandoned and counted as a
    /// failed attempt
    pub max_steps: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            count: 5,
            max_attempts: 10_000,
            max_steps: 1_000,
        }
    }
}

/// Errors that can occur while sampling.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error(
        "Gave up after {attempts} attempts ({abandoned} abandoned) with {collected} of {wanted} strings collected"
    )]
    Exhausted {
        attempts: usize,
        abandoned: usize,
        collected: usize,
        wanted: usize,
    },
}

/// Check a string against the stricter currency format.
///
/// A `$` amount passes when it has no decimal point or exactly two characters
/// after it. Anything else passes only when it ends in `c` and is 2 or 3
/// characters long.
///
/// # Example
///
/// ```rust
/// use currency_dfa::generator::is_well_formed;
///
/// assert!(is_well_formed("$10"));
/// assert!(is_well_formed("$3.45"));
/// assert!(is_well_formed("42c"));
/// assert!(!is_well_formed("$3.4"));
/// assert!(!is_well_formed("100c"));
/// assert!(!is_well_formed("42"));
/// ```
pub fn is_well_formed(candidate: &str) -> bool {
    if candidate.starts_with('$') {
        match candidate.split('.').nth(1) {
            Some(fraction) => fraction.chars().count() == 2,
            None => true,
        }
    } else {
        candidate.ends_with('c') && matches!(candidate.chars().count(), 2 | 3)
    }
}

/// Walk repeatedly, keeping well-formed strings in the order found.
///
/// Returns exactly `config.count` strings, or [`SampleError::Exhausted`] once
/// `config.max_attempts` walks have run without collecting enough. A walk
/// longer than `config.max_steps` is abandoned and uses up one attempt.
///
/// # Example
///
/// ```rust
/// use currency_dfa::currency::currency_dfa;
/// use currency_dfa::generator::{collect_samples, RandomWalker, RngChoices, SampleConfig};
///
/// let mut walker = RandomWalker::new(RngChoices::seeded(5));
/// let samples = collect_samples(&mut walker, &currency_dfa(), &SampleConfig::default()).unwrap();
///
/// assert_eq!(samples.len(), 5);
/// ```
pub fn collect_samples<S, C>(
    walker: &mut RandomWalker<C>,
    dfa: &Dfa<S>,
    config: &SampleConfig,
) -> Result<Vec<String>, SampleError>
where
    S: WalkPolicy,
    C: ChoiceSource,
{
    let mut samples = Vec::with_capacity(config.count);
    let mut attempts = 0;
    let mut abandoned = 0;

    while samples.len() < config.count {
        if attempts >= config.max_attempts {
            return Err(SampleError::Exhausted {
                attempts,
                abandoned,
                collected: samples.len(),
                wanted: config.count,
            });
        }
        attempts += 1;

        let Some(path) = walker.walk_bounded(dfa, config.max_steps) else {
            abandoned += 1;
            continue;
        };

        let candidate = path.output();
        if is_well_formed(&candidate) {
            samples.push(candidate);
        } else {
            debug!(%candidate, "rejected sample");
        }
    }

    info!(
        attempts,
        abandoned,
        collected = samples.len(),
        "sampling complete"
    );
    Ok(samples)
}
