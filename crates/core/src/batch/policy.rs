//! Batch failure policy
//!
//! Per-item results are folded into a [`BatchOutcome`] here, independently of
//! how each item's result was produced.

use tootbatch_domain::{OutputRecord, Result, TootError};
use tracing::warn;

/// What to do when an item fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failure and surface it; accumulated output is
    /// discarded
    #[default]
    Abort,
    /// Record an error-shaped output record for the item and move on
    Continue,
}

impl FailurePolicy {
    pub fn from_continue_flag(continue_on_failure: bool) -> Self {
        if continue_on_failure {
            Self::Continue
        } else {
            Self::Abort
        }
    }
}

/// A failure isolated under [`FailurePolicy::Continue`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    pub index: usize,
    pub error: TootError,
}

/// Result of a completed batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    pub records: Vec<OutputRecord>,
    pub items_processed: usize,
    pub failures: Vec<ItemFailure>,
}

impl BatchOutcome {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn into_records(self) -> Vec<OutputRecord> {
        self.records
    }
}

/// Folds per-item results under a [`FailurePolicy`].
#[derive(Debug)]
pub struct BatchAccumulator {
    policy: FailurePolicy,
    outcome: BatchOutcome,
}

impl BatchAccumulator {
    pub fn new(policy: FailurePolicy) -> Self {
        Self { policy, outcome: BatchOutcome::default() }
    }

    /// Absorb the result of item `index`.
    ///
    /// # Errors
    /// Under [`FailurePolicy::Abort`] a failed item returns its error; the
    /// caller must stop processing further items.
    pub fn absorb(&mut self, index: usize, result: Result<Vec<OutputRecord>>) -> Result<()> {
        self.outcome.items_processed += 1;
        match result {
            Ok(records) => {
                self.outcome.records.extend(records);
                Ok(())
            }
            Err(error) => match self.policy {
                FailurePolicy::Continue => {
                    warn!(index, kind = error.kind(), error = %error, "item failed, continuing");
                    self.outcome.records.push(OutputRecord::failure(error.to_string(), index));
                    self.outcome.failures.push(ItemFailure { index, error });
                    Ok(())
                }
                FailurePolicy::Abort => {
                    warn!(index, kind = error.kind(), error = %error, "item failed, aborting batch");
                    Err(error)
                }
            },
        }
    }

    pub fn finish(self) -> BatchOutcome {
        self.outcome
    }
}
