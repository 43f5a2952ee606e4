//! Parallel two-level subtree generation.
//!
//! Every parent arc is one unit of work: build `base.p`, then expand
//! `generate(base.p, child_start, child_end)`. Units run on a rayon pool and
//! append their batch to a shared accumulator. Nothing else is shared
//! between units. Once every unit has finished, the accumulator is sorted
//! with [`PenOid::total_cmp`], which makes the output identical regardless
//! of thread count or completion order.

use super::options::BulkOptions;
use crate::base::{OidError, Result};
use crate::oid::PenOid;
use parking_lot::Mutex;
use rayon::ThreadPool;
use rayon::prelude::*;
use std::ops::{Range, RangeInclusive};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// A unit of bulk generation that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFailure {
    /// Parent arc of the failed unit
    pub parent: u32,
    pub error: OidError,
}

/// Errors from bulk generation.
#[derive(Debug, Error)]
pub enum BulkError {
    /// Validation failed before any unit was dispatched.
    #[error(transparent)]
    Rejected(#[from] OidError),

    /// Some units failed. `generated` holds the sorted output of the rest.
    #[error(
        "{} bulk generation unit(s) failed, first: {}",
        .failures.len(),
        first_failure(.failures)
    )]
    Units {
        failures: Vec<UnitFailure>,
        generated: Vec<PenOid>,
    },
}

fn first_failure(failures: &[UnitFailure]) -> String {
    failures
        .first()
        .map(|failure| format!("parent {}: {}", failure.parent, failure.error))
        .unwrap_or_default()
}

/// What happened to one unit.
enum UnitOutcome {
    Done,
    Skipped,
    Failed(UnitFailure),
}

impl PenOid {
    /// Expand every parent arc in `parents` and its children in `children`.
    ///
    /// Each parent contributes itself plus one value per child arc. The
    /// result is sorted. Range validation happens before any work starts.
    pub fn generate_bulk(
        &self,
        parents: Range<u32>,
        children: RangeInclusive<u32>,
        options: &BulkOptions,
    ) -> Result<Vec<PenOid>, BulkError> {
        self.run_bulk(parents, children, options, None)
    }

    /// Like [`generate_bulk`](Self::generate_bulk), with cancellation support.
    ///
    /// A unit that sees `cancel` signalled before it starts contributes
    /// nothing; units already running finish. The returned values are the
    /// sorted output of every unit that ran.
    pub fn generate_bulk_async(
        &self,
        parents: Range<u32>,
        children: RangeInclusive<u32>,
        options: &BulkOptions,
        cancel: &CancellationToken,
    ) -> Result<Vec<PenOid>, BulkError> {
        self.run_bulk(parents, children, options, Some(cancel))
    }

    fn run_bulk(
        &self,
        parents: Range<u32>,
        children: RangeInclusive<u32>,
        options: &BulkOptions,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<PenOid>, BulkError> {
        if !self.is_initialized() {
            return Err(OidError::UninitializedOid.into());
        }
        OidError::check_range("parent", parents.start, parents.end)?;
        let (child_start, child_end) = children.into_inner();
        OidError::check_range("child", child_start, child_end)?;

        let pool = options.build_pool()?;
        debug!(
            base = %self,
            units = parents.end - parents.start,
            workers = pool.current_num_threads(),
            "dispatching bulk generation"
        );

        dispatch(&pool, parents, cancel, |p| {
            let parent = self.child_unchecked(p);
            Ok(parent.generate(child_start, child_end)?.iter().collect())
        })
    }
}

/// Run `unit` for every parent arc on `pool`, then sort what was produced.
fn dispatch<F>(
    pool: &ThreadPool,
    parents: Range<u32>,
    cancel: Option<&CancellationToken>,
    unit: F,
) -> Result<Vec<PenOid>, BulkError>
where
    F: Fn(u32) -> Result<Vec<PenOid>> + Sync,
{
    let accumulated = Mutex::new(Vec::new());

    let outcomes: Vec<UnitOutcome> = pool.install(|| {
        parents
            .into_par_iter()
            .map(|p| {
                if cancel.is_some_and(CancellationToken::is_cancelled) {
                    return UnitOutcome::Skipped;
                }
                match unit(p) {
                    Ok(batch) => {
                        accumulated.lock().extend(batch);
                        UnitOutcome::Done
                    }
                    Err(error) => UnitOutcome::Failed(UnitFailure { parent: p, error }),
                }
            })
            .collect()
    });

    let mut generated = accumulated.into_inner();
    pool.install(|| generated.par_sort_by(PenOid::total_cmp));

    let mut skipped = 0usize;
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            UnitOutcome::Done => {}
            UnitOutcome::Skipped => skipped += 1,
            UnitOutcome::Failed(failure) => failures.push(failure),
        }
    }

    debug!(generated = generated.len(), skipped, "bulk generation finished");

    if failures.is_empty() {
        return Ok(generated);
    }

    failures.sort_by_key(|failure| failure.parent);
    warn!(failed = failures.len(), "bulk generation units failed");
    Err(BulkError::Units {
        failures,
        generated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_keeps_results_of_successful_units() {
        let base = PenOid::new(5);
        let pool = BulkOptions::with_threads(2).build_pool().unwrap();

        let result = dispatch(&pool, 0..3, None, |p| {
            if p == 1 {
                return Err(OidError::UninitializedOid);
            }
            Ok(vec![base.child_unchecked(p)])
        });

        let Err(BulkError::Units {
            failures,
            generated,
        }) = result
        else {
            panic!("expected unit failures");
        };
        assert_eq!(
            failures,
            vec![UnitFailure {
                parent: 1,
                error: OidError::UninitializedOid
            }]
        );
        let generated: Vec<String> = generated.iter().map(ToString::to_string).collect();
        assert_eq!(generated, vec!["1.3.6.1.4.1.5.0", "1.3.6.1.4.1.5.2"]);
    }

    #[test]
    fn test_dispatch_skips_all_units_when_cancelled() {
        let pool = BulkOptions::sequential().build_pool().unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let generated = dispatch(&pool, 0..10, Some(&cancel), |p| {
            Ok(vec![PenOid::new(p)])
        })
        .unwrap();
        assert!(generated.is_empty());
    }

    #[test]
    fn test_units_error_message_names_first_failure() {
        let err = BulkError::Units {
            failures: vec![UnitFailure {
                parent: 4,
                error: OidError::UninitializedOid,
            }],
            generated: Vec::new(),
        };
        assert_eq!(
            err.to_string(),
            "1 bulk generation unit(s) failed, first: parent 4: OID is not initialized"
        );
    }
}
