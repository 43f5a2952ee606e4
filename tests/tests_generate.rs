//! Generation tests
//!
//! Single-level sequences and parallel bulk expansion.

use pen_oid::{BulkError, BulkOptions, OidError, PenOid};
use rstest::rstest;
use tokio_util::sync::CancellationToken;

fn dotted(oids: &[PenOid]) -> Vec<String> {
    oids.iter().map(ToString::to_string).collect()
}

// ============================================================================
// Single-level
// ============================================================================

#[rstest]
#[case(0, 0, 2)]
#[case(0, 9, 11)]
#[case(100, 199, 101)]
fn test_generate_length(#[case] start: u32, #[case] end: u32, #[case] expected: usize) {
    let generate = PenOid::new(32473).generate(start, end).unwrap();
    assert_eq!(generate.len(), expected);
    assert_eq!(generate.iter().count(), expected);
}

#[test]
fn test_generate_children_follow_base() {
    let base = PenOid::parse("1.3.6.1.4.1.32473.1").unwrap();
    let generate = base.generate(5, 6).unwrap();
    let mut iter = generate.iter();

    assert_eq!(iter.next().unwrap(), base);
    for child in iter {
        assert!(child.is_child_of(&base));
    }
}

// ============================================================================
// Bulk
// ============================================================================

#[rstest]
#[case(BulkOptions::sequential())]
#[case(BulkOptions::with_threads(2))]
#[case(BulkOptions::with_threads(16))]
#[case(BulkOptions::default())]
fn test_bulk_same_output_for_any_worker_count(#[case] options: BulkOptions) {
    let base = PenOid::new(32473);
    let reference = base
        .generate_bulk(0..2, 0..=1, &BulkOptions::sequential())
        .unwrap();
    let generated = base.generate_bulk(0..2, 0..=1, &options).unwrap();

    assert_eq!(
        dotted(&reference),
        vec![
            "1.3.6.1.4.1.32473.0",
            "1.3.6.1.4.1.32473.0.0",
            "1.3.6.1.4.1.32473.0.1",
            "1.3.6.1.4.1.32473.1",
            "1.3.6.1.4.1.32473.1.0",
            "1.3.6.1.4.1.32473.1.1",
        ]
    );
    assert_eq!(dotted(&generated), dotted(&reference));
}

#[rstest]
#[case(0..3, 0..=1)]
#[case(10..20, 5..=5)]
#[case(0..7, 0..=30)]
fn test_bulk_entries_per_parent(
    #[case] parents: std::ops::Range<u32>,
    #[case] children: std::ops::RangeInclusive<u32>,
) {
    let per_parent = (children.end() - children.start() + 2) as usize;
    let units = (parents.end - parents.start) as usize;
    let generated = PenOid::new(1)
        .generate_bulk(parents, children, &BulkOptions::default())
        .unwrap();
    assert_eq!(generated.len(), units * per_parent);
}

#[test]
fn test_bulk_repeated_runs_identical() {
    let base = PenOid::parse("1.3.6.1.4.1.32473.77").unwrap();
    let first = base
        .generate_bulk(0..25, 0..=12, &BulkOptions::with_threads(8))
        .unwrap();
    for _ in 0..3 {
        let again = base
            .generate_bulk(0..25, 0..=12, &BulkOptions::with_threads(8))
            .unwrap();
        assert_eq!(dotted(&again), dotted(&first));
    }
}

#[test]
#[allow(clippy::reversed_empty_ranges)]
fn test_bulk_invalid_child_range() {
    let err = PenOid::new(1)
        .generate_bulk(0..2, 3..=1, &BulkOptions::default())
        .unwrap_err();
    match err {
        BulkError::Rejected(OidError::InvalidRange {
            dimension,
            start,
            end,
        }) => {
            assert_eq!(dimension, "child");
            assert_eq!((start, end), (3, 1));
        }
        other => panic!("Expected InvalidRange, got {other:?}"),
    }
}

// ============================================================================
// Cancellation
// ============================================================================

#[test]
fn test_cancelled_token_enqueues_nothing() {
    let cancel = CancellationToken::new();
    cancel.cancel();
    let generated = PenOid::new(1)
        .generate_bulk_async(0..50, 0..=50, &BulkOptions::with_threads(4), &cancel)
        .unwrap();
    assert!(generated.is_empty());
}

#[test]
fn test_live_token_generates_everything() {
    let cancel = CancellationToken::new();
    let generated = PenOid::new(1)
        .generate_bulk_async(0..3, 0..=1, &BulkOptions::with_threads(4), &cancel)
        .unwrap();
    assert_eq!(generated.len(), 9);
}

#[test]
fn test_parent_token_cancels_child_token() {
    let cancel = CancellationToken::new();
    let child = cancel.child_token();
    cancel.cancel();
    let generated = PenOid::new(1)
        .generate_bulk_async(0..200, 0..=3, &BulkOptions::sequential(), &child)
        .unwrap();
    assert!(generated.is_empty());
}

#[test]
fn test_cancellation_mid_run_keeps_whole_units() {
    let cancel = CancellationToken::new();
    let canceller = {
        let cancel = cancel.clone();
        std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(5));
            cancel.cancel();
        })
    };

    let generated = PenOid::new(1)
        .generate_bulk_async(0..20_000, 0..=3, &BulkOptions::with_threads(2), &cancel)
        .unwrap();
    canceller.join().unwrap();

    // each unit is all-or-nothing: parent plus four children
    assert_eq!(generated.len() % 5, 0);
    assert!(generated.len() <= 20_000 * 5);
    assert!(
        generated
            .windows(2)
            .all(|pair| pair[0].total_cmp(&pair[1]).is_lt())
    );
}
