//! Assertions on stage snapshots with readable failure messages.

use moonphase_types::{CalculationStage, FailureKind, Generation, StageSnapshot};

/// Assert the snapshot shows a result for `generation` with the given phase name.
pub fn assert_visible(snapshot: &StageSnapshot, generation: Generation, phase_name: &str) {
    assert_eq!(
        snapshot.stage,
        CalculationStage::Visible,
        "expected visible stage, got {:?}",
        snapshot
    );
    assert_eq!(snapshot.generation, generation, "stale generation: {:?}", snapshot);
    let result = snapshot
        .result
        .as_ref()
        .unwrap_or_else(|| panic!("visible snapshot without result: {:?}", snapshot));
    assert_eq!(result.phase_name, phase_name);
    assert!(snapshot.error.is_none(), "unexpected error: {:?}", snapshot.error);
}

/// Assert the snapshot is the failure state for `generation`, failed for
/// the given reason, and its message mentions `needle`.
pub fn assert_failed(
    snapshot: &StageSnapshot,
    generation: Generation,
    kind: FailureKind,
    needle: &str,
) {
    assert_eq!(
        snapshot.stage,
        CalculationStage::Failed,
        "expected failed stage, got {:?}",
        snapshot
    );
    assert_eq!(snapshot.generation, generation, "stale generation: {:?}", snapshot);
    assert!(snapshot.result.is_none(), "failed snapshot carries a result");
    let failure = snapshot
        .error
        .as_ref()
        .unwrap_or_else(|| panic!("failed snapshot without error: {:?}", snapshot));
    assert_eq!(failure.kind, kind, "wrong failure kind: {:?}", failure);
    assert!(
        failure.message.contains(needle),
        "error {:?} does not mention {:?}",
        failure.message,
        needle
    );
}

/// Assert the snapshot is still waiting on timers and shows nothing.
pub fn assert_pending(snapshot: &StageSnapshot, generation: Generation) {
    assert!(
        snapshot.stage.is_busy(),
        "expected animating or loading, got {:?}",
        snapshot
    );
    assert_eq!(snapshot.generation, generation);
    assert!(snapshot.loading);
    assert!(snapshot.result.is_none());
    assert!(snapshot.error.is_none());
}
