//! Per-merge records and per-solve metrics.
//!
//! [`MergeRecord`] describes one merge step; [`SolveMetrics`] aggregates
//! them over a solve, for telemetry and for sizing a retention cap.

use gridlink_core::StepId;

/// What happened during one merge step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeRecord {
    /// Which merge this was, starting at 1.
    pub step: StepId,
    /// Index of the lower merged group in the group list before the merge.
    /// The merged group takes this slot.
    pub left: usize,
    /// Index of the higher merged group before the merge. Removed.
    pub right: usize,
    /// Interior cells added by the merge.
    pub distance: u32,
    /// Candidate pairs achieving `distance`.
    pub matches: usize,
    /// Point pairs achieving `distance`, summed over `matches`.
    pub point_pairs: usize,
    /// Candidates built before deduplication and retention.
    pub synthesized: usize,
    /// Candidates kept in the merged group.
    pub retained: usize,
    /// Whether the synthesis budget cut enumeration short.
    pub truncated: bool,
    /// Groups left after the merge.
    pub groups_remaining: usize,
}

/// Aggregate metrics for one solve.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default)]
pub struct SolveMetrics {
    /// Merge steps performed.
    pub steps: u32,
    /// Candidates built across all merges.
    pub total_synthesized: usize,
    /// Largest number of tied candidates held by any one group.
    pub peak_alternatives: usize,
    /// Merges whose enumeration hit the synthesis budget.
    pub truncated_steps: u32,
    /// Wall-clock time spent in merge steps.
    pub elapsed_us: u64,
}

impl SolveMetrics {
    /// Fold one merge into the totals.
    pub fn record(&mut self, merge: &MergeRecord, elapsed_us: u64) {
        self.steps += 1;
        self.total_synthesized += merge.synthesized;
        self.peak_alternatives = self.peak_alternatives.max(merge.retained);
        if merge.truncated {
            self.truncated_steps += 1;
        }
        self.elapsed_us += elapsed_us;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(step: u32, synthesized: usize, retained: usize, truncated: bool) -> MergeRecord {
        MergeRecord {
            step: StepId(step),
            left: 0,
            right: 1,
            distance: 1,
            matches: 1,
            point_pairs: 1,
            synthesized,
            retained,
            truncated,
            groups_remaining: 1,
        }
    }

    #[test]
    fn default_metrics_are_zero() {
        let m = SolveMetrics::default();
        assert_eq!(m.steps, 0);
        assert_eq!(m.total_synthesized, 0);
        assert_eq!(m.peak_alternatives, 0);
        assert_eq!(m.truncated_steps, 0);
        assert_eq!(m.elapsed_us, 0);
    }

    #[test]
    fn record_accumulates() {
        let mut m = SolveMetrics::default();
        m.record(&record(1, 6, 6, false), 10);
        m.record(&record(2, 64, 4, true), 5);
        assert_eq!(m.steps, 2);
        assert_eq!(m.total_synthesized, 70);
        assert_eq!(m.peak_alternatives, 6);
        assert_eq!(m.truncated_steps, 1);
        assert_eq!(m.elapsed_us, 15);
    }
}
