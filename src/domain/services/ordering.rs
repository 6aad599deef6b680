//! Ordering and filtering
//!
//! Presentation-ready orderings of visits and dispatch tasks. Total,
//! deterministic functions of their inputs; "now" is always an explicit
//! parameter, never an ambient clock.

use crate::domain::entities::{DispatchTask, Stage, Visit, VisitStatus};
use crate::domain::services::classifier::StageClassifier;
use crate::domain::value_objects::MinuteOfDay;

/// Ordering/filtering domain service
pub struct OrderingService;

impl OrderingService {
    /// Rank used for the visit list: what needs attention now first,
    /// then what's imminent, then history, then dead records.
    fn visit_rank(status: VisitStatus) -> u8 {
        match status {
            VisitStatus::Ongoing => 0,
            VisitStatus::Scheduled => 1,
            VisitStatus::Completed => 2,
            VisitStatus::Cancelled => 3,
        }
    }

    /// Sort visits by rank, then clock time, keeping input order for
    /// exact ties (stable sort).
    pub fn sort_visits(visits: &[Visit]) -> Vec<Visit> {
        let mut sorted = visits.to_vec();
        sorted.sort_by_key(|v| (Self::visit_rank(v.status()), v.time()));
        sorted
    }

    /// Tasks in the selected stage, in original relative order
    pub fn filter_by_stage(tasks: &[DispatchTask], stage: Stage) -> Vec<DispatchTask> {
        tasks
            .iter()
            .filter(|t| t.stage() == stage)
            .cloned()
            .collect()
    }

    /// Upcoming tasks that are already late to dispatch, sorted by slot
    /// time ascending. Triage order for the upcoming queue, not the
    /// crisis ranking of the alert banner.
    pub fn needs_attention(tasks: &[DispatchTask], now: MinuteOfDay) -> Vec<DispatchTask> {
        let mut flagged: Vec<DispatchTask> = tasks
            .iter()
            .filter(|t| t.stage() == Stage::Upcoming)
            .filter(|t| StageClassifier::classify(t, now).late_dispatch)
            .cloned()
            .collect();
        flagged.sort_by_key(|t| t.slot());
        flagged
    }
}
