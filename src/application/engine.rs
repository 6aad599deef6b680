//! Dashboard engine
//!
//! One pure, synchronous evaluation pass: snapshot in, view models out.
//! No state is retained between evaluations, so concurrent callers with
//! their own snapshots never interfere.

use tracing::{debug, warn};

use crate::application::dto::FeedSnapshot;
use crate::application::snapshot::EntitySnapshot;
use crate::application::views::{
    AgentRoster, DashboardView, DispatchBoard, RosterEntry, VisitSummary, VisitView,
};
use crate::domain::entities::Stage;
use crate::domain::services::{AgentStatusAggregator, AlertEngine, OrderingService};
use crate::error::{Diagnostic, HubResult};

/// End-to-end evaluation of one snapshot
pub struct DashboardEngine;

impl DashboardEngine {
    /// Evaluate a typed snapshot into presentation-ready views.
    ///
    /// `selected_stage` picks the board's filtered list (the stage tab
    /// on the control tower). Schedule-consistency findings are appended
    /// as warnings without suppressing any output.
    pub fn evaluate(snapshot: &EntitySnapshot, selected_stage: Stage) -> DashboardView {
        debug!(
            visits = snapshot.visits.len(),
            tasks = snapshot.tasks.len(),
            agents = snapshot.agents.len(),
            now = snapshot.now.get(),
            "evaluating dashboard snapshot"
        );

        let visits = OrderingService::sort_visits(&snapshot.visits);
        let summary = VisitSummary::tally(&snapshot.visits);

        let board = DispatchBoard {
            filtered: OrderingService::filter_by_stage(&snapshot.tasks, selected_stage),
            alerts: AlertEngine::compute_alerts(&snapshot.tasks, snapshot.now),
            needs_attention: OrderingService::needs_attention(&snapshot.tasks, snapshot.now),
        };

        let now_ts = snapshot.now_timestamp();
        let mut diagnostics = Vec::new();
        let entries = snapshot
            .agents
            .iter()
            .map(|agent| {
                if let Some(error) = AgentStatusAggregator::check_schedule_consistency(agent) {
                    warn!(agent = %agent.id(), %error, "schedule inconsistency");
                    diagnostics.push(Diagnostic::warning(agent.id().to_string(), error));
                }
                let status = AgentStatusAggregator::derive_status(agent, now_ts);
                RosterEntry {
                    agent: agent.clone(),
                    live: status.live,
                    runtime_minutes: status.runtime_minutes,
                }
            })
            .collect();

        if !board.alerts.is_empty() {
            debug!(alerts = board.alerts.len(), "late dispatches flagged");
        }

        DashboardView {
            visit_view: VisitView { visits, summary },
            board,
            roster: AgentRoster { entries },
            diagnostics,
        }
    }

    /// Convert a raw feed delivery and evaluate it in one call.
    ///
    /// Conversion diagnostics (excluded records) come first in the
    /// returned view's diagnostics, followed by evaluation warnings.
    pub fn evaluate_feed(feed: &FeedSnapshot, selected_stage: Stage) -> HubResult<DashboardView> {
        let (snapshot, mut diagnostics) = EntitySnapshot::from_feed(feed)?;
        for diagnostic in &diagnostics {
            warn!(subject = %diagnostic.subject, error = %diagnostic.error, "record excluded from evaluation");
        }
        let mut view = Self::evaluate(&snapshot, selected_stage);
        diagnostics.append(&mut view.diagnostics);
        view.diagnostics = diagnostics;
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        AgentLiveStatus, CallStatus, DispatchTask, StageDetails, Visit, VisitKind, VisitStatus,
    };
    use crate::domain::value_objects::{
        BusinessDate, ClockTime, LeadId, TaskId, VisitId,
    };

    fn snapshot(visits: Vec<Visit>, tasks: Vec<DispatchTask>) -> EntitySnapshot {
        EntitySnapshot {
            as_of: BusinessDate::parse("2026-02-11").unwrap(),
            now: ClockTime::parse("16:30").unwrap().minute_of_day(),
            visits,
            tasks,
            agents: vec![],
        }
    }

    fn visit(id: &str, time: &str, status: VisitStatus) -> Visit {
        Visit::new(
            VisitId::new(id).unwrap(),
            LeadId::new(format!("LD-{id}")).unwrap(),
            VisitKind::HomeTestDrive,
            BusinessDate::parse("2026-02-11").unwrap(),
            ClockTime::parse(time).unwrap(),
            format!("Customer {id}"),
            "Nexon EV",
            None,
            status,
            None,
        )
        .unwrap()
    }

    fn late_task(lead: &str) -> DispatchTask {
        DispatchTask::new(
            TaskId::new(lead).unwrap(),
            LeadId::new(lead).unwrap(),
            "Priya G.",
            "Aman Sharma",
            ClockTime::parse("17:00").unwrap(),
            None,
            StageDetails::Upcoming {
                travel_mins: Some(35),
                call: CallStatus::NotApplicable,
                agent_status: AgentLiveStatus::AtHub,
            },
        )
    }

    #[test]
    fn test_evaluate_produces_all_views() {
        let view = DashboardEngine::evaluate(
            &snapshot(
                vec![
                    visit("1", "10:15", VisitStatus::Completed),
                    visit("2", "16:00", VisitStatus::Ongoing),
                    visit("3", "17:00", VisitStatus::Scheduled),
                ],
                vec![late_task("LD-10109")],
            ),
            Stage::Upcoming,
        );

        assert_eq!(view.visit_view.summary.total, 3);
        assert_eq!(view.visit_view.summary.active, 2);
        assert_eq!(view.visit_view.summary.completed, 1);
        assert_eq!(view.visit_view.visits[0].status(), VisitStatus::Ongoing);

        assert_eq!(view.board.filtered.len(), 1);
        assert_eq!(view.board.alerts.len(), 1);
        assert_eq!(view.board.alerts[0].minutes_overdue, 5);
        assert_eq!(view.board.needs_attention.len(), 1);
        assert!(view.diagnostics.is_empty());
    }

    #[test]
    fn test_evaluate_is_pure_and_repeatable() {
        let snap = snapshot(vec![visit("1", "10:15", VisitStatus::Scheduled)], vec![late_task("LD-10109")]);
        let first = DashboardEngine::evaluate(&snap, Stage::Upcoming);
        let second = DashboardEngine::evaluate(&snap, Stage::Upcoming);
        assert_eq!(first.board.alerts, second.board.alerts);
        assert_eq!(
            first.visit_view.visits.len(),
            second.visit_view.visits.len()
        );
    }
}
