//! View models (read models)
//!
//! The only structures that cross the boundary to a presentation
//! adapter. Adapters must treat them as immutable.

use serde::Serialize;

use crate::domain::entities::{DispatchTask, FieldAgent, Visit};
use crate::domain::services::{Alert, LiveStatus};
use crate::error::Diagnostic;

/// Scorecard figures for the day's visit list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisitSummary {
    /// All visits on the dashboard day
    pub total: usize,
    /// Scheduled or ongoing
    pub active: usize,
    /// Completed
    pub completed: usize,
}

impl VisitSummary {
    /// Tally the scorecards over the day's visits
    pub fn tally(visits: &[Visit]) -> Self {
        Self {
            total: visits.len(),
            active: visits.iter().filter(|v| v.is_active()).count(),
            completed: visits
                .iter()
                .filter(|v| v.status() == crate::domain::entities::VisitStatus::Completed)
                .count(),
        }
    }
}

/// Ordered visit list plus its scorecards
#[derive(Debug, Clone, Serialize)]
pub struct VisitView {
    /// Visits in presentation order
    pub visits: Vec<Visit>,
    /// Scorecard tallies
    pub summary: VisitSummary,
}

/// The dispatch control-tower board
#[derive(Debug, Clone, Serialize)]
pub struct DispatchBoard {
    /// Tasks in the caller-selected stage, original relative order
    pub filtered: Vec<DispatchTask>,
    /// Ranked late-dispatch alerts, most overdue first
    pub alerts: Vec<Alert>,
    /// Late upcoming tasks in slot order, for queue triage
    pub needs_attention: Vec<DispatchTask>,
}

/// One agent on the roster with derived figures
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    /// The agent record, including schedule and counters
    pub agent: FieldAgent,
    /// Live status read from the agent's current activity
    pub live: LiveStatus,
    /// Whole minutes since the current activity started
    pub runtime_minutes: i64,
}

/// The relationship-manager roster
#[derive(Debug, Clone, Serialize)]
pub struct AgentRoster {
    /// One entry per agent, feed order
    pub entries: Vec<RosterEntry>,
}

/// Everything one evaluation pass produces
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Visit list and scorecards
    pub visit_view: VisitView,
    /// Dispatch board
    pub board: DispatchBoard,
    /// Agent roster
    pub roster: AgentRoster,
    /// Data-validity findings surfaced alongside the output
    pub diagnostics: Vec<Diagnostic>,
}
