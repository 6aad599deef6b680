//! Feed records (DTOs)
//!
//! Raw, string-typed shapes as the external feed supplies them, one per
//! entity kind. Field names mirror the feed's camelCase JSON. Parsing
//! and validation happen in the snapshot conversion, not here.

use serde::{Deserialize, Serialize};

/// Raw visit record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRecord {
    /// Visit identifier
    pub id: String,
    /// Lead identifier
    pub lead_id: String,
    /// "HV" or "HTD"
    #[serde(rename = "type")]
    pub kind: String,
    /// "YYYY-MM-DD"
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    /// "HH:MM"
    pub time: String,
    /// Customer name
    pub customer: String,
    /// Vehicle description
    pub car: String,
    /// Assigned agent name, if any
    #[serde(default)]
    pub rm: Option<String>,
    /// "SCHEDULED" | "ONGOING" | "COMPLETED" | "CANCELLED"
    pub status: String,
    /// 1..=5, only once completed
    #[serde(default)]
    pub feedback_rating: Option<u8>,
    /// Free-text feedback, only once completed
    #[serde(default)]
    pub feedback_text: Option<String>,
}

/// Raw home-test-drive dispatch record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchRecord {
    /// Lead identifier (doubles as the task key in the feed)
    pub lead_id: String,
    /// Customer name
    pub customer_name: String,
    /// Agent name
    pub rm_name: String,
    /// Slot "HH:MM"
    pub slot: String,
    /// "upcoming" | "ongoing" | "completed" | "cancelled"
    pub stage: String,
    /// "yes" | "no" | "late" | "na"
    #[serde(default)]
    pub call: Option<String>,
    /// Agent live status label, e.g. "At Hub", "Checked-out"
    #[serde(default)]
    pub rm_status: Option<String>,
    /// Dispatcher's travel estimate (upcoming stage)
    #[serde(default)]
    pub travel_mins: Option<u32>,
    /// In-flight travel estimate (ongoing stage)
    #[serde(default)]
    pub est_travel_mins: Option<u32>,
    /// "HH:MM" checkout, once dispatched
    #[serde(default)]
    pub checkout_time: Option<String>,
    /// "HH:MM" check-in, once on site
    #[serde(default)]
    pub checkin_time: Option<String>,
    /// Minutes to reach the customer
    #[serde(default)]
    pub reach_customer_mins: Option<u32>,
    /// Minutes for the return leg
    #[serde(default)]
    pub return_to_hub_mins: Option<u32>,
    /// Minutes spent with the customer
    #[serde(default)]
    pub visit_duration_mins: Option<u32>,
    /// Estimated end-to-end minutes
    #[serde(default)]
    pub est_total_mins: Option<u32>,
    /// Actual end-to-end minutes, required once completed
    #[serde(default)]
    pub actual_mins: Option<u32>,
    /// "yes" | "no", required once completed
    #[serde(default)]
    pub token: Option<String>,
    /// 1..=5
    #[serde(default)]
    pub feedback_rating: Option<u8>,
    /// Whether a follow-up was made
    #[serde(default)]
    pub did_follow_up: Option<bool>,
    /// Cancellation reason
    #[serde(default)]
    pub cancel_reason: Option<String>,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Raw schedule slot record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    /// "HH:MM"
    pub at: String,
    /// "HV" | "HTD" | "IDLE"
    #[serde(rename = "type")]
    pub activity: String,
    /// "done" | "ongoing" | "upcoming"
    pub state: String,
    /// Lead the slot serves
    pub lead_id: String,
    /// Duration in minutes, once known
    #[serde(default)]
    pub duration_min: Option<u32>,
    /// "yes" | "no"
    #[serde(default)]
    pub token: Option<String>,
    /// 1..=5
    #[serde(default)]
    pub feedback_rating: Option<u8>,
}

/// Raw field-agent record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    /// Agent identifier
    pub id: String,
    /// Agent name
    pub name: String,
    /// "HV" | "HTD" | "IDLE"
    pub now: String,
    /// Customer currently served
    #[serde(default)]
    pub customer: Option<String>,
    /// Lead currently served
    #[serde(default)]
    pub current_lead_id: Option<String>,
    /// ISO timestamp the current activity started
    pub started_at: String,
    /// ISO timestamp of the first customer contact of the day
    pub frc: String,
    /// Location label
    pub location: String,
    /// Same-day counters
    pub visits_today: u32,
    pub tokens_today: u32,
    pub deliveries_today: u32,
    pub feedback_filled_today: u32,
    /// Month-to-date counters
    #[serde(rename = "visitsMTD")]
    pub visits_mtd: u32,
    #[serde(rename = "tokensMTD")]
    pub tokens_mtd: u32,
    #[serde(rename = "deliveriesMTD")]
    pub deliveries_mtd: u32,
    #[serde(rename = "feedbackFilledMTD")]
    pub feedback_filled_mtd: u32,
    /// Ordered day schedule
    #[serde(default)]
    pub schedule: Vec<ScheduleRecord>,
}

/// One full feed delivery for a business day
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot {
    /// Dashboard day, "YYYY-MM-DD"
    #[serde(rename = "asOfDate")]
    pub as_of_date: String,
    /// Evaluation instant, "HH:MM"
    pub now: String,
    /// Visit records
    pub visits: Vec<VisitRecord>,
    /// Dispatch records
    pub tasks: Vec<DispatchRecord>,
    /// Agent records
    pub agents: Vec<AgentRecord>,
}
