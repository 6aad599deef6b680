//! Value Objects
//!
//! Immutable, validated domain primitives.

pub mod clock;

pub use clock::{BusinessDate, ClockTime, MinuteOfDay};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::{HubError, HubResult};

/// Lead identifier, e.g. "LD-10109" (Value Object)
///
/// # Invariants
/// - Must be non-empty
/// - Orders naturally: digit runs compare numerically, so `LD-99 < LD-100`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(String);

impl LeadId {
    /// Create a new lead ID with validation
    pub fn new(id: impl Into<String>) -> HubResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(HubError::InvalidValue("lead id cannot be empty".into()));
        }
        Ok(Self(id))
    }

    /// Get inner value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for LeadId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Ord for LeadId {
    fn cmp(&self, other: &Self) -> Ordering {
        natural_cmp(&self.0, &other.0)
    }
}

impl PartialOrd for LeadId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dispatch task identifier (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Create a new task ID
    pub fn new(id: impl Into<String>) -> HubResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(HubError::InvalidValue("task id cannot be empty".into()));
        }
        Ok(Self(id))
    }

    /// Get inner value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visit identifier (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitId(String);

impl VisitId {
    /// Create a new visit ID
    pub fn new(id: impl Into<String>) -> HubResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(HubError::InvalidValue("visit id cannot be empty".into()));
        }
        Ok(Self(id))
    }

    /// Get inner value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field agent identifier (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    /// Create a new agent ID
    pub fn new(id: impl Into<String>) -> HubResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(HubError::InvalidValue("agent id cannot be empty".into()));
        }
        Ok(Self(id))
    }

    /// Get inner value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Customer feedback rating, 1..=5 (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Create a validated rating
    pub fn new(value: u8) -> HubResult<Self> {
        if !(1..=5).contains(&value) {
            return Err(HubError::InvalidValue(format!(
                "rating out of range: {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Get inner value
    pub const fn value(self) -> u8 {
        self.0
    }
}

fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();
    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let (na, ra) = take_number(&mut ca);
                let (nb, rb) = take_number(&mut cb);
                // Compare values first, then the raw runs so that
                // "007" and "7" stay distinct (keeps Ord consistent with Eq).
                match na.cmp(&nb).then_with(|| ra.cmp(&rb)) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
            (Some(x), Some(y)) => {
                match x.cmp(&y) {
                    Ordering::Equal => {}
                    other => return other,
                }
                ca.next();
                cb.next();
            }
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> (u64, String) {
    let mut n: u64 = 0;
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if let Some(d) = c.to_digit(10) {
            n = n.saturating_mul(10).saturating_add(d as u64);
            run.push(c);
            chars.next();
        } else {
            break;
        }
    }
    (n, run)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ids_rejected() {
        assert!(LeadId::new("").is_err());
        assert!(AgentId::new("  ").is_err());
        assert!(VisitId::new("").is_err());
        assert!(TaskId::new("T-1").is_ok());
    }

    #[test]
    fn test_lead_id_natural_ordering() {
        let a = LeadId::new("LD-99").unwrap();
        let b = LeadId::new("LD-100").unwrap();
        assert!(a < b);

        let c = LeadId::new("LD-10102").unwrap();
        let d = LeadId::new("LD-10109").unwrap();
        assert!(c < d);
    }

    #[test]
    fn test_lead_id_prefix_compares_lexicographically() {
        let a = LeadId::new("AX-5").unwrap();
        let b = LeadId::new("LD-5").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_equal_numbers_with_different_digits_tiebreak() {
        // "LD-007" and "LD-7" carry the same number; length then decides
        let a = LeadId::new("LD-007").unwrap();
        let b = LeadId::new("LD-7").unwrap();
        assert_eq!(a.cmp(&b), Ordering::Less);
    }

    #[test]
    fn test_rating_range() {
        assert!(Rating::new(0).is_err());
        assert_eq!(Rating::new(5).unwrap().value(), 5);
        assert!(Rating::new(6).is_err());
    }
}
