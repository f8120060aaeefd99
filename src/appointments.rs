//! Appointment records as served by the backend, the fetch lifecycle the
//! list pages go through, and the customer/provider presentation rules.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

/// Page-level fallback when a fetch failure carries no usable message.
pub const FETCH_ERROR_FALLBACK: &str = "Failed to load appointments";
/// Shown for a successful fetch that returned nothing.
pub const EMPTY_LIST_MESSAGE: &str = "No appointments yet";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Upcoming,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Verbatim capitalized display labels.
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "Upcoming",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

/// External shape, consumed not owned. `counterpart` is the provider's
/// name when a customer is looking and vice versa; the backend labels the
/// field accordingly.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AppointmentRecord {
    pub id: i64,
    #[serde(rename = "appointment_date")]
    pub date: NaiveDate,
    #[serde(rename = "appointment_time")]
    pub time: NaiveTime,
    #[serde(alias = "provider_name", alias = "customer_name")]
    pub counterpart: String,
    pub business_name: String,
    pub status: AppointmentStatus,
}

impl AppointmentRecord {
    /// Temporal bucket by local calendar date. The status field is kept
    /// verbatim for display and never reclassifies this.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date >= today
    }
}

/// Lifecycle of a list page: `Loading` until the collaborator call
/// settles, then either the records or a renderable message.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(Vec<T>),
    Error(String),
}

impl<T> FetchState<T> {
    #[allow(dead_code)]
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Customer view: upcoming appointments first, soonest first, then the
/// records already in the past in the order the backend sent them. Sorting
/// is stable so same-date records keep their original order.
pub fn present_customer(records: Vec<AppointmentRecord>, today: NaiveDate) -> Vec<AppointmentRecord> {
    let (mut upcoming, past): (Vec<_>, Vec<_>) =
        records.into_iter().partition(|r| r.is_upcoming(today));
    upcoming.sort_by_key(|r| r.date);
    upcoming.extend(past);
    upcoming
}

/// Provider history: future appointments are dropped entirely, the rest
/// run most-recent-first. Ties keep the provided order.
pub fn present_provider_history(
    records: Vec<AppointmentRecord>,
    today: NaiveDate,
) -> Vec<AppointmentRecord> {
    let mut history: Vec<_> = records.into_iter().filter(|r| r.date <= today).collect();
    history.sort_by_key(|r| std::cmp::Reverse(r.date));
    history
}
