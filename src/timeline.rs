//! Audit feed for a single alert: automated intervention, user
//! acknowledgement, resolution and logged outreach merged into one
//! chronologically descending list. Pure projection, recomputed on demand.

use std::collections::{HashMap, HashSet};
use std::fmt;

use chrono::{Duration, NaiveDateTime};
use uuid::Uuid;

use crate::models::{ActionStatus, Alert, QuickAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimelineCategory {
    Intervention,
    Acknowledgement,
    Resolution,
    Outreach,
}

impl TimelineCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineCategory::Intervention => "intervention",
            TimelineCategory::Acknowledgement => "acknowledgement",
            TimelineCategory::Resolution => "resolution",
            TimelineCategory::Outreach => "outreach",
        }
    }
}

impl fmt::Display for TimelineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub id: String,
    pub category: TimelineCategory,
    pub display_text: String,
    pub timestamp: NaiveDateTime,
}

/// Merge the alert's lifecycle events with its non-pending quick actions.
///
/// Outreach is deduplicated per action type with the dispatch window: of
/// any cluster of same-type actions closer together than `window`, only
/// the earliest survives. Entries are sorted by timestamp descending;
/// ties keep source order (intervention, acknowledgement, resolution,
/// then actions in input order).
pub fn compose(alert: &Alert, actions: &[QuickAction], window: Duration) -> Vec<TimelineEntry> {
    let mut entries = Vec::new();

    if let Some(intervention) = &alert.intervention_action {
        entries.push(TimelineEntry {
            id: format!("intervention-{}", alert.id),
            category: TimelineCategory::Intervention,
            display_text: intervention.clone(),
            timestamp: alert.created_at,
        });
    }

    if let Some(response) = &alert.user_response {
        entries.push(TimelineEntry {
            id: format!("acknowledgement-{}", alert.id),
            category: TimelineCategory::Acknowledgement,
            display_text: response.clone(),
            timestamp: alert.user_acknowledged_at.unwrap_or(alert.created_at),
        });
    }

    if let Some(resolved_at) = alert.resolved_at {
        entries.push(TimelineEntry {
            id: format!("resolution-{}", alert.id),
            category: TimelineCategory::Resolution,
            display_text: alert.outcome.clone().unwrap_or_else(|| "Resolved".to_string()),
            timestamp: resolved_at,
        });
    }

    for action in debounced_outreach(actions, window) {
        entries.push(TimelineEntry {
            id: action.id.to_string(),
            category: TimelineCategory::Outreach,
            display_text: action.display_message(),
            timestamp: action.effective_timestamp(),
        });
    }

    // Stable sort keeps source order for equal timestamps.
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries
}

/// Non-pending actions, keeping only the earliest of each same-type
/// cluster within the window. Result preserves input order.
fn debounced_outreach<'a>(actions: &'a [QuickAction], window: Duration) -> Vec<&'a QuickAction> {
    let mut by_type: HashMap<String, Vec<&QuickAction>> = HashMap::new();
    for action in actions.iter().filter(|a| a.status != ActionStatus::Pending) {
        by_type
            .entry(action.action_type.to_ascii_lowercase())
            .or_default()
            .push(action);
    }

    let mut keep: HashSet<Uuid> = HashSet::new();
    for group in by_type.values_mut() {
        group.sort_by_key(|a| a.effective_timestamp());
        let mut last_kept: Option<NaiveDateTime> = None;
        for action in group.iter() {
            let ts = action.effective_timestamp();
            let clustered = last_kept
                .is_some_and(|prev| ts.signed_duration_since(prev) < window);
            if !clustered {
                keep.insert(action.id);
                last_kept = Some(ts);
            }
        }
    }

    actions.iter().filter(|a| keep.contains(&a.id)).collect()
}
