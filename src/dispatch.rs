//! Duplicate-outreach suppression. A send is suppressed when an equivalent
//! action (same type, same alert) already went out within a trailing time
//! window; the state lives entirely in the action list itself.

use chrono::{Duration, NaiveDateTime};
use tracing::info;
use uuid::Uuid;

use crate::models::{ActionStatus, QuickAction};

/// Trailing window inside which a repeated action of the same type is
/// considered a duplicate.
pub const DEFAULT_WINDOW_SECS: i64 = 300;

pub fn default_window() -> Duration {
    Duration::seconds(DEFAULT_WINDOW_SECS)
}

/// Whether logging a new action of `candidate_type` should be suppressed.
///
/// Only non-pending actions count (a pending row is an unsent suggestion,
/// not prior outreach), and types compare case-insensitively.
pub fn should_suppress(
    existing: &[QuickAction],
    candidate_type: &str,
    now: NaiveDateTime,
    window: Duration,
) -> bool {
    existing
        .iter()
        .filter(|action| action.status != ActionStatus::Pending)
        .filter(|action| action.matches_type(candidate_type))
        .any(|action| {
            let age = now.signed_duration_since(action.effective_timestamp());
            age >= Duration::zero() && age < window
        })
}

/// Optimistically flip a pending suggestion to sent without a network
/// round trip, so the UI stops offering it. Returns false when the action
/// is absent or no longer pending.
pub fn mark_suggestion_sent(
    actions: &mut [QuickAction],
    action_id: Uuid,
    now: NaiveDateTime,
) -> bool {
    for action in actions.iter_mut() {
        if action.id == action_id && action.status == ActionStatus::Pending {
            action.status = ActionStatus::Sent;
            action.sent_at = Some(now);
            info!("marked suggestion {} as sent locally", action_id);
            return true;
        }
    }
    false
}
