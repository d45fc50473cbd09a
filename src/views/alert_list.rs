//! State of the paginated alerts page: page/filter navigation, grouping
//! by pet, and the quick-action history shown under each alert card.
//!
//! Page and filter changes bump a generation counter; a response fetched
//! under an older generation is dropped instead of overwriting the
//! current page.

use std::collections::HashMap;

use futures::future::join_all;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::api::alerts::AlertListResponse;
use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{Alert, QuickAction, Severity};

pub const ALERTS_PER_PAGE: u32 = 10;

#[derive(Debug, Clone)]
pub struct AlertListView {
    pub alerts: Vec<Alert>,
    pub actions_by_alert: HashMap<Uuid, Vec<QuickAction>>,
    page: u32,
    page_size: u32,
    total: u64,
    severity_filter: Option<Severity>,
    generation: u64,
}

impl AlertListView {
    pub fn new() -> Self {
        AlertListView {
            alerts: Vec::new(),
            actions_by_alert: HashMap::new(),
            page: 1,
            page_size: ALERTS_PER_PAGE,
            total: 0,
            severity_filter: None,
            generation: 0,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        let pages = self.total.div_ceil(self.page_size as u64);
        (pages.max(1)) as u32
    }

    pub fn severity_filter(&self) -> Option<Severity> {
        self.severity_filter
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_page(&mut self, page: u32) {
        let page = page.max(1);
        if page != self.page {
            self.page = page;
            self.generation += 1;
        }
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1).min(self.total_pages()));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Changing the filter restarts from page 1.
    pub fn set_severity_filter(&mut self, filter: Option<Severity>) {
        if filter != self.severity_filter {
            self.severity_filter = filter;
            self.page = 1;
            self.generation += 1;
        }
    }

    pub async fn load(&mut self, api: &ApiClient) -> Result<()> {
        let generation = self.generation;
        let response = api
            .list_user_alerts(self.page, self.page_size, self.severity_filter)
            .await?;
        self.apply_page(generation, response);
        Ok(())
    }

    /// Apply a fetched page unless the user has already navigated away.
    pub fn apply_page(&mut self, generation: u64, response: AlertListResponse) {
        if generation != self.generation {
            debug!("dropping stale alert page (generation {})", generation);
            return;
        }
        self.alerts = response.alerts;
        self.total = response.total;
    }

    /// Fetch the quick actions of every visible alert concurrently; a
    /// single failed fetch is logged and skipped, the rest still land.
    pub async fn load_quick_actions(&mut self, api: &ApiClient) -> Result<()> {
        let generation = self.generation;
        let ids: Vec<Uuid> = self.alerts.iter().map(|a| a.id).collect();
        let fetches = ids
            .into_iter()
            .map(|id| async move { (id, api.list_alert_quick_actions(id).await) });
        let results = join_all(fetches).await;

        if generation != self.generation {
            debug!("dropping stale quick-action batch (generation {})", generation);
            return Ok(());
        }
        for (id, result) in results {
            match result {
                Ok(actions) => {
                    self.actions_by_alert.insert(id, actions);
                }
                Err(e) => warn!("failed to load actions for alert {}: {}", id, e),
            }
        }
        Ok(())
    }

    pub fn actions_for(&self, alert_id: Uuid) -> &[QuickAction] {
        self.actions_by_alert
            .get(&alert_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Alerts grouped by pet display name, groups in first-seen order.
    pub fn grouped_by_pet(&self) -> Vec<(String, Vec<&Alert>)> {
        let mut groups: Vec<(String, Vec<&Alert>)> = Vec::new();
        for alert in &self.alerts {
            let name = alert.pet_display_name();
            match groups.iter_mut().find(|(existing, _)| *existing == name) {
                Some((_, list)) => list.push(alert),
                None => groups.push((name, vec![alert])),
            }
        }
        groups
    }
}

impl Default for AlertListView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn alert(pet_id: i32, pet_name: Option<&str>) -> Alert {
        Alert {
            id: Uuid::new_v4(),
            pet_id,
            pet_name: pet_name.map(str::to_string),
            alert_type: "limping".to_string(),
            severity_level: Severity::High,
            message: None,
            critical_indicators: None,
            recommended_actions: None,
            created_at: NaiveDate::from_ymd_opt(2026, 2, 3)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            outcome: None,
            user_response: None,
            user_acknowledged_at: None,
            user_notified_at: None,
            resolved_at: None,
            notification_sent: false,
            notification_channels: None,
            intervention_action: None,
            video_id: None,
        }
    }

    fn page(alerts: Vec<Alert>, total: u64) -> AlertListResponse {
        AlertListResponse {
            alerts,
            total,
            page: 1,
            page_size: ALERTS_PER_PAGE,
        }
    }

    #[test]
    fn stale_page_is_dropped_after_navigation() {
        let mut view = AlertListView::new();
        let generation = view.generation();

        view.set_page(2); // user navigates before the fetch lands
        view.apply_page(generation, page(vec![alert(1, Some("Rex"))], 1));
        assert!(view.alerts.is_empty());

        view.apply_page(view.generation(), page(vec![alert(1, Some("Rex"))], 11));
        assert_eq!(view.alerts.len(), 1);
    }

    #[test]
    fn filter_change_resets_to_first_page() {
        let mut view = AlertListView::new();
        view.apply_page(view.generation(), page(Vec::new(), 35));
        view.set_page(3);

        view.set_severity_filter(Some(Severity::Critical));
        assert_eq!(view.page(), 1);

        // same filter again is a no-op
        let generation = view.generation();
        view.set_severity_filter(Some(Severity::Critical));
        assert_eq!(view.generation(), generation);
    }

    #[test]
    fn total_pages_rounds_up_and_never_hits_zero() {
        let mut view = AlertListView::new();
        assert_eq!(view.total_pages(), 1);

        view.apply_page(view.generation(), page(Vec::new(), 35));
        assert_eq!(view.total_pages(), 4);
    }

    #[test]
    fn pagination_clamps_to_bounds() {
        let mut view = AlertListView::new();
        view.apply_page(view.generation(), page(Vec::new(), 25));

        view.prev_page();
        assert_eq!(view.page(), 1);

        view.next_page();
        view.next_page();
        view.next_page();
        view.next_page();
        assert_eq!(view.page(), 3);
    }

    #[test]
    fn groups_preserve_first_seen_order() {
        let mut view = AlertListView::new();
        view.apply_page(
            view.generation(),
            page(
                vec![
                    alert(1, Some("Rex")),
                    alert(2, Some("Maple")),
                    alert(1, Some("Rex")),
                    alert(3, None),
                ],
                4,
            ),
        );

        let groups = view.grouped_by_pet();
        let names: Vec<&str> = groups.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Rex", "Maple", "Pet #3"]);
        assert_eq!(groups[0].1.len(), 2);
    }
}
