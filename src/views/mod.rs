pub mod alert_detail;
pub mod alert_list;

pub use alert_detail::{AlertDetailView, SendOutcome};
pub use alert_list::{AlertListView, ALERTS_PER_PAGE};
