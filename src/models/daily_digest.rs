use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DailyDigest {
    pub id: Uuid,
    pub pet_id: i32,
    pub date: NaiveDate,
    pub summary: String,
    pub moods: Option<serde_json::Value>,
    pub activities: Option<serde_json::Value>,
    pub unusual_events: Option<serde_json::Value>,
    pub total_videos: i32,
    pub created_at: NaiveDateTime,
}
