use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PetVideo {
    pub id: Uuid,
    pub pet_id: i32,
    pub gcs_path: String,
    pub mood: Option<String>,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}
