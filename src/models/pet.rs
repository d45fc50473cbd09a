use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Pet {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub age: i32,
    pub species: String,
    pub breed: String,
    pub bio: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
