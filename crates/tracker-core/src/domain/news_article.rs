use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// News article entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: i64,
    pub startup_id: i64,
    pub title: String,
    pub url: String,
    pub published_date: NaiveDateTime,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
