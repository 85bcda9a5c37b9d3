use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::constants;

use super::{Response, ResponseMeta};

/// A persisted response row as exchanged over HTTP (snake_case fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseRecord {
    #[serde(default)]
    #[ts(type = "number | null")]
    pub id: Option<i64>,
    #[serde(default)]
    #[ts(type = "number | null")]
    pub attempt_id: Option<i64>,
    #[ts(type = "number")]
    pub question_id: i64,
    #[serde(default)]
    pub user_answer: String,
    /// 0–100.
    pub confidence_level: f64,
    pub is_correct: bool,
    /// Seconds. Stored rows may carry `null`.
    #[serde(default)]
    pub time_spent: Option<u32>,
    #[serde(default)]
    pub question_text: Option<String>,
    #[serde(default = "default_category")]
    pub category: Option<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty: Option<String>,
    /// RFC 3339, or a naive timestamp read as UTC.
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_category() -> Option<String> {
    Some(constants::DEFAULT_CATEGORY.to_string())
}

fn default_difficulty() -> Option<String> {
    Some(constants::DEFAULT_DIFFICULTY.to_string())
}

fn deserialize_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Ok(aware) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(aware.with_timezone(&Utc)));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| Some(naive.and_utc()))
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
}

impl From<ResponseRecord> for Response {
    fn from(record: ResponseRecord) -> Self {
        Response {
            confidence: record.confidence_level,
            is_correct: record.is_correct,
            meta: ResponseMeta {
                question_id: Some(record.question_id),
                question_text: record.question_text,
                category: record.category,
                difficulty: record.difficulty,
                time_spent: record.time_spent.unwrap_or(0),
            },
        }
    }
}
