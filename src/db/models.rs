// Persisted document shapes

use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::models::AnsweredQuestion;

/// One stored quiz attempt. `id` is assigned by the store on insert and is
/// immutable afterwards; documents are never updated or deleted.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizResult {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub questions: Vec<AnsweredQuestion>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime,
}
