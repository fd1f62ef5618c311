use color_eyre::eyre::{bail, OptionExt};
use color_eyre::Result;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use mongodb::Collection;

use super::models::QuizResult;
use super::Store;
use crate::models::AnsweredQuestion;

// The original deployment's ODM pluralized the model name; kept so both
// services read and write the same collection.
const COLLECTION: &str = "quizresults";

impl Store {
    fn results(&self) -> Collection<QuizResult> {
        self.db.collection(COLLECTION)
    }

    /// Insert one quiz attempt with a server-assigned timestamp and return
    /// the new document id. `name` is the document's one required field; an
    /// absent or empty name is rejected here, like any other write failure
    /// (see DESIGN.md for the 500-vs-400 decision).
    pub async fn save_result(
        &self,
        name: Option<String>,
        questions: Vec<AnsweredQuestion>,
    ) -> Result<ObjectId> {
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            bail!("quiz result is missing the required name field");
        };

        let result = QuizResult {
            id: None,
            name,
            questions,
            created_at: DateTime::now(),
        };

        let inserted = self.results().insert_one(&result).await?;
        let id = inserted
            .inserted_id
            .as_object_id()
            .ok_or_eyre("inserted id was not an ObjectId")?;

        tracing::info!("quiz result saved with id: {id}");
        Ok(id)
    }
}
