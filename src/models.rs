use serde::{Deserialize, Serialize};

/// One multiple-choice question as produced by the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

/// One question as sent back by the client when a quiz is finished.
/// `user_answer` and `is_correct` stay absent until the user has answered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnsweredQuestion {
    pub question: String,
    pub correct_answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_question_uses_camel_case_keys() {
        let parsed: GeneratedQuestion = serde_json::from_str(
            r#"{"question":"Q","correctAnswer":"A","incorrectAnswers":["B","C","D"]}"#,
        )
        .unwrap();

        assert_eq!(parsed.correct_answer, "A");
        assert_eq!(parsed.incorrect_answers.len(), 3);
    }

    #[test]
    fn answered_question_omits_unset_fields() {
        let question = AnsweredQuestion {
            question: "Q".to_string(),
            correct_answer: "A".to_string(),
            user_answer: None,
            is_correct: None,
        };

        let value = serde_json::to_value(&question).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("question"));
        assert!(object.contains_key("correctAnswer"));
    }
}
