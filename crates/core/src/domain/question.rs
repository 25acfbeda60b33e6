// Question Domain Model

use serde::{Deserialize, Serialize};

use super::{Answer, Timestamp};

/// Question ID (store-assigned rowid)
pub type QuestionId = i64;

/// A top-level question. Owns its answers: deleting a question deletes
/// every answer attached to it, atomically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub created_at: Timestamp,

    /// Child answers, oldest first. Empty in list summaries and omitted
    /// from the JSON encoding when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn new(id: QuestionId, text: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            id,
            text: text.into(),
            created_at,
            answers: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_omitted_from_json_when_empty() {
        let q = Question::new(1, "Why?", 1000);
        let json = serde_json::to_value(&q).unwrap();
        assert!(json.get("answers").is_none());
        assert_eq!(json["id"], 1);
        assert_eq!(json["text"], "Why?");
        assert_eq!(json["created_at"], 1000);
    }

    #[test]
    fn test_answers_present_in_json_when_populated() {
        let mut q = Question::new(1, "Why?", 1000);
        q.answers.push(Answer {
            id: 7,
            question_id: 1,
            user_id: "u1".to_string(),
            text: "Because.".to_string(),
            created_at: 2000,
        });

        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["answers"][0]["question_id"], 1);
    }
}
