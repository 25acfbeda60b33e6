// Answer Domain Model

use serde::{Deserialize, Serialize};

use super::{QuestionId, Timestamp};

/// Answer ID (store-assigned rowid)
pub type AnswerId = i64;

/// A response to exactly one question. Has no independent lifecycle at
/// creation (the parent must exist) but is independently addressable and
/// deletable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerId,
    pub question_id: QuestionId,
    pub user_id: String,
    pub text: String,
    pub created_at: Timestamp,
}
