// Domain Layer - FAQ entities

pub mod answer;
pub mod question;

pub use answer::{Answer, AnswerId};
pub use question::{Question, QuestionId};

/// Creation timestamp, milliseconds since epoch.
/// Assigned by the store at insert time, non-decreasing with insertion order.
pub type Timestamp = i64;
