use crate::core::error::VerseError;
use crate::course::Course;
use async_trait::async_trait;

/// Answers a student's query for a course.
///
/// The returned text holds the answer on its first line and may carry a
/// follow-up segue further down; splitting is left to the caller.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, course: Course, query: &str) -> Result<String, VerseError>;
}

/// Produces a reading recommendation from the conversation so far.
#[async_trait]
pub trait RecommendationService: Send + Sync {
    async fn recommend(&self, course: Course, messages: &[String]) -> Result<String, VerseError>;
}

pub mod base_client;
pub mod professor;
