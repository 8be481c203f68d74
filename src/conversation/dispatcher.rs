use super::{
    DisplayMessage, GREETING, RECOMMENDATION_PROMPT, Session, Widget, course_announcement,
    offers_recommendation, split_reply,
};
use crate::core::error::VerseError;
use crate::course::Course;
use crate::services::{CompletionService, RecommendationService};
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// A query that has been counted and recorded but not yet answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub query: String,
    pub course: Course,
    /// Turn number assigned at submission.
    pub turn: u64,
}

/// Owns the session and turns user actions into transcript entries.
///
/// Remote failures never reach the transcript: they are logged and the
/// action produces no messages.
pub struct ConversationDispatcher {
    session: Session,
    completion: Arc<dyn CompletionService>,
    recommendation: Arc<dyn RecommendationService>,
}

impl ConversationDispatcher {
    pub fn new(
        session: Session,
        completion: Arc<dyn CompletionService>,
        recommendation: Arc<dyn RecommendationService>,
    ) -> Self {
        Self {
            session,
            completion,
            recommendation,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Shows the opening message with the course list. Not part of the history.
    pub fn greet(&mut self) -> DisplayMessage {
        let message = DisplayMessage::with_widget(GREETING, Widget::CourseOptions);
        self.session.emit(message.clone(), false);
        message
    }

    pub async fn submit_query(&mut self, query: &str) -> Vec<DisplayMessage> {
        let pending = self.begin_query(query);
        let result = self
            .completion
            .complete(pending.course, &pending.query)
            .await;
        self.complete_query(&pending, result)
    }

    /// Records the query and counts the turn before any reply exists.
    pub fn begin_query(&mut self, query: &str) -> PendingQuery {
        self.session.history.push(query.to_string());
        self.session.turn_count += 1;

        PendingQuery {
            query: query.to_string(),
            course: self.session.selected_course,
            turn: self.session.turn_count,
        }
    }

    /// Applies the completion outcome of `pending` and returns what was shown.
    #[instrument(skip(self, result), fields(turn = pending.turn))]
    pub fn complete_query(
        &mut self,
        pending: &PendingQuery,
        result: Result<String, VerseError>,
    ) -> Vec<DisplayMessage> {
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, "Error handling query");
                return Vec::new();
            }
        };

        let reply = split_reply(&raw);
        let mut emitted = vec![DisplayMessage::new(reply.answer)];
        if let Some(segue) = reply.segue {
            emitted.push(DisplayMessage::new(segue));
        }
        for message in &emitted {
            self.session.emit(message.clone(), true);
        }

        if offers_recommendation(pending.turn) {
            debug!("offering recommendation");
            let prompt = DisplayMessage::with_widget(RECOMMENDATION_PROMPT, Widget::Recommendation);
            self.session.emit(prompt.clone(), false);
            emitted.push(prompt);
        }

        emitted
    }

    pub fn select_course(&mut self, course: Course) -> DisplayMessage {
        let message = DisplayMessage::new(course_announcement(course));
        self.session.emit(message.clone(), true);
        self.session.selected_course = course;
        message
    }

    pub async fn request_recommendation(&mut self) -> Option<DisplayMessage> {
        let course = self.session.selected_course;
        match self
            .recommendation
            .recommend(course, &self.session.history)
            .await
        {
            Ok(text) => {
                let message = DisplayMessage::new(text);
                self.session.emit(message.clone(), true);
                Some(message)
            }
            Err(e) => {
                error!(error = %e, %course, "Error handling recommendation retrieval");
                None
            }
        }
    }
}
