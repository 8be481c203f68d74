pub mod dispatcher;
pub mod message;

pub use dispatcher::ConversationDispatcher;
pub use message::{DisplayMessage, Widget, split_reply};

use crate::course::Course;
use tracing::trace;

pub const GREETING: &str =
    "Hello! Welcome to your Yale English Literature course. What would you like to discuss today?";
pub const RECOMMENDATION_PROMPT: &str =
    "Access a real-time recommendation based on our conversation";

pub fn course_announcement(course: Course) -> String {
    format!("Let's focus on {}. What questions do you have?", course)
}

/// Recommendation prompts follow every second turn.
pub fn offers_recommendation(turn: u64) -> bool {
    turn != 0 && turn % 2 == 0
}

/// Per-session conversation state. Lives as long as the chat does.
#[derive(Debug, Default, Clone)]
pub struct Session {
    pub selected_course: Course,
    /// Every user and bot utterance sent to the recommendation service.
    pub history: Vec<String>,
    pub turn_count: u64,
    /// Everything shown to the user, in display order.
    pub transcript: Vec<DisplayMessage>,
}

impl Session {
    pub fn new(course: Course) -> Self {
        Self {
            selected_course: course,
            ..Self::default()
        }
    }

    /// Appends to the transcript and, when `record` is set, to the history.
    fn emit(&mut self, message: DisplayMessage, record: bool) {
        trace!(widget = message.widget().tag().unwrap_or("none"), record, "emit");
        if record {
            self.history.push(message.text().to_string());
        }
        self.transcript.push(message);
    }
}
