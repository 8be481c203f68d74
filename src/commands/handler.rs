use super::ChatState;
use super::registry::CommandRegistry;
use crate::core::error::VerseError;
use crate::course::Course;
use crate::display;

use async_trait::async_trait;
use console::style;

#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(
        &self,
        state: &mut ChatState,
        args: &[&str],
    ) -> Result<Option<String>, VerseError>;
    fn help(&self) -> &'static str;
}

pub struct QuitCommand;
pub struct CourseCommand;
pub struct CoursesCommand;
pub struct RecommendCommand;
pub struct HistoryCommand;
pub struct StatusCommand;

pub struct HelpCommand {
    lines: Vec<&'static str>,
}

impl HelpCommand {
    /// Snapshots the help of every command registered so far.
    pub fn new(registry: &CommandRegistry) -> Self {
        Self {
            lines: registry.help_lines(),
        }
    }
}

#[async_trait]
impl CommandHandler for QuitCommand {
    async fn execute(
        &self,
        state: &mut ChatState,
        _args: &[&str],
    ) -> Result<Option<String>, VerseError> {
        state.should_continue = false;
        Ok(None)
    }

    fn help(&self) -> &'static str {
        "/quit - End the chat session"
    }
}

#[async_trait]
impl CommandHandler for HelpCommand {
    async fn execute(
        &self,
        _state: &mut ChatState,
        _args: &[&str],
    ) -> Result<Option<String>, VerseError> {
        let title = style("Available Commands").bold().underlined();
        let mut help_text = vec![title.to_string()];
        help_text.extend(self.lines.iter().map(|line| line.to_string()));
        help_text.push(self.help().to_string());

        Ok(Some(help_text.join("\n")))
    }

    fn help(&self) -> &'static str {
        "/help - Show available commands"
    }
}

#[async_trait]
impl CommandHandler for CourseCommand {
    async fn execute(
        &self,
        state: &mut ChatState,
        args: &[&str],
    ) -> Result<Option<String>, VerseError> {
        if args.is_empty() {
            return Ok(Some(format!(
                "Current course: {}",
                state.conversation.session().selected_course
            )));
        }

        let course = Course::parse_selectable(&args.join(" "))?;
        let message = state.conversation.select_course(course);
        display::display_message(&message);
        Ok(None)
    }

    fn help(&self) -> &'static str {
        "/course <number|name> - Show or change the course under discussion"
    }
}

#[async_trait]
impl CommandHandler for CoursesCommand {
    async fn execute(
        &self,
        _state: &mut ChatState,
        _args: &[&str],
    ) -> Result<Option<String>, VerseError> {
        display::display_course_options();
        Ok(None)
    }

    fn help(&self) -> &'static str {
        "/courses - List the courses you can pick"
    }
}

#[async_trait]
impl CommandHandler for RecommendCommand {
    async fn execute(
        &self,
        state: &mut ChatState,
        _args: &[&str],
    ) -> Result<Option<String>, VerseError> {
        if let Some(message) = state.conversation.request_recommendation().await {
            display::display_message(&message);
        }
        Ok(None)
    }

    fn help(&self) -> &'static str {
        "/recommend - Get a recommendation based on the conversation"
    }
}

#[async_trait]
impl CommandHandler for HistoryCommand {
    async fn execute(
        &self,
        state: &mut ChatState,
        _args: &[&str],
    ) -> Result<Option<String>, VerseError> {
        let history = &state.conversation.session().history;
        if history.is_empty() {
            return Ok(Some("No messages yet.".to_string()));
        }

        let lines: Vec<String> = history
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{:>3}. {}", i + 1, entry))
            .collect();
        Ok(Some(lines.join("\n")))
    }

    fn help(&self) -> &'static str {
        "/history - Show the messages exchanged so far"
    }
}

#[async_trait]
impl CommandHandler for StatusCommand {
    async fn execute(
        &self,
        state: &mut ChatState,
        _args: &[&str],
    ) -> Result<Option<String>, VerseError> {
        let session = state.conversation.session();
        Ok(Some(format!(
            "Course: {}\nTurns: {}\nMessages: {}",
            session.selected_course,
            session.turn_count,
            session.history.len()
        )))
    }

    fn help(&self) -> &'static str {
        "/status - Show the current course and turn count"
    }
}
