use super::{
    ChatState,
    handler::{
        CourseCommand, CoursesCommand, HelpCommand, HistoryCommand, QuitCommand,
        RecommendCommand, StatusCommand,
    },
    registry::CommandRegistry,
};
use crate::core::error::VerseError;
use std::sync::Arc;

#[derive(Clone)]
pub struct CommandDispatcher {
    registry: Arc<CommandRegistry>,
}

impl CommandDispatcher {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    /// Runs a `/command arg...` line against the chat state.
    pub async fn execute_line(
        &self,
        line: &str,
        state: &mut ChatState,
    ) -> Result<Option<String>, VerseError> {
        let line = line.trim_start_matches('/');
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let args: Vec<&str> = rest.split_whitespace().collect();
        self.execute(command, &args, state).await
    }

    pub async fn execute(
        &self,
        command: &str,
        args: &[&str],
        state: &mut ChatState,
    ) -> Result<Option<String>, VerseError> {
        self.registry.execute(command, args, state).await
    }

    pub fn get_command_names(&self) -> Vec<String> {
        self.registry.get_command_names()
    }
}

pub fn create_command_registry() -> CommandDispatcher {
    let mut registry = CommandRegistry::new();

    registry.register("quit", QuitCommand);
    registry.register("course", CourseCommand);
    registry.register("courses", CoursesCommand);
    registry.register("recommend", RecommendCommand);
    registry.register("history", HistoryCommand);
    registry.register("status", StatusCommand);

    let help = HelpCommand::new(&registry);
    registry.register("help", help);

    CommandDispatcher::new(Arc::new(registry))
}
