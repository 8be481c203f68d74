use crate::cli::Args;
use crate::commands::{ChatState, dispatcher::CommandDispatcher};
use crate::conversation::{ConversationDispatcher, DisplayMessage};
use crate::core::error::VerseError;
use crate::course::Course;
use crate::display;
use crate::input;
use is_terminal::IsTerminal;
use std::io::{self, BufRead};
use tracing::{info, warn};

pub struct Application {
    pub args: Args,
    pub state: ChatState,
    pub command_dispatcher: CommandDispatcher,
    initial_course: Option<Course>,
}

impl Application {
    pub fn new(
        args: Args,
        conversation: ConversationDispatcher,
        command_dispatcher: CommandDispatcher,
    ) -> Result<Self, VerseError> {
        let initial_course = args
            .course
            .as_deref()
            .map(Course::parse_selectable)
            .transpose()?;

        Ok(Self {
            args,
            state: ChatState::new(conversation),
            command_dispatcher,
            initial_course,
        })
    }

    pub async fn run(&mut self) -> Result<(), VerseError> {
        if let Some(query) = self.args.query.clone() {
            self.handle_single_query(&query).await
        } else if !io::stdin().is_terminal() {
            self.handle_piped_queries().await
        } else {
            self.handle_chat_mode().await
        }
    }

    /// Announces the course picked on the command line, if any.
    fn apply_initial_course(&mut self) -> Option<DisplayMessage> {
        let course = self.initial_course.take()?;
        Some(self.state.conversation.select_course(course))
    }

    async fn handle_single_query(&mut self, query: &str) -> Result<(), VerseError> {
        self.apply_initial_course();
        let emitted = self.state.conversation.submit_query(query).await;
        if emitted.is_empty() {
            warn!("no answer received");
        }
        self.show(&emitted);
        Ok(())
    }

    /// Treats every non-empty stdin line as a query, or a command if it
    /// starts with '/'.
    async fn handle_piped_queries(&mut self) -> Result<(), VerseError> {
        let lines: Vec<String> = io::stdin().lock().lines().collect::<Result<_, _>>()?;
        info!(count = lines.len(), "reading queries from stdin");
        self.apply_initial_course();

        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('/') {
                self.run_command(line).await;
                if !self.state.should_continue {
                    break;
                }
                continue;
            }
            let emitted = self.state.conversation.submit_query(line).await;
            display::print_plain(&emitted);
        }

        Ok(())
    }

    async fn handle_chat_mode(&mut self) -> Result<(), VerseError> {
        let greeting = self.state.conversation.greet();
        display::display_message(&greeting);
        if let Some(announcement) = self.apply_initial_course() {
            display::display_message(&announcement);
        }
        println!("Type '/help' for available commands. Press Ctrl+D or type /quit to exit.");

        let mut editor = input::create_editor(self.command_dispatcher.clone())?;

        loop {
            let input = match input::read_input(&mut editor)? {
                Some(input) => input.trim().to_string(),
                None => break,
            };

            if input.is_empty() {
                continue;
            }

            if input.starts_with('/') {
                self.run_command(&input).await;
                if !self.state.should_continue {
                    break;
                }
                continue;
            }

            let emitted = self.state.conversation.submit_query(&input).await;
            display::display_messages(&emitted);
        }

        Ok(())
    }

    async fn run_command(&mut self, line: &str) {
        match self
            .command_dispatcher
            .execute_line(line, &mut self.state)
            .await
        {
            Ok(Some(output)) => println!("{}", output),
            Ok(None) => {}
            Err(e) => eprintln!("Error executing command: {}", e),
        }
    }

    fn show(&self, messages: &[DisplayMessage]) {
        if io::stdout().is_terminal() {
            display::display_messages(messages);
        } else {
            display::print_plain(messages);
        }
    }
}
