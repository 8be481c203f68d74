use crate::commands::dispatcher::CommandDispatcher;
use crate::core::error::VerseError;
use crate::course::Course;

use console::style;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::history::MemHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, EditMode, Editor, Helper};

/// Completes slash commands, and course names after `/course `.
pub struct VerseCompleter {
    command_registry: CommandDispatcher,
}

impl VerseCompleter {
    pub fn new(command_registry: CommandDispatcher) -> Self {
        Self { command_registry }
    }

    fn candidates(&self, line: &str) -> Option<(usize, Vec<Pair>)> {
        let command_part = line.strip_prefix('/')?;

        if let Some(course_part) = command_part.strip_prefix("course ") {
            let start = line.len() - course_part.len();
            let matches: Vec<Pair> = Course::SELECTABLE
                .iter()
                .map(|course| course.name())
                .filter(|name| {
                    name.to_lowercase()
                        .starts_with(&course_part.to_lowercase())
                })
                .map(|name| Pair {
                    display: name.to_string(),
                    replacement: name.to_string(),
                })
                .collect();
            return Some((start, matches));
        }

        let matches: Vec<Pair> = self
            .command_registry
            .get_command_names()
            .into_iter()
            .filter(|cmd| cmd.starts_with(command_part))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd,
            })
            .collect();
        Some((1, matches))
    }
}

impl Completer for VerseCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self
            .candidates(&line[..pos])
            .unwrap_or_else(|| (pos, Vec::new())))
    }
}

/// Helper struct that combines the rustyline components
pub struct VerseHelper {
    completer: VerseCompleter,
    hinter: HistoryHinter,
}

impl VerseHelper {
    pub fn new(command_registry: CommandDispatcher) -> Self {
        Self {
            completer: VerseCompleter::new(command_registry),
            hinter: HistoryHinter {},
        }
    }
}

impl Helper for VerseHelper {}

impl Completer for VerseHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Hinter for VerseHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for VerseHelper {}

impl Validator for VerseHelper {}

pub type VerseEditor = Editor<VerseHelper, MemHistory>;

/// Creates a line editor whose history lives only as long as the session.
pub fn create_editor(command_registry: CommandDispatcher) -> Result<VerseEditor, VerseError> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut editor = Editor::with_history(config, MemHistory::new())?;
    editor.set_helper(Some(VerseHelper::new(command_registry)));

    Ok(editor)
}

/// Reads a line of input; `None` means the user asked to leave.
pub fn read_input(editor: &mut VerseEditor) -> Result<Option<String>, VerseError> {
    let prompt = if cfg!(windows) && std::env::var("PSModulePath").is_ok() {
        "> ".to_string()
    } else {
        style("> ").bold().cyan().to_string()
    };
    match editor.readline(&prompt) {
        Ok(line) => {
            if !line.trim().is_empty() {
                editor.add_history_entry(line.as_str())?;
            }
            Ok(Some(line))
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
            println!("Goodbye!");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
