pub mod dispatcher;
pub mod handler;
pub mod registry;

use crate::conversation::ConversationDispatcher;
pub use dispatcher::create_command_registry;

pub struct ChatState {
    pub conversation: ConversationDispatcher,
    pub should_continue: bool,
}

impl ChatState {
    pub fn new(conversation: ConversationDispatcher) -> Self {
        Self {
            conversation,
            should_continue: true,
        }
    }
}
