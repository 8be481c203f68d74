use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod commands;
mod config;
mod conversation;
mod core;
mod course;
mod display;
mod input;
mod services;

use crate::app::Application;
use crate::cli::Args;
use crate::commands::create_command_registry;
use crate::config::Config;
use crate::conversation::{ConversationDispatcher, Session};
use crate::core::error::VerseError;
use crate::services::professor::ProfessorClient;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "verse=debug" } else { "verse=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), VerseError> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = Config::load()?;
    if let Some(base_url) = &args.base_url {
        config.api.base_url = base_url.clone();
    }
    tracing::debug!(base_url = %config.api.base_url, "using professor backend");

    let client = Arc::new(ProfessorClient::new(&config.api)?);
    let session = Session::new(config.default_course.unwrap_or_default());
    let conversation = ConversationDispatcher::new(session, client.clone(), client);

    let command_dispatcher = create_command_registry();
    let mut app = Application::new(args, conversation, command_dispatcher)?;
    app.run().await
}
