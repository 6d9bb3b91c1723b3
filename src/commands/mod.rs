use std::fmt::Display;

use anyhow::Result;
use async_trait::async_trait;
use serenity::{
    builder::{CreateApplicationCommand, CreateApplicationCommands},
    model::prelude::interaction::application_command::ApplicationCommandInteraction,
};

use crate::State;

pub mod parser;
pub mod secret;
pub mod utils;

/// A slash command: how to declare it to discord and how to run it
#[async_trait]
pub trait Command {
    async fn run(
        ctx: &serenity::prelude::Context,
        command: &ApplicationCommandInteraction,
        state: &State,
    ) -> Result<()>;

    fn register(command: &mut CreateApplicationCommand) -> &mut CreateApplicationCommand;
}

/// The type of commands that can be used with this bot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Secret,
}

impl Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Declare every command of the bot
pub fn register_all(commands: &mut CreateApplicationCommands) -> &mut CreateApplicationCommands {
    commands.create_application_command(secret::Secret::register)
}
