use anyhow::{Context, Result};
use async_trait::async_trait;
use serenity::model::{
    id::RoleId, prelude::interaction::application_command::ApplicationCommandInteraction,
};

use crate::gate::Responder;

/// Answers a slash command interaction through the discord API
pub struct InteractionResponder<'a> {
    ctx: &'a serenity::prelude::Context,
    command: &'a ApplicationCommandInteraction,
}

impl<'a> InteractionResponder<'a> {
    pub fn new(
        ctx: &'a serenity::prelude::Context,
        command: &'a ApplicationCommandInteraction,
    ) -> Self {
        InteractionResponder { ctx, command }
    }
}

#[async_trait]
impl Responder for InteractionResponder<'_> {
    async fn reply(self, content: &str, ephemeral: bool) -> Result<()> {
        self.command
            .create_interaction_response(self.ctx, |c| {
                c.interaction_response_data(|m| m.ephemeral(ephemeral).content(content))
            })
            .await
            .context("Failed to write message")
    }
}

/// Roles of the member who sent the command, none outside of a guild
pub fn member_roles(command: &ApplicationCommandInteraction) -> &[RoleId] {
    command
        .member
        .as_ref()
        .map(|member| member.roles.as_slice())
        .unwrap_or_default()
}

pub const UNKNOWN_COMMAND_MESSAGE: &str = "Unknown command";

/// Tell the user the command isn't known so the interaction doesn't time out
pub async fn reply_unknown_command<R: Responder + Send>(responder: R) -> Result<()> {
    responder.reply(UNKNOWN_COMMAND_MESSAGE, true).await
}
