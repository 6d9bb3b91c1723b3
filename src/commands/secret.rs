use anyhow::Result;
use async_trait::async_trait;
use serenity::{
    builder::CreateApplicationCommand,
    model::prelude::interaction::application_command::ApplicationCommandInteraction,
};
use tracing::info;

use crate::{gate, State};

use super::{
    utils::{member_roles, InteractionResponder},
    Command,
};

pub const NAME: &str = "secret";
pub const DESCRIPTION: &str = "Reveal the secret, if your roles allow it";

/// Only members holding one of the authorized roles get the secret
pub struct Secret;

#[async_trait]
impl Command for Secret {
    async fn run(
        ctx: &serenity::prelude::Context,
        command: &ApplicationCommandInteraction,
        state: &State,
    ) -> Result<()> {
        let roles = member_roles(command);
        info!("Checking {} role(s) of {}", roles.len(), &command.user.name);

        gate::handle(InteractionResponder::new(ctx, command), roles, &state.roles).await?;
        Ok(())
    }

    fn register(command: &mut CreateApplicationCommand) -> &mut CreateApplicationCommand {
        command.name(NAME).description(DESCRIPTION)
    }
}
