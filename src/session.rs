use std::fmt::Display;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serenity::{http::Http, model::id::GuildId};
use tracing::{error, info};

use crate::commands::register_all;

/// Lifecycle of the connection to discord, as seen by the bot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connecting,
    Connected,
    CommandsRegistered,
}

impl Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Registers the bot commands in a guild
#[async_trait]
pub trait Registrar {
    /// Replace the commands of the guild with ours, returning how many were registered
    async fn register_commands(&self, guild_id: GuildId) -> Result<usize>;
}

/// Registrar going through the discord HTTP API
pub struct HttpRegistrar<'a> {
    http: &'a Http,
}

impl<'a> HttpRegistrar<'a> {
    pub fn new(http: &'a Http) -> Self {
        HttpRegistrar { http }
    }
}

#[async_trait]
impl Registrar for HttpRegistrar<'_> {
    async fn register_commands(&self, guild_id: GuildId) -> Result<usize> {
        // A bulk overwrite, calling it again after a reconnection is harmless
        let commands = guild_id
            .set_application_commands(self.http, register_all)
            .await
            .context(format!("Failed to register commands in guild {guild_id}"))?;
        Ok(commands.len())
    }
}

/// Handler for a successful connection.
/// A failed registration is logged but doesn't stop the bot.
pub async fn on_ready<R: Registrar + Sync>(registrar: &R, guild_id: GuildId) -> SessionState {
    info!("Registering commands in guild {guild_id}");
    match registrar.register_commands(guild_id).await {
        Ok(count) => {
            info!("Registered {count} command(s) in guild {guild_id}");
            SessionState::CommandsRegistered
        }
        Err(e) => {
            error!("{e:#}");
            SessionState::Connected
        }
    }
}
