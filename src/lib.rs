use anyhow::{Context, Result};
use config::Config;
use gate::RoleSet;
use tracing::warn;

pub mod commands;
pub mod config;
pub mod gate;
pub mod session;

/// Holds the configuration and the authorized roles, never modified once the bot is started
#[derive(Debug)]
pub struct State {
    pub config: Config, // The global config
    pub roles: RoleSet, // The roles allowed to use the secret command
}

impl State {
    pub fn from_config_file(path: &str) -> Result<Self> {
        let config =
            Config::from(path).context("An error occurred while parsing your config file")?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: Config) -> Self {
        let roles = RoleSet::new(config.roles());
        if roles.is_empty() {
            warn!("No authorized roles configured, every member will be denied");
        }
        State { config, roles }
    }
}
