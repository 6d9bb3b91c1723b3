use std::{env, fs};

use serde::{Deserialize, Serialize};
use serenity::model::id::{GuildId, RoleId};
use thiserror::Error;

/// Environment variable holding the bot token
pub const TOKEN_VAR: &str = "DISCORD_TOKEN";
/// Environment variable that can point to another config file
pub const CONFIG_PATH_VAR: &str = "SECRET_GATE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "./config/config.json";

/// Returned when the bot can't be configured from its environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Expected a discord token in the {0} environment variable")]
    MissingToken(String),
    #[error("Could not read {path}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse {path}")]
    Invalid {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("guild_id can't be 0")]
    ZeroGuild,
    #[error("Role ids can't be 0")]
    ZeroRole,
}

/// Corresponds to the config file that can be modified by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub guild_id: u64,              // The only guild the commands are registered in
    pub authorized_roles: Vec<u64>, // Roles allowed to see the secret
}

impl Config {
    /// Read and validate the config file at the given path
    pub fn from(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content, path)
    }

    fn from_json(content: &str, path: &str) -> Result<Self, ConfigError> {
        let config: Config =
            serde_json::from_str(content).map_err(|source| ConfigError::Invalid {
                path: path.to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.guild_id == 0 {
            return Err(ConfigError::ZeroGuild);
        }
        if self.authorized_roles.contains(&0) {
            return Err(ConfigError::ZeroRole);
        }
        Ok(())
    }

    pub fn guild(&self) -> GuildId {
        GuildId(self.guild_id)
    }

    pub fn roles(&self) -> impl Iterator<Item = RoleId> + '_ {
        self.authorized_roles.iter().map(|&id| RoleId(id))
    }
}

/// Path of the config file, taken from the environment if overridden
pub fn config_path() -> String {
    env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

/// Get the discord token from the environment
pub fn token() -> Result<String, ConfigError> {
    token_from(TOKEN_VAR)
}

fn token_from(var: &str) -> Result<String, ConfigError> {
    env::var(var)
        .ok()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ConfigError::MissingToken(var.to_string()))
}
