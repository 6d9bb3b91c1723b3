use std::process::exit;
use std::sync::Arc;

use secret_gate::commands::parser::parse;
use secret_gate::commands::secret::Secret;
use secret_gate::commands::utils::{reply_unknown_command, InteractionResponder};
use secret_gate::commands::{Command, CommandKind};
use secret_gate::config::{config_path, token};
use secret_gate::session::{on_ready, HttpRegistrar, SessionState};
use secret_gate::State;
use serenity::client::{Context, EventHandler};
use serenity::model::prelude::interaction::Interaction;
use serenity::model::prelude::Ready;
use serenity::prelude::GatewayIntents;
use serenity::{async_trait, Client};
use tracing::{error, info};

struct Handler {
    state: Arc<State>,
}

#[async_trait]
impl EventHandler for Handler {
    /// Handler for the `ready` event
    /// Called on every successful connection, including reconnections
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
        info!("Session state: {}", SessionState::Connected);
        let registrar = HttpRegistrar::new(&ctx.http);
        let session_state = on_ready(&registrar, self.state.config.guild()).await;
        info!("Session state: {session_state}");
    }

    /// Handler for the `interaction_create` event
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::ApplicationCommand(command) = interaction else {
            return;
        };
        match parse(&command.data.name) {
            Ok(kind) => {
                info!("Received '{kind}' command from {}", &command.user.name);
                if let Err(e) = match kind {
                    CommandKind::Secret => Secret::run(&ctx, &command, &self.state).await,
                } {
                    error!("Failed to execute {kind} command: {e:#}");
                } else {
                    info!("Executed {kind} command successfully");
                }
            }
            Err(e) => {
                error!("Received '{}' command: {e}", &command.data.name);
                reply_unknown_command(InteractionResponder::new(&ctx, &command))
                    .await
                    .unwrap_or_else(|e| error!("Failed to answer unknown command: {e:#}"));
            }
        }
    }
}

#[tokio::main]
async fn main() {
    // Setup tracing
    let subscriber = tracing_subscriber::FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eprintln!("Unable to set global default subscriber: {e}"))
        .ok();
    info!("Session state: {}", SessionState::Disconnected);

    // Get the discord token, a .env file can be used to provide it
    dotenv::dotenv().ok();
    let token = token().unwrap_or_else(|e| {
        error!("{e}");
        exit(1);
    });
    info!("Found discord token");

    // Parse the config file
    let path = config_path();
    let state = State::from_config_file(&path).unwrap_or_else(|e| {
        error!("{e:#}");
        exit(1);
    });
    info!(
        "Config file {path} loaded: guild {}, {} authorized role(s)",
        state.config.guild(),
        state.roles.len()
    );

    // Slash commands don't need any privileged intent
    let intents = GatewayIntents::GUILDS;

    // Create a new instance of the Client, logging in as a bot.
    let mut client = Client::builder(&token, intents)
        .event_handler(Handler {
            state: Arc::new(state),
        })
        .await
        .unwrap_or_else(|e| {
            error!("Error creating client: {e}");
            exit(1);
        });
    info!("Client is setup");

    // Finally, start a single shard, and start listening to events.
    info!("Session state: {}", SessionState::Connecting);
    if let Err(err) = client.start().await {
        error!("Client error: {:?}", err);
        exit(1);
    }
}
