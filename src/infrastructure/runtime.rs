//! Bot runtime - connects the gateway and dispatches interactions to the command service
//!
//! Interactions are handled one at a time, in arrival order. The loop ends when the
//! shutdown signal is raised or the gateway closes.

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::application::ports::outbound::ChatGateway;
use crate::application::services::{command_definitions, CommandService, Shutdown};
use crate::domain::value_objects::GuildId;

pub struct BotRuntime<G> {
    gateway: G,
    command_service: CommandService,
    shutdown: Shutdown,
}

impl<G: ChatGateway> BotRuntime<G> {
    pub fn new(gateway: G, command_service: CommandService, shutdown: Shutdown) -> Self {
        Self {
            gateway,
            command_service,
            shutdown,
        }
    }

    #[cfg(test)]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Connect, register the commands in `scope` and serve until shutdown
    #[instrument(skip(self, token))]
    pub async fn start(&mut self, token: &str, scope: GuildId) -> Result<()> {
        self.gateway
            .connect(token)
            .await
            .context("Failed to connect to the chat gateway")?;
        self.gateway
            .register_commands(&command_definitions(scope))
            .await
            .context("Failed to register commands")?;

        info!("Bot is ready");
        self.run().await
    }

    async fn run(&mut self) -> Result<()> {
        loop {
            // Checked first so a reply that raised the signal is the last one sent
            let next = tokio::select! {
                biased;
                _ = self.shutdown.wait() => {
                    info!("Shutdown signal received");
                    return Ok(());
                }
                next = self.gateway.next_interaction() => {
                    next.context("Failed to receive interaction")?
                }
            };

            let Some(interaction) = next else {
                info!("Gateway closed");
                return Ok(());
            };

            let reply = self.command_service.handle(&interaction).await;
            self.gateway
                .reply(&interaction, &reply)
                .await
                .context("Failed to send reply")?;
        }
    }
}
