//! Console gateway - line-based stand-in for the chat platform connection
//!
//! Each input line is one interaction: `<caller-id> /<command> [argument...]`.
//! The argument text, if any, is bound to the command's first registered option.
//! Replies are written to the output, one block per interaction.

use async_trait::async_trait;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines};
use tracing::{debug, info, warn};

use crate::application::ports::outbound::{
    ChatGateway, CommandDefinition, GatewayError, Interaction, OptionKind,
};
use crate::domain::value_objects::OwnerId;

pub struct ConsoleGateway<R, W> {
    lines: Lines<R>,
    output: W,
    connected: bool,
    commands: Vec<CommandDefinition>,
}

impl ConsoleGateway<BufReader<io::Stdin>, io::Stdout> {
    /// Gateway reading from stdin and replying on stdout
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> ConsoleGateway<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, output: W) -> Self {
        Self {
            lines: reader.lines(),
            output,
            connected: false,
            commands: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Parse one input line; `None` if it is not an interaction
    fn parse_line(&self, line: &str) -> Option<Interaction> {
        let (caller, rest) = line.trim().split_once(char::is_whitespace)?;
        let caller: OwnerId = caller.parse().ok()?;

        let rest = rest.trim_start().strip_prefix('/')?;
        let (command, argument) = match rest.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (rest, ""),
        };
        if command.is_empty() {
            return None;
        }

        let mut interaction = Interaction::new(caller, command);
        if !argument.is_empty() {
            let option = self
                .commands
                .iter()
                .find(|definition| definition.name == command)
                .and_then(|definition| definition.options.first());
            if let Some(option) = option {
                interaction = match option.kind {
                    OptionKind::String => interaction.with_option(option.name, argument),
                };
            }
        }
        Some(interaction)
    }
}

#[async_trait]
impl<R, W> ChatGateway for ConsoleGateway<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn connect(&mut self, token: &str) -> Result<(), GatewayError> {
        if token.trim().is_empty() {
            return Err(GatewayError::Unauthorized("empty token".to_string()));
        }
        self.connected = true;
        info!("Console gateway connected");
        Ok(())
    }

    async fn register_commands(
        &mut self,
        commands: &[CommandDefinition],
    ) -> Result<(), GatewayError> {
        for command in commands {
            let options: Vec<_> = command
                .options
                .iter()
                .map(|option| format!("{}: {:?}", option.name, option.kind))
                .collect();
            info!(name = command.name, scope = %command.scope, ?options, "Registered command");
        }
        self.commands = commands.to_vec();
        Ok(())
    }

    async fn next_interaction(&mut self) -> Result<Option<Interaction>, GatewayError> {
        if !self.connected {
            return Err(GatewayError::NotConnected);
        }

        while let Some(line) = self.lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            match self.parse_line(&line) {
                Some(interaction) => {
                    debug!(?interaction, "Received interaction");
                    return Ok(Some(interaction));
                }
                None => warn!(%line, "Ignoring malformed input line"),
            }
        }
        Ok(None)
    }

    async fn reply(
        &mut self,
        interaction: &Interaction,
        content: &str,
    ) -> Result<(), GatewayError> {
        if !self.connected {
            return Err(GatewayError::NotConnected);
        }
        let block = format!("[{} /{}]\n{}\n", interaction.caller, interaction.command, content);
        self.output.write_all(block.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}
