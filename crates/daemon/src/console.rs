// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented operator console.
//!
//! Stands in for the selection and chat UI: lists agents, opens and closes
//! the conversation session, and nudges the mock inventory.

use std::sync::Arc;

use herd_adapters::{ChatProvider, MockInventory};
use herd_core::ResourceId;
use herd_engine::{AgentDirectory, ConversationSession, ReconcilerCommand, SessionError};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

/// One console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Select(String),
    Say(String),
    End,
    Cycle(String),
    Refresh(String),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

const HELP: &str = "\
commands:
  list              show agents
  select <agent>    start a conversation (id or display name)
  say <text>        send a message in the active conversation
  end               end the active conversation
  cycle <agent>     advance a mock resource's load level
  refresh <agent>   re-read one agent's load level
  quit              exit";

/// Parse one input line.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let arg = |name: &'static str| {
        if rest.is_empty() {
            Err(ParseError::MissingArgument(name))
        } else {
            Ok(rest.to_string())
        }
    };
    match word.to_ascii_lowercase().as_str() {
        "" => Err(ParseError::Empty),
        "list" | "ls" => Ok(Command::List),
        "select" => arg("select").map(Command::Select),
        "say" => arg("say").map(Command::Say),
        "end" => Ok(Command::End),
        "cycle" => arg("cycle").map(Command::Cycle),
        "refresh" => arg("refresh").map(Command::Refresh),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

/// Whether the console should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    Continue,
    Quit,
}

pub struct Console<C: ChatProvider> {
    directory: AgentDirectory,
    session: Arc<ConversationSession<C>>,
    commands: mpsc::Sender<ReconcilerCommand>,
    mock: Option<MockInventory>,
    thinking_text: String,
}

impl<C: ChatProvider> Console<C> {
    pub fn new(
        directory: AgentDirectory,
        session: Arc<ConversationSession<C>>,
        commands: mpsc::Sender<ReconcilerCommand>,
        mock: Option<MockInventory>,
        thinking_text: String,
    ) -> Self {
        Self { directory, session, commands, mock, thinking_text }
    }

    /// Read commands from `input` until `quit` or end of input.
    pub async fn run<R, W>(&self, input: R, out: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        prompt(out).await?;
        while let Some(line) = lines.next_line().await? {
            match parse(&line) {
                Ok(command) => {
                    if self.execute(command, out).await? == Next::Quit {
                        return Ok(());
                    }
                }
                Err(ParseError::Empty) => {}
                Err(e) => emit(out, e).await?,
            }
            prompt(out).await?;
        }
        Ok(())
    }

    pub async fn execute<W>(&self, command: Command, out: &mut W) -> std::io::Result<Next>
    where
        W: AsyncWrite + Unpin,
    {
        match command {
            Command::List => self.list(out).await?,
            Command::Select(target) => {
                let Some(id) = self.resolve(&target) else {
                    emit(out, format!("no agent named {}", target)).await?;
                    return Ok(Next::Continue);
                };
                if let Some(active) = self.session.active_agent() {
                    emit(out, SessionError::AlreadyActive(active)).await?;
                    return Ok(Next::Continue);
                }
                emit(out, &self.thinking_text).await?;
                let result = self.session.select(&id).await;
                self.reply(result, out).await?;
            }
            Command::Say(text) => {
                if !self.session.is_active() {
                    emit(out, SessionError::NoActiveSession).await?;
                    return Ok(Next::Continue);
                }
                emit(out, format!("you: {}", text)).await?;
                emit(out, &self.thinking_text).await?;
                let result = self.session.send_user_message(text).await;
                self.reply(result, out).await?;
            }
            Command::End => {
                if self.session.end_session() {
                    emit(out, "conversation ended").await?;
                }
            }
            Command::Cycle(target) => self.cycle(&target, out).await?,
            Command::Refresh(target) => match self.resolve(&target) {
                Some(id) => {
                    if self.commands.send(ReconcilerCommand::Refresh(id.clone())).await.is_ok() {
                        emit(out, format!("refreshing {}", id)).await?;
                    } else {
                        emit(out, "reconciler is not running").await?;
                    }
                }
                None => emit(out, format!("no agent named {}", target)).await?,
            },
            Command::Help => emit(out, HELP).await?,
            Command::Quit => return Ok(Next::Quit),
        }
        Ok(Next::Continue)
    }

    async fn list<W: AsyncWrite + Unpin>(&self, out: &mut W) -> std::io::Result<()> {
        let snapshots = self.directory.snapshots();
        if snapshots.is_empty() {
            return emit(out, "no agents").await;
        }
        let active = self.session.active_agent();
        let mut table = String::new();
        for snap in snapshots {
            let marker = if active.as_ref() == Some(&snap.id) { " *talking*" } else { "" };
            let warning = if snap.cost_view.warning { " !" } else { "" };
            table.push_str(&format!(
                "{:<10} {:<4} {:<6} ${:>6.2}{} {:<9} {}{}\n",
                snap.display_name,
                snap.resource_type.to_string(),
                snap.load_level.to_string(),
                snap.cost,
                warning,
                snap.phase.to_string(),
                snap.id.short(24),
                marker
            ));
        }
        out.write_all(table.as_bytes()).await?;
        out.flush().await
    }

    async fn cycle<W: AsyncWrite + Unpin>(&self, target: &str, out: &mut W) -> std::io::Result<()> {
        let Some(mock) = &self.mock else {
            return emit(out, "cycle needs the mock inventory").await;
        };
        let id = self.resolve(target).unwrap_or_else(|| ResourceId::new(target));
        match mock.cycle(&id) {
            Some(level) => {
                emit(out, format!("{} is now {}", id, level)).await?;
                // Best effort; the next periodic poll picks it up anyway.
                let _ = self.commands.send(ReconcilerCommand::PollNow).await;
            }
            None => emit(out, format!("no mock resource {}", id)).await?,
        }
        Ok(())
    }

    /// Match an agent by id first, then by display name.
    fn resolve(&self, target: &str) -> Option<ResourceId> {
        if let Some(handle) = self.directory.get(target) {
            return Some(handle.id().clone());
        }
        self.directory
            .snapshots()
            .into_iter()
            .find(|s| s.display_name.eq_ignore_ascii_case(target))
            .map(|s| s.id)
    }

    async fn reply<W: AsyncWrite + Unpin>(
        &self,
        result: Result<Option<String>, SessionError>,
        out: &mut W,
    ) -> std::io::Result<()> {
        match result {
            Ok(Some(text)) => {
                let speaker = self.session.active_agent().map(|id| id.to_string()).unwrap_or_default();
                let name = self.directory.get(&speaker).map(|h| h.snapshot().display_name).unwrap_or(speaker);
                emit(out, format!("{}: {}", name, text)).await
            }
            Ok(None) => emit(out, "(no reply)").await,
            Err(e) => emit(out, e).await,
        }
    }
}

/// Write one line and flush it.
async fn emit<W: AsyncWrite + Unpin>(out: &mut W, line: impl std::fmt::Display) -> std::io::Result<()> {
    out.write_all(format!("{}\n", line).as_bytes()).await?;
    out.flush().await
}

async fn prompt<W: AsyncWrite + Unpin>(out: &mut W) -> std::io::Result<()> {
    out.write_all(b"> ").await?;
    out.flush().await
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
