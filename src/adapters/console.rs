//! Line-based stand-in for a chat transport.
//!
//! Each input line is `<user_id> <message>`; replies go to stdout.

use crate::adapters::commands;
use crate::app::services::preferences::PreferenceStore;
use crate::core::types::LanguageCode;
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

pub struct ConsoleArgs {
    pub store: PreferenceStore,
    pub lang: LanguageCode,
    pub command_prefix: String,
    pub cancel_token: CancellationToken,
}

pub async fn run_console(args: ConsoleArgs) -> Result<()> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    serve(args, stdin, stdout).await
}

pub async fn serve<R, W>(args: ConsoleArgs, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    loop {
        let line = tokio::select! {
            () = args.cancel_token.cancelled() => break,
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            tracing::info!(component = "console", "End of input");
            break;
        };

        let Some((user_id, message)) = parse_line(&line) else {
            if !line.trim().is_empty() {
                tracing::warn!(component = "console", line = %line, "Skipping malformed line");
            }
            continue;
        };

        let Some(command) = commands::parse_command(&args.command_prefix, message) else {
            tracing::trace!(component = "console", user_id, "Ignoring non-command message");
            continue;
        };

        tracing::debug!(component = "console", user_id, ?command, "Dispatching command");
        let reply = commands::handle_command(&args.store, args.lang, user_id, command).await;
        writer.write_all(reply.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }
    Ok(())
}

/// Splits `<user_id> <message>`.
pub fn parse_line(line: &str) -> Option<(i64, &str)> {
    let (id, message) = line.trim().split_once(char::is_whitespace)?;
    let user_id = id.parse().ok()?;
    Some((user_id, message.trim_start()))
}

#[cfg(test)]
#[path = "../../tests/unit/adapters_console.rs"]
mod tests;
