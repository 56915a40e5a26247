//! Terminal chat front-end.
//!
//! Plays the part of the browser page: prints the greeting, reads one
//! utterance per line, and shows the bot reply and any correction.
//!
//! # Commands
//!
//! | Input            | Effect                                   |
//! |------------------|------------------------------------------|
//! | `/mode <name>`   | switch to conversation/vocabulary/writing |
//! | `/help`          | list commands                            |
//! | `/quit`          | leave (EOF works too)                    |
//! | anything else    | sent to Nimmo                            |

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::chat::{ChatSession, ChatTurn};
use crate::tutor::Mode;

const HELP: &str = "Commands: /mode <conversation|vocabulary|writing>, /help, /quit";

// ---------------------------------------------------------------------------
// Input parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Say(String),
    SwitchMode(Mode),
    BadMode(String),
    Help,
    Quit,
}

fn parse_line(line: &str) -> Command {
    let trimmed = line.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some(("/mode", name)) => match Mode::from_name(Some(name.trim())) {
            Mode::Unspecified => Command::BadMode(name.trim().to_string()),
            mode => Command::SwitchMode(mode),
        },
        _ => match trimmed {
            "/mode" => Command::BadMode(String::new()),
            "/help" => Command::Help,
            "/quit" | "/exit" => Command::Quit,
            _ => Command::Say(trimmed.to_string()),
        },
    }
}

fn render(turn: &ChatTurn) -> Option<String> {
    match turn {
        ChatTurn::User { .. } => None,
        ChatTurn::Bot { text } => Some(format!("Nimmo: {text}")),
        ChatTurn::Correction { text, .. } => Some(format!("Correction: {text}")),
    }
}

// ---------------------------------------------------------------------------
// Loop
// ---------------------------------------------------------------------------

/// Run the chat loop until `/quit` or end of input.
pub async fn run_chat<R, W>(session: &mut ChatSession, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    for turn in session.transcript().turns() {
        if let Some(line) = render(turn) {
            output.write_all(format!("{line}\n").as_bytes()).await?;
        }
    }
    output
        .write_all(format!("[{} mode] {HELP}\n", session.mode().label()).as_bytes())
        .await?;
    output.flush().await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let reply = match parse_line(&line) {
            Command::Quit => break,
            Command::Help => HELP.to_string(),
            Command::BadMode(name) => format!("Unknown mode {name:?}. {HELP}"),
            Command::SwitchMode(mode) => {
                session.set_mode(mode);
                format!("[{} mode]", mode.label())
            }
            Command::Say(text) => session
                .send(&text)
                .await
                .iter()
                .filter_map(render)
                .collect::<Vec<_>>()
                .join("\n"),
        };

        if !reply.is_empty() {
            output.write_all(format!("{reply}\n").as_bytes()).await?;
            output.flush().await?;
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::chat::{ChatService, GREETING};
    use crate::llm::{ContextManager, LlmError, ReplyGenerator};

    struct Fixed;

    #[async_trait]
    impl ReplyGenerator for Fixed {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            if prompt.contains("writing skills") {
                Ok("Send me your text.".into())
            } else {
                Ok("Tell me more!".into())
            }
        }
    }

    fn session() -> ChatSession {
        ChatSession::new(
            ChatService::new(Arc::new(Fixed), ContextManager::new()),
            Mode::Conversation,
        )
    }

    async fn run(script: &str) -> (ChatSession, String) {
        let mut session = session();
        let mut output = Vec::new();
        run_chat(&mut session, script.as_bytes(), &mut output)
            .await
            .unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_line("/quit"), Command::Quit);
        assert_eq!(parse_line(" /help "), Command::Help);
        assert_eq!(
            parse_line("/mode vocabulary"),
            Command::SwitchMode(Mode::Vocabulary)
        );
        assert_eq!(parse_line("/mode quiz"), Command::BadMode("quiz".into()));
        assert_eq!(parse_line("/mode"), Command::BadMode(String::new()));
        assert_eq!(parse_line("hello there"), Command::Say("hello there".into()));
    }

    #[tokio::test]
    async fn greets_then_answers() {
        let (session, out) = run("I like tea\n").await;
        assert!(out.starts_with(&format!("Nimmo: {GREETING}\n")));
        assert!(out.contains("[Conversation mode]"));
        assert!(out.contains("Nimmo: Tell me more!\n"));
        assert!(!out.contains("Correction:"));
        assert_eq!(session.transcript().len(), 3);
    }

    #[tokio::test]
    async fn shows_corrections() {
        let (_, out) = run("She don't know\n").await;
        assert!(out.contains(
            "Correction: \"She don't\" should be \"she doesn't\". Use \"doesn't\" with he/she/it"
        ));
    }

    #[tokio::test]
    async fn mode_switch_and_quit() {
        let (session, out) = run("/mode writing\nReview this\n/quit\nnever sent\n").await;
        assert!(out.contains("[Writing mode]"));
        assert!(out.contains("Nimmo: Send me your text."));
        assert_eq!(session.mode(), Mode::Writing);
        assert!(!session
            .transcript()
            .turns()
            .iter()
            .any(|turn| turn.text() == "never sent"));
    }

    #[tokio::test]
    async fn blank_lines_are_ignored() {
        let (session, _) = run("\n   \n").await;
        assert_eq!(session.transcript().len(), 1);
    }
}
