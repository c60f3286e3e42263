//! Console and chat loops. Each input line is one turn; `quit` ends the session.

use std::io::{self, BufRead, Write};

use calc_api::{ChatSession, Role};
use handler_chain::IntentChain;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const QUIT: &str = "quit";
/// Chat-only command printing the session transcript.
pub const HISTORY: &str = "/history";

pub const CONSOLE_GREETING: &str = "計算エージェントを開始します。「5たす3は？」のように話しかけてください。終了するには 'quit' と入力してください。";
pub const CHAT_GREETING: &str =
    "足し算、引き算、掛け算ができます。「5たす3は？」のように入力してください。";
pub const FAREWELL: &str = "エージェントを終了します。";

/// In-process session: every line is answered by `chain` directly.
pub fn run_console<R: BufRead, W: Write>(chain: &IntentChain, input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "{}", CONSOLE_GREETING)?;
    for line in input.lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text == QUIT {
            break;
        }
        writeln!(output, "{}", chain.respond(text))?;
    }
    writeln!(output, "{}", FAREWELL)?;
    Ok(())
}

/// Remote session: every line goes through `session` to the `/ask` endpoint.
pub async fn run_chat<R, W>(session: &mut ChatSession, input: R, mut output: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(output, "{}", CHAT_GREETING)?;
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        match text {
            "" => continue,
            QUIT => break,
            HISTORY => {
                for entry in session.transcript() {
                    let role = match entry.role {
                        Role::User => "user",
                        Role::Assistant => "assistant",
                    };
                    writeln!(
                        output,
                        "[{}] {}: {}",
                        entry.created_at.format("%H:%M:%S"),
                        role,
                        entry.content
                    )?;
                }
                continue;
            }
            _ => {}
        }
        let reply = session.send(text).await;
        writeln!(output, "{}", reply)?;
    }
    writeln!(output, "{}", FAREWELL)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_api::AskClient;

    #[test]
    fn test_console_answers_until_quit() {
        let chain = IntentChain::default();
        let input = "5たす3は？\n\nこんにちは\nquit\n10 ひく 4\n".as_bytes();
        let mut output = Vec::new();

        run_console(&chain, input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], CONSOLE_GREETING);
        assert_eq!(lines[1], "5.0 たす 3.0 は 8.0 です。");
        assert_eq!(lines[2], handler_chain::GUIDANCE);
        assert_eq!(lines[3], FAREWELL);
    }

    #[test]
    fn test_console_ends_on_eof() {
        let chain = IntentChain::default();
        let mut output = Vec::new();
        run_console(&chain, "3 かける 4".as_bytes(), &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("3.0 かける 4.0 は 12.0 です。"));
        assert!(output.ends_with(&format!("{}\n", FAREWELL)));
    }

    #[tokio::test]
    async fn test_chat_sends_lines_and_prints_history() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/ask")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"response":"5.0 たす 3.0 は 8.0 です。"}"#)
            .create_async()
            .await;

        let mut session = ChatSession::new(AskClient::new(format!("{}/ask", server.url())));
        let input = "5たす3は？\n/history\nquit\n".as_bytes();
        let mut output = Vec::new();

        run_chat(&mut session, input, &mut output).await.unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], CHAT_GREETING);
        assert_eq!(lines[1], "5.0 たす 3.0 は 8.0 です。");
        assert!(lines[2].ends_with("user: 5たす3は？"));
        assert!(lines[3].ends_with("assistant: 5.0 たす 3.0 は 8.0 です。"));
        assert_eq!(lines[4], FAREWELL);
        assert_eq!(session.transcript().len(), 2);
    }
}
