//! Line-oriented terminal front-end for [`ChatClient`].
//!
//! Each input line is one message followed by Enter. Entries are written to
//! the output as they are appended; replies show up in the order they
//! complete, which may differ from the order messages were sent.

use futures::StreamExt;
use futures::stream::FuturesUnordered;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::ChatClient;
use super::render;
use super::transcript::Entry;

/// Line that ends the session.
pub const EXIT_COMMAND: &str = "exit";

const BANNER: &str = "Word Insight Chat. Type a message and press Enter, `exit` to quit.";

/// Drive `client` from `input` until `exit` or end of input.
///
/// At end of input, requests still in flight are awaited and rendered before
/// returning. `exit` returns immediately.
pub async fn run<R, W>(client: &mut ChatClient, input: R, mut output: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(format!("{BANNER}\n\n").as_bytes()).await?;
    output.flush().await?;

    let mut lines = input.lines();
    let mut in_flight = FuturesUnordered::new();
    let mut input_open = true;

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                match line? {
                    Some(line) if is_exit(&line) => {
                        tracing::debug!(pending = in_flight.len(), "Exit requested");
                        break;
                    }
                    Some(line) => {
                        client.set_input(line);
                        if let Some(pending) = client.begin_submit() {
                            if let Some(entry) = client.transcript().last() {
                                write_entry(&mut output, entry).await?;
                            }
                            in_flight.push(client.request(pending));
                        }
                    }
                    None => input_open = false,
                }
            }
            Some(reply) = in_flight.next(), if !in_flight.is_empty() => {
                let entry = client.apply_reply(reply);
                write_entry(&mut output, entry).await?;
            }
            else => break,
        }
    }

    Ok(())
}

fn is_exit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(EXIT_COMMAND)
}

async fn write_entry<W>(output: &mut W, entry: &Entry) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut block = render::entry(entry);
    block.push_str("\n\n");
    output.write_all(block.as_bytes()).await?;
    output.flush().await
}
