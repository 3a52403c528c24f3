// Push channel - line-delimited JSON stream from the backend
use crate::domain::push::PushMessage;
use async_stream::stream;
use bytes::BytesMut;
use futures::{Stream, StreamExt};
use std::time::Duration;
use tracing::{info, warn};

const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Subscribe to the backend's acknowledgement channel. The returned stream
/// yields messages for the lifetime of the process; this module owns the
/// reconnect loop, consumers just read.
pub fn subscribe(client: reqwest::Client, url: String) -> impl Stream<Item = PushMessage> {
    stream! {
        loop {
            match client.get(&url).send().await {
                Ok(response) if response.status().is_success() => {
                    info!(%url, "push channel connected");
                    let mut body = response.bytes_stream();
                    let mut buffer = BytesMut::new();
                    while let Some(chunk) = body.next().await {
                        match chunk {
                            Ok(bytes) => {
                                buffer.extend_from_slice(&bytes);
                                while let Some(msg) = next_message(&mut buffer) {
                                    yield msg;
                                }
                            }
                            Err(e) => {
                                warn!(error = %e, "push channel read failed");
                                break;
                            }
                        }
                    }
                    warn!("push channel disconnected");
                }
                Ok(response) => {
                    warn!(status = %response.status(), "push channel rejected");
                }
                Err(e) => {
                    warn!(error = %e, "push channel connect failed");
                }
            }
            tokio::time::sleep(RECONNECT_DELAY).await;
        }
    }
}

/// Pop the next complete frame off the buffer. Malformed frames are
/// discarded; a trailing partial line stays buffered until more bytes land.
fn next_message(buffer: &mut BytesMut) -> Option<PushMessage> {
    while let Some(pos) = buffer.iter().position(|b| *b == b'\n') {
        let frame = buffer.split_to(pos + 1);
        let line = frame[..frame.len() - 1].strip_suffix(b"\r").unwrap_or(&frame[..frame.len() - 1]);
        if line.is_empty() {
            continue;
        }
        match serde_json::from_slice(line) {
            Ok(msg) => return Some(msg),
            Err(e) => warn!(error = %e, "discarding malformed push frame"),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_frame_is_parsed() {
        let mut buffer = BytesMut::from(
            &br#"{"cmd": "REQUEST_MATERIAL:steel", "response": "need 40t"}
"#[..],
        );
        let msg = next_message(&mut buffer).unwrap();
        assert_eq!(msg.cmd, "REQUEST_MATERIAL:steel");
        assert_eq!(msg.response, "need 40t");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_partial_frame_stays_buffered() {
        let mut buffer = BytesMut::from(&br#"{"cmd": "incre"#[..]);
        assert!(next_message(&mut buffer).is_none());

        buffer.extend_from_slice(b"ase speed\", \"response\": \"ok\"}\n");
        let msg = next_message(&mut buffer).unwrap();
        assert_eq!(msg.cmd, "increase speed");
    }

    #[test]
    fn test_malformed_frame_is_skipped() {
        let mut buffer = BytesMut::from(&b"not json\n{\"cmd\": \"status\"}\n"[..]);
        let msg = next_message(&mut buffer).unwrap();
        assert_eq!(msg.cmd, "status");
        assert_eq!(msg.response, "");
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let mut buffer = BytesMut::from(&b"\n\r\n{\"cmd\": \"status\"}\n"[..]);
        let msg = next_message(&mut buffer).unwrap();
        assert_eq!(msg.cmd, "status");
    }
}
