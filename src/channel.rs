//! Tokio adapter: decode a stream of inbound binary messages.
//!
//! A relay receiving a producer's stream over a socket forwards each binary
//! message into the chunk channel; the decoder task turns them into events.
//! Dropping the event receiver stops the task.

use bytes::Bytes;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::DecoderConfig;
use crate::decoder::StreamDecoder;
use crate::error::Result;
use crate::walker::Step;
use crate::Event;

/// Decode every chunk received on `chunks`, forwarding events to `events`.
///
/// Returns when the chunk channel closes and the remaining input is decoded,
/// when the element tree completes, or when the event receiver is dropped.
/// Structural errors end the task with that error.
pub async fn run_decoder(
    mut chunks: mpsc::Receiver<Bytes>,
    events: mpsc::Sender<Event>,
    config: DecoderConfig,
) -> Result<()> {
    let mut decoder = StreamDecoder::new(config);

    while let Some(chunk) = chunks.recv().await {
        decoder.push(&chunk);
        match forward(&mut decoder, &events).await? {
            Forwarded::NeedMoreData => {}
            Forwarded::Finished => {
                tracing::debug!("Element tree complete at offset {}", decoder.position());
                return Ok(());
            }
            Forwarded::Closed => {
                tracing::debug!("Event receiver dropped; stopping decoder");
                return Ok(());
            }
        }
    }

    tracing::debug!("Chunk channel closed at offset {}", decoder.position());
    decoder.finish();
    forward(&mut decoder, &events).await?;
    Ok(())
}

/// Spawn [`run_decoder`] on the current runtime with bounded channels.
pub fn spawn_decoder(
    config: DecoderConfig,
    capacity: usize,
) -> (mpsc::Sender<Bytes>, mpsc::Receiver<Event>, JoinHandle<Result<()>>) {
    let (chunk_tx, chunk_rx) = mpsc::channel(capacity);
    let (event_tx, event_rx) = mpsc::channel(capacity);
    let handle = tokio::spawn(run_decoder(chunk_rx, event_tx, config));
    (chunk_tx, event_rx, handle)
}

enum Forwarded {
    NeedMoreData,
    Finished,
    Closed,
}

async fn forward(decoder: &mut StreamDecoder, events: &mpsc::Sender<Event>) -> Result<Forwarded> {
    loop {
        match decoder.poll()? {
            Step::Event(event) => {
                if events.send(event).await.is_err() {
                    return Ok(Forwarded::Closed);
                }
            }
            Step::NeedMoreData => return Ok(Forwarded::NeedMoreData),
            Step::Finished => return Ok(Forwarded::Finished),
        }
    }
}
