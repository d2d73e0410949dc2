//! Tokio adapter tests

mod common;

use assert_matches::assert_matches;
use bytes::Bytes;
use tokio::sync::mpsc;
use webmstream::channel::{run_decoder, spawn_decoder};
use webmstream::{decode_events, ids, DecoderConfig, Error, Event};

#[tokio::test]
async fn test_events_match_buffered_decode() {
    let data = common::live_stream();
    let mut expected = Vec::new();
    decode_events(&data, DecoderConfig::default(), &mut expected).unwrap();

    let (chunk_tx, mut event_rx, handle) = spawn_decoder(DecoderConfig::default(), 8);

    let producer = {
        let data = data.clone();
        tokio::spawn(async move {
            for chunk in data.chunks(37) {
                chunk_tx.send(Bytes::copy_from_slice(chunk)).await.unwrap();
            }
        })
    };

    let mut events = Vec::new();
    while let Some(event) = event_rx.recv().await {
        events.push(event);
    }

    producer.await.unwrap();
    handle.await.unwrap().unwrap();
    assert_eq!(events, expected);
}

#[tokio::test]
async fn test_structural_error_ends_task() {
    let (chunk_tx, chunk_rx) = mpsc::channel(4);
    let (event_tx, mut event_rx) = mpsc::channel(4);
    let task = tokio::spawn(run_decoder(chunk_rx, event_tx, DecoderConfig::default()));

    chunk_tx.send(Bytes::from_static(&[0x00, 0x81])).await.unwrap();

    let result = task.await.unwrap();
    assert_matches!(result, Err(Error::Ebml(_)));
    assert!(event_rx.recv().await.is_none());
}

#[tokio::test]
async fn test_dropped_receiver_stops_decoder() {
    let (chunk_tx, chunk_rx) = mpsc::channel(4);
    let (event_tx, event_rx) = mpsc::channel::<Event>(1);
    drop(event_rx);

    let task = tokio::spawn(run_decoder(chunk_rx, event_tx, DecoderConfig::default()));
    chunk_tx
        .send(Bytes::from(common::ebml_header("webm")))
        .await
        .unwrap();

    assert!(task.await.unwrap().is_ok());
}

#[test]
fn test_first_event_with_block_on() {
    let data = common::ebml_header("webm");
    let (chunk_tx, chunk_rx) = mpsc::channel(1);
    let (event_tx, mut event_rx) = mpsc::channel(16);

    let event = tokio_test::block_on(async move {
        chunk_tx.send(Bytes::from(data)).await.unwrap();
        drop(chunk_tx);
        run_decoder(chunk_rx, event_tx, DecoderConfig::default())
            .await
            .unwrap();
        event_rx.recv().await
    });

    assert_matches!(event, Some(Event::ContainerEnter { id: ids::EBML, offset: 0, .. }));
}
