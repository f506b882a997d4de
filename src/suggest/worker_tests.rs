//! Tests for the suggest worker thread

use super::*;
use serde_json::json;
use std::sync::mpsc;
use std::time::Duration;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client pointed at a port nothing listens on, so every query fails fast
fn refused_client() -> SuggestClient {
    SuggestClient::new("http://127.0.0.1:1/v1alpha1/graphql").unwrap()
}

#[test]
fn test_worker_shuts_down_when_channel_closed() {
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel::<SuggestRequest>();
    let (response_tx, _response_rx) = mpsc::channel();

    let handle = std::thread::spawn(move || {
        worker_loop(refused_client(), request_rx, response_tx);
    });

    // Drop the sender to close the channel
    drop(request_tx);

    // Worker should exit cleanly
    handle.join().expect("Worker thread should exit cleanly");
}

#[test]
fn test_failed_query_sends_no_response() {
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel::<SuggestResponse>();

    spawn_worker(refused_client(), request_rx, response_tx);

    request_tx
        .send(SuggestRequest {
            seq: 1,
            example: "java%".to_string(),
        })
        .unwrap();

    // The connection is refused; the failure stays in the log and the
    // response channel never carries anything
    assert!(response_rx.recv_timeout(Duration::from_millis(500)).is_err());
}

#[tokio::test]
async fn test_successful_query_delivers_rendered_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"skills": [{"id": "7", "name": "Rust"}]}
        })))
        .mount(&server)
        .await;

    let client = SuggestClient::new(&server.uri()).unwrap();
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();

    spawn_worker(client, request_rx, response_tx);

    request_tx
        .send(SuggestRequest {
            seq: 1,
            example: "ru%".to_string(),
        })
        .unwrap();

    // The worker runs on its own thread; wait for its response on a
    // blocking task so this runtime keeps driving the mock server
    let response = tokio::task::spawn_blocking(move || {
        response_rx.recv_timeout(Duration::from_secs(5))
    })
    .await
    .unwrap()
    .expect("Worker should deliver one response");

    assert_eq!(response.seq, 1);
    assert_eq!(response.text, "Skill Name: Rust id: 7");
}

#[tokio::test]
async fn test_empty_result_delivers_fallback_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"skills": []}})))
        .mount(&server)
        .await;

    let client = SuggestClient::new(&server.uri()).unwrap();
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();

    spawn_worker(client, request_rx, response_tx);

    request_tx
        .send(SuggestRequest {
            seq: 1,
            example: "zzz%".to_string(),
        })
        .unwrap();

    let response = tokio::task::spawn_blocking(move || {
        response_rx.recv_timeout(Duration::from_secs(5))
    })
    .await
    .unwrap()
    .expect("Worker should deliver one response");

    assert_eq!(response.text, "No Such Skills");
}

#[tokio::test]
async fn test_overlapping_requests_each_get_a_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"skills": []}})))
        .mount(&server)
        .await;

    let client = SuggestClient::new(&server.uri()).unwrap();
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();

    spawn_worker(client, request_rx, response_tx);

    // Three keystrokes in a row, none cancelling the previous one
    for (seq, example) in [(1, "j%"), (2, "ja%"), (3, "jav%")] {
        request_tx
            .send(SuggestRequest {
                seq,
                example: example.to_string(),
            })
            .unwrap();
    }

    let seqs = tokio::task::spawn_blocking(move || {
        let mut seqs: Vec<u64> = (0..3)
            .map(|_| {
                response_rx
                    .recv_timeout(Duration::from_secs(5))
                    .expect("Each request should get a response")
                    .seq
            })
            .collect();
        seqs.sort_unstable();
        seqs
    })
    .await
    .unwrap();

    // Arrival order is not guaranteed, but nothing is dropped
    assert_eq!(seqs, vec![1, 2, 3]);
}
