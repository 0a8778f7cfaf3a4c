//! `PutioService` against a mock put.io server

mod common;

use common::{MAGNET, TOKEN, trigger_with};
use mockito::{Matcher, Server};
use putio_fetch::error::Error;
use putio_fetch::platform::{PutioService, TransferService};
use putio_fetch::types::{SubmissionOutcome, TransferRequest};
use std::sync::Arc;

fn service_for(server: &Server) -> PutioService {
    PutioService::new(format!("{}/", server.url())).unwrap()
}

#[tokio::test]
async fn test_add_transfer_request_shape() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/transfers/add")
        .match_query(Matcher::UrlEncoded("oauth_token".into(), TOKEN.into()))
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body("url=magnet:?xt=urn:btih:ABCD")
        .with_status(200)
        .with_body(r#"{"status":"OK"}"#)
        .expect(1)
        .create_async()
        .await;

    let service = service_for(&server);
    service
        .add_transfers(&TransferRequest::new(MAGNET, TOKEN))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_body_is_sent_verbatim() {
    let raw = "magnet:?xt=urn:btih:ABCD&dn=some name\nhttps://example.test/b.torrent";
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/transfers/add")
        .match_query(Matcher::Any)
        .match_body(format!("url={raw}").as_str())
        .with_status(200)
        .create_async()
        .await;

    service_for(&server)
        .add_transfers(&TransferRequest::new(raw, TOKEN))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_200_statuses_are_errors() {
    for status in [201, 401, 500] {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/transfers/add")
            .match_query(Matcher::Any)
            .with_status(status)
            .create_async()
            .await;

        let result = service_for(&server)
            .add_transfers(&TransferRequest::new(MAGNET, TOKEN))
            .await;

        match result {
            Err(Error::UnexpectedStatus(code)) => assert_eq!(usize::from(code), status),
            other => panic!("expected UnexpectedStatus({status}), got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    // Nothing listens on port 1
    let service = PutioService::new("http://127.0.0.1:1/").unwrap();
    let result = service
        .add_transfers(&TransferRequest::new(MAGNET, TOKEN))
        .await;
    assert!(matches!(result, Err(Error::Http(_))));
}

#[tokio::test]
async fn test_malformed_base_url_fails_submission() {
    let service = Arc::new(PutioService::new("::not a url::/").unwrap());
    let (trigger, notifier) = trigger_with(service);

    let terminal = trigger.submit(MAGNET).await.unwrap().wait().await.unwrap();

    assert_eq!(terminal.outcome, SubmissionOutcome::Failed);
    assert_eq!(
        notifier.outcomes(),
        vec![SubmissionOutcome::Started, SubmissionOutcome::Failed]
    );
}

#[tokio::test]
async fn test_end_to_end_magnet_scenario() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/transfers/add")
        .match_query(Matcher::UrlEncoded("oauth_token".into(), "tok123".into()))
        .match_body("url=magnet:?xt=urn:btih:ABCD")
        .with_status(200)
        .create_async()
        .await;

    let (trigger, notifier) = trigger_with(Arc::new(service_for(&server)));
    let terminal = trigger
        .submit("magnet:?xt=urn:btih:ABCD")
        .await
        .unwrap()
        .wait()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(terminal.outcome, SubmissionOutcome::Succeeded);
    assert_eq!(
        notifier.outcomes(),
        vec![SubmissionOutcome::Started, SubmissionOutcome::Succeeded]
    );
}

#[tokio::test]
async fn test_server_error_fails_submission() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/transfers/add")
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;

    let (trigger, notifier) = trigger_with(Arc::new(service_for(&server)));
    let terminal = trigger.submit(MAGNET).await.unwrap().wait().await.unwrap();

    assert_eq!(terminal.outcome, SubmissionOutcome::Failed);
    assert!(!notifier.outcomes().contains(&SubmissionOutcome::Succeeded));
}
