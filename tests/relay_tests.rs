mod common;

use abtrow_chat::prompt::SYSTEM_PROMPT;
use abtrow_chat::services::completion::CompletionError;
use abtrow_chat::services::relay::{Relay, failure_reply};
use common::{Canned, StubClient, TEST_MODEL};

#[tokio::test]
async fn trims_before_forwarding() {
    let stub = StubClient::replying("ok");
    let relay = Relay::new(stub.clone(), TEST_MODEL);

    relay.handle("  \n UK \t").await.unwrap();

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1[1].content, "UK");
}

#[tokio::test]
async fn empty_inputs_never_reach_upstream() {
    let stub = StubClient::replying("unused");
    let relay = Relay::new(stub.clone(), TEST_MODEL);

    for input in ["", "   ", "\n\t"] {
        assert_eq!(relay.handle(input).await.unwrap(), "Please type a question first.");
    }
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn model_output_is_not_touched() {
    let text = "  Burmese + English mix: မင်္ဂလာပါ\n\n- step one\n";
    let relay = Relay::new(StubClient::replying(text), TEST_MODEL);

    assert_eq!(relay.handle("hello").await.unwrap(), text);
}

#[tokio::test]
async fn prompt_is_identical_on_every_call() {
    let stub = StubClient::replying("ok");
    let relay = Relay::new(stub.clone(), TEST_MODEL);

    relay.handle("Singapore").await.unwrap();
    relay.handle("Vietnam").await.unwrap();

    for (_, messages) in stub.calls() {
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
    }
}

#[tokio::test]
async fn failures_come_back_as_errors() {
    let stub = StubClient::with(Canned::NoChoices);
    let relay = Relay::new(stub.clone(), TEST_MODEL);

    let err = relay.handle("New Zealand").await.unwrap_err();
    assert!(matches!(err, CompletionError::EmptyChoices));
    assert_eq!(stub.calls().len(), 1);

    let reply = failure_reply(&err);
    assert!(reply.starts_with("Sorry, the AI had an error: "));
}

#[tokio::test]
async fn auth_failure_description_reaches_the_reply() {
    let relay = Relay::new(StubClient::failing_auth("invalid api key"), TEST_MODEL);

    let err = relay.handle("Visa Help").await.unwrap_err();
    let reply = failure_reply(&err);

    assert!(reply.contains("Sorry, the AI had an error"));
    assert!(reply.contains("invalid api key"));
    assert!(reply.contains("401"));
}
