//! End-to-end HTTP tests.

mod common;

use common::harness::{TestServerConfig, spawn_test_server};
use common::http_client::{TestClient, TestClientError};
use triage::generation::ConversationTurn;
use triage::knowledge::Entry;
use triage::orchestrator::ReplySource;

#[tokio::test]
async fn test_health_endpoint_reports_seeded_knowledge_base() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let health = client.health().await.expect("Health check should succeed");

    assert_eq!(health.status, "healthy");
    assert_eq!(health.knowledge_entries, 6);
    assert_eq!(health.semantic_mode, "unavailable");
    assert_eq!(health.generator, "template");
    assert!(health.cache_enabled);
    assert_eq!(health.cache_entries, 0);
}

#[tokio::test]
async fn test_business_hours_round_trip() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");
    let client = TestClient::new(server.url());

    let (reply, status) = client
        .analyze("What are your business hours?", &[])
        .await
        .expect("request should succeed");
    assert_eq!(status, "HIT_FAQ");
    assert_eq!(reply.intent, "business_hours");
    assert_eq!(reply.source, ReplySource::Faq);
    assert!(reply.confidence > 0.99);

    let (cached, status) = client
        .analyze("what are your business hours?", &[])
        .await
        .expect("request should succeed");
    assert_eq!(status, "HIT_CACHE");
    assert_eq!(cached, reply);

    let health = client.health().await.unwrap();
    assert_eq!(health.cache_entries, 1);
}

#[tokio::test]
async fn test_unmatched_message_is_generated_from_templates() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");
    let client = TestClient::new(server.url());

    let (reply, status) = client
        .analyze("Can you explain python decorators?", &[])
        .await
        .expect("request should succeed");
    assert_eq!(status, "GENERATED");
    assert_eq!(reply.source, ReplySource::Generated);
    assert!(reply.reply.contains("Python"));
}

#[tokio::test]
async fn test_long_history_is_not_cached() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");
    let client = TestClient::new(server.url());
    let history = vec![
        ConversationTurn::user("hi"),
        ConversationTurn::assistant("Hello! How can I help?"),
        ConversationTurn::user("I have a question"),
    ];

    for _ in 0..2 {
        let (_, status) = client
            .analyze("How do I reset my password?", &history)
            .await
            .expect("request should succeed");
        assert_eq!(status, "HIT_FAQ");
    }
    assert_eq!(client.health().await.unwrap().cache_entries, 0);
}

#[tokio::test]
async fn test_custom_knowledge_base_is_served() {
    let entries = vec![
        Entry::new(
            "Where is your warehouse located?",
            "Our warehouse is in Rotterdam.",
            "location",
        ),
        Entry::new(
            "Do you sell gift cards?",
            "Yes, gift cards are available in the online store.",
            "gift_cards",
        ),
    ];
    let server = spawn_test_server(TestServerConfig {
        entries: Some(entries),
        ..TestServerConfig::default()
    })
    .await
    .expect("Server should start");
    let client = TestClient::new(server.url());

    let (reply, status) = client
        .analyze("warehouse location", &[])
        .await
        .expect("request should succeed");
    assert_eq!(status, "HIT_FAQ");
    assert_eq!(reply.reply, "Our warehouse is in Rotterdam.");
}

#[tokio::test]
async fn test_cache_disabled_never_reports_cache_hits() {
    let server = spawn_test_server(TestServerConfig {
        cache_enabled: Some(false),
        ..TestServerConfig::default()
    })
    .await
    .expect("Server should start");
    let client = TestClient::new(server.url());

    for _ in 0..2 {
        let (_, status) = client.analyze("What is your return policy?", &[]).await.unwrap();
        assert_eq!(status, "HIT_FAQ");
    }
}

#[tokio::test]
async fn test_invalid_requests_are_rejected() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");
    let client = TestClient::new(server.url());

    let empty = client.analyze("", &[]).await;
    assert!(matches!(empty, Err(TestClientError::BadRequest(_))));

    let oversized = client.analyze(&"a".repeat(1001), &[]).await;
    assert!(matches!(oversized, Err(TestClientError::BadRequest(_))));
}

#[tokio::test]
async fn test_requests_after_shutdown_are_unavailable() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");
    let client = TestClient::new(server.url());

    server.orchestrator.shutdown();
    let result = client.analyze("hello", &[]).await;
    assert!(matches!(result, Err(TestClientError::UnexpectedStatus(503, _))));
}
