//! API Integration Tests
//!
//! Every test spawns its own server on a local port with a fresh in-memory
//! store; classifier tests also spawn a stub sentiment API. No external
//! services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use integration_tests::{
    assert_json, assert_status, seed_match, CancelResult, CommentList, CommentRequest,
    CommentView, ErrorEnvelope, MatchDetail, MatchSummary, Readiness, SentimentStub, StubReply,
    TestServer, VoteResult,
};
use reqwest::header::SET_COOKIE;
use reqwest::StatusCode;
use tracker_core::{MatchTeamRepository, Sentiment, SentimentClassifier, Slot};

/// Classifier answering one label for every text
struct ScriptedClassifier(Sentiment);

#[async_trait]
impl SentimentClassifier for ScriptedClassifier {
    async fn classify(&self, _text: &str) -> Sentiment {
        self.0
    }
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.voter().get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.voter().get("/health/ready").await.unwrap();
    let ready: Readiness = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(ready.status, "ready");
    assert_eq!(ready.backend, "memory");
}

// ============================================================================
// Session Tests
// ============================================================================

#[tokio::test]
async fn test_session_cookie_issued_once() {
    let server = TestServer::start().await.unwrap();
    let voter = server.voter();

    let first = voter.get("/api/matches").await.unwrap();
    let cookie = first
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .expect("session cookie");
    assert!(cookie.starts_with("sessionid="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));

    let second = voter.get("/api/matches").await.unwrap();
    assert!(second.headers().get(SET_COOKIE).is_none());
}

// ============================================================================
// Match Tests
// ============================================================================

#[tokio::test]
async fn test_list_matches() {
    let server = TestServer::start().await.unwrap();
    let (m, _) = seed_match(&server.store, (0, 0));

    let response = server.voter().get("/api/matches").await.unwrap();
    let matches: Vec<MatchSummary> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, m.id.into_inner());
    assert_eq!(matches[0].event_name, "IEM Katowice Grand Final");
}

#[tokio::test]
async fn test_match_detail() {
    let server = TestServer::start().await.unwrap();
    let (m, _) = seed_match(&server.store, (3, 1));

    let response = server
        .voter()
        .get(&format!("/api/matches/{}", m.id))
        .await
        .unwrap();
    let detail: MatchDetail = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(detail.match_info.id, m.id.into_inner());
    let team1 = detail.team1.unwrap();
    assert_eq!(team1.team_name, "NaVi");
    assert_eq!(team1.votes, 3);
    assert_eq!(team1.percent, 75.0);
    assert_eq!(detail.team2.unwrap().percent, 25.0);
    assert_eq!(detail.total_votes, 4);
    assert!(!detail.has_voted);
    assert!(detail.comments.is_empty());
}

#[tokio::test]
async fn test_match_not_found_and_malformed_id() {
    let server = TestServer::start().await.unwrap();
    let voter = server.voter();

    let response = voter.get("/api/matches/999").await.unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_MATCH");

    let response = voter.get("/api/matches/not-a-number").await.unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_vote_then_cancel_flow() {
    let server = TestServer::start().await.unwrap();
    let (m, _) = seed_match(&server.store, (3, 1));
    let voter = server.voter();

    let response = voter
        .post(&format!("/api/matches/{}/vote/2", m.id))
        .await
        .unwrap();
    let vote: VoteResult = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(vote.status, "voted");
    assert_eq!(vote.voted_position, 2);
    assert_eq!(vote.team_name, "FaZe");
    assert_eq!(vote.tally.team2_votes, 2);
    assert_eq!(vote.tally.total_votes, 5);
    assert_eq!(vote.tally.team1_percent, 60.0);
    assert_eq!(vote.tally.team2_percent, 40.0);

    let response = voter.get(&format!("/api/matches/{}", m.id)).await.unwrap();
    let detail: MatchDetail = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(detail.has_voted);
    assert_eq!(detail.voted_position, Some(2));

    let response = voter
        .post(&format!("/api/matches/{}/cancel-vote", m.id))
        .await
        .unwrap();
    let cancel: CancelResult = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(cancel.status, "cancelled");
    assert_eq!(cancel.tally.team1_votes, 3);
    assert_eq!(cancel.tally.team2_votes, 1);
    assert_eq!(cancel.tally.team1_percent, 75.0);
    assert_eq!(cancel.tally.team2_percent, 25.0);
}

#[tokio::test]
async fn test_second_vote_is_conflict() {
    let server = TestServer::start().await.unwrap();
    let (m, _) = seed_match(&server.store, (0, 0));
    let voter = server.voter();

    let response = voter
        .post(&format!("/api/matches/{}/vote/1", m.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = voter
        .post(&format!("/api/matches/{}/vote/2", m.id))
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "ALREADY_VOTED");

    let response = voter.get(&format!("/api/matches/{}", m.id)).await.unwrap();
    let detail: MatchDetail = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.team1.unwrap().votes, 1);
    assert_eq!(detail.team2.unwrap().votes, 0);
}

#[tokio::test]
async fn test_cancel_without_vote() {
    let server = TestServer::start().await.unwrap();
    let (m, _) = seed_match(&server.store, (2, 2));

    let response = server
        .voter()
        .post(&format!("/api/matches/{}/cancel-vote", m.id))
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "NO_ACTIVE_VOTE");
}

#[tokio::test]
async fn test_vote_on_unknown_slot() {
    let server = TestServer::start().await.unwrap();
    let (m, _) = seed_match(&server.store, (0, 0));
    let voter = server.voter();

    let response = voter
        .post(&format!("/api/matches/{}/vote/3", m.id))
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_SLOT");

    let response = voter
        .post(&format!("/api/matches/{}/vote/first", m.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = voter.post("/api/matches/999/vote/1").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_sessions_vote_independently() {
    let server = TestServer::start().await.unwrap();
    let (m, _) = seed_match(&server.store, (0, 0));
    let path = format!("/api/matches/{}/vote/1", m.id);

    let voters: Vec<_> = (0..10).map(|_| server.voter()).collect();
    let casts = voters.iter().map(|voter| voter.post(&path));
    for response in futures::future::join_all(casts).await {
        assert_status(response.unwrap(), StatusCode::OK).await.unwrap();
    }

    let response = server.voter().get(&format!("/api/matches/{}", m.id)).await.unwrap();
    let detail: MatchDetail = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.team1.unwrap().votes, 10);
    assert_eq!(detail.total_votes, 10);
}

#[tokio::test]
async fn test_cancel_after_slot_removed_is_stale() {
    let server = TestServer::start().await.unwrap();
    let (m, _) = seed_match(&server.store, (4, 0));
    let voter = server.voter();

    let response = voter
        .post(&format!("/api/matches/{}/vote/1", m.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    MatchTeamRepository::remove(server.store.as_ref(), m.id, Slot::One)
        .await
        .unwrap();

    let response = voter.get(&format!("/api/matches/{}", m.id)).await.unwrap();
    let detail: MatchDetail = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(detail.has_voted);
    assert_eq!(detail.voted_position, None);

    let response = voter
        .post(&format!("/api/matches/{}/cancel-vote", m.id))
        .await
        .unwrap();
    let cancel: CancelResult = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(cancel.status, "stale");

    let response = voter.get(&format!("/api/matches/{}", m.id)).await.unwrap();
    let detail: MatchDetail = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!detail.has_voted);
    assert_eq!(cancel.tally.total_votes, 0);
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_create_comment_json_and_form() {
    let classifier = Arc::new(ScriptedClassifier(Sentiment::Positive));
    let server = TestServer::start_with_classifier(classifier).await.unwrap();
    let (m, _) = seed_match(&server.store, (0, 0));
    let voter = server.voter();
    let path = format!("/api/matches/{}/comments", m.id);

    let response = voter
        .post_json(&path, &CommentRequest::new("  anna ", " what a clutch "))
        .await
        .unwrap();
    let created: CommentView = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.match_id, m.id.into_inner());
    assert_eq!(created.username, "anna");
    assert_eq!(created.text, "what a clutch");
    assert_eq!(created.sentiment.as_deref(), Some("POSITIVE"));
    assert_eq!(created.sentiment_emoji, "😊");
    assert_eq!(created.sentiment_class, "sentiment-positive");
    assert_eq!(created.created_at.len(), "DD/MM/YYYY HH:MM".len());

    let response = voter
        .post_form(&path, &CommentRequest::new("ben", "gg"))
        .await
        .unwrap();
    let created: CommentView = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.username, "ben");
}

#[tokio::test]
async fn test_create_comment_validation() {
    let server = TestServer::start().await.unwrap();
    let (m, _) = seed_match(&server.store, (0, 0));
    let voter = server.voter();
    let path = format!("/api/matches/{}/comments", m.id);

    let response = voter
        .post_json(&path, &CommentRequest::new("   ", "\n\t "))
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "VALIDATION_ERROR");
    assert_eq!(err.errors["username"], ["Username is required."]);
    assert_eq!(err.errors["text"], ["Comment cannot be empty."]);

    let response = voter
        .post_json(&path, &serde_json::json!({}))
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(err.errors.contains_key("username"));

    let response = voter.get(&path).await.unwrap();
    let list: CommentList = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(list.comments.is_empty());
}

#[tokio::test]
async fn test_create_comment_malformed_body() {
    let server = TestServer::start().await.unwrap();
    let (m, _) = seed_match(&server.store, (0, 0));
    let voter = server.voter();
    let path = format!("/api/matches/{}/comments", m.id);

    let response = voter
        .post_raw(&path, "application/json", "{\"username\": ")
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "INVALID_BODY");

    let response = voter.post_raw(&path, "text/plain", "hello").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_comment_on_unknown_match() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .voter()
        .post_json("/api/matches/404/comments", &CommentRequest::new("anna", "hi"))
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_MATCH");
}

#[tokio::test]
async fn test_comments_newest_first() {
    let server = TestServer::start().await.unwrap();
    let (m, _) = seed_match(&server.store, (0, 0));
    let voter = server.voter();
    let path = format!("/api/matches/{}/comments", m.id);

    for text in ["first", "second", "third"] {
        let response = voter
            .post_json(&path, &CommentRequest::new("anna", text))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = voter.get(&path).await.unwrap();
    let list: CommentList = assert_json(response, StatusCode::OK).await.unwrap();
    let texts: Vec<&str> = list.comments.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["third", "second", "first"]);

    // Unclassified comments render as neutral
    assert!(list.comments[0].sentiment.is_none());
    assert_eq!(list.comments[0].sentiment_class, "sentiment-neutral");
}

#[tokio::test]
async fn test_edit_and_delete_comment() {
    let classifier = Arc::new(ScriptedClassifier(Sentiment::Negative));
    let server = TestServer::start_with_classifier(classifier).await.unwrap();
    let (m, _) = seed_match(&server.store, (0, 0));
    let voter = server.voter();

    let response = voter
        .post_json(
            &format!("/api/matches/{}/comments", m.id),
            &CommentRequest::new("anna", "awful eco round"),
        )
        .await
        .unwrap();
    let created: CommentView = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = voter
        .put_json(
            &format!("/api/comments/{}/edit", created.id),
            &CommentRequest::new("anna", "never mind, great comeback"),
        )
        .await
        .unwrap();
    let edited: CommentView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(edited.text, "never mind, great comeback");
    assert_eq!(edited.sentiment.as_deref(), Some("NEGATIVE"));

    let response = voter
        .post_form(
            &format!("/api/comments/{}/edit", created.id),
            &CommentRequest::new("anna", " "),
        )
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(err.errors.contains_key("text"));

    let delete_path = format!("/api/comments/{}/delete", created.id);
    let response = voter.delete(&delete_path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    let response = voter.post(&delete_path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = voter
        .get(&format!("/api/comments/{}", created.id))
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_COMMENT");
}

// ============================================================================
// Sentiment API Tests
// ============================================================================

async fn comment_sentiment(reply: StubReply) -> Option<String> {
    let stub = SentimentStub::start(reply).await.unwrap();
    let server = TestServer::start_with_classifier(stub.classifier().unwrap())
        .await
        .unwrap();
    let (m, _) = seed_match(&server.store, (0, 0));

    let response = server
        .voter()
        .post_json(
            &format!("/api/matches/{}/comments", m.id),
            &CommentRequest::new("anna", "what a series"),
        )
        .await
        .unwrap();
    let created: CommentView = assert_json(response, StatusCode::CREATED).await.unwrap();
    created.sentiment
}

#[tokio::test]
async fn test_sentiment_from_star_labels() {
    assert_eq!(
        comment_sentiment(StubReply::Label("5 stars")).await.as_deref(),
        Some("POSITIVE")
    );
    assert_eq!(
        comment_sentiment(StubReply::Label("1 star")).await.as_deref(),
        Some("NEGATIVE")
    );
    assert_eq!(
        comment_sentiment(StubReply::Label("3 stars")).await.as_deref(),
        Some("NEUTRAL")
    );
}

#[tokio::test]
async fn test_sentiment_api_failures_fall_back_to_neutral() {
    assert_eq!(
        comment_sentiment(StubReply::Status(500)).await.as_deref(),
        Some("NEUTRAL")
    );
    assert_eq!(
        comment_sentiment(StubReply::Status(503)).await.as_deref(),
        Some("NEUTRAL")
    );
    assert_eq!(
        comment_sentiment(StubReply::Malformed).await.as_deref(),
        Some("NEUTRAL")
    );
}

#[tokio::test]
async fn test_sentiment_api_timeout_falls_back_to_neutral() {
    assert_eq!(
        comment_sentiment(StubReply::Delay(Duration::from_secs(3)))
            .await
            .as_deref(),
        Some("NEUTRAL")
    );
}
