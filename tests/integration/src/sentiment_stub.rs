//! Local stand-in for the hosted sentiment API

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tracker_common::SentimentConfig;
use tracker_service::HttpSentimentClassifier;

/// How the stub answers every request
#[derive(Debug, Clone)]
pub enum StubReply {
    /// 200 with this label scored highest
    Label(&'static str),
    /// Bare status code
    Status(u16),
    /// 200 with a body of the wrong shape
    Malformed,
    /// Sleep before answering with a label
    Delay(Duration),
}

/// Running stub server
pub struct SentimentStub {
    pub url: String,
}

impl SentimentStub {
    pub async fn start(reply: StubReply) -> Result<Self> {
        let router = Router::new()
            .route("/model", post(answer))
            .with_state(Arc::new(reply));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        Ok(Self {
            url: format!("http://{addr}/model"),
        })
    }

    /// Classifier pointed at this stub with a one second timeout
    pub fn classifier(&self) -> Result<Arc<HttpSentimentClassifier>> {
        let config = SentimentConfig {
            api_url: self.url.clone(),
            api_token: Some("hf_integration".to_string()),
            timeout_secs: 1,
            max_chars: 500,
        };
        let classifier = HttpSentimentClassifier::from_config(&config)?
            .ok_or_else(|| anyhow::anyhow!("classifier disabled"))?;
        Ok(Arc::new(classifier))
    }
}

async fn answer(State(reply): State<Arc<StubReply>>) -> axum::response::Response {
    match reply.as_ref() {
        StubReply::Label(label) => labels(label).into_response(),
        StubReply::Status(code) => StatusCode::from_u16(*code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        StubReply::Malformed => Json(json!({"error": "Model is loading"})).into_response(),
        StubReply::Delay(delay) => {
            tokio::time::sleep(*delay).await;
            labels("5 stars").into_response()
        }
    }
}

fn labels(top: &str) -> Json<serde_json::Value> {
    Json(json!([[
        {"label": top, "score": 0.71},
        {"label": "3 stars", "score": 0.19},
        {"label": "1 star", "score": 0.10}
    ]]))
}
