//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment,
    RateLimitConfig, SentimentConfig, ServerConfig, SessionConfig, DEFAULT_SENTIMENT_API_URL,
};
