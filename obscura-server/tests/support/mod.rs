//! Shared fixtures for the endpoint test suites.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{Value, json};

use obscura_core::{
    CatalogStore, MailError, MailTransport, OutboundEmail,
};
use obscura_server::infra::config::{
    CatalogConfig, Config, ConfigMetadata, CorsConfig, ServerConfig,
};
use obscura_server::{AppState, create_app};

/// Transport that records every message instead of sending it.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub sent: Arc<Mutex<Vec<OutboundEmail>>>,
}

impl RecordingMailer {
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl MailTransport for RecordingMailer {
    async fn send(&self, mail: &OutboundEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(mail.clone());
        Ok(())
    }
}

/// Transport that always fails, standing in for a refused relay.
pub struct FailingMailer;

#[async_trait]
impl MailTransport for FailingMailer {
    async fn send(&self, _mail: &OutboundEmail) -> Result<(), MailError> {
        Err(MailError::Transport("SMTP connection refused".to_string()))
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        catalog: CatalogConfig { path: None },
        mail: None,
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
        studio_name: "Obscura Studio".to_string(),
        metadata: ConfigMetadata::default(),
    }
}

fn photos_json(slug: &str, count: usize) -> Vec<Value> {
    (1..=count)
        .map(|index| {
            json!({
                "id": format!("{slug}-{index:02}"),
                "src": format!("/images/portfolio/{slug}/{index:02}.jpg"),
                "alt": format!("{slug} frame {index}"),
                "caption": format!("Frame {index}")
            })
        })
        .collect()
}

pub fn item_json(
    id: i64,
    category: &str,
    slug: &str,
    title: &str,
    tags: &[&str],
    photo_count: usize,
    rating: u8,
) -> Value {
    json!({
        "id": id,
        "title": title,
        "category": category,
        "slug": slug,
        "thumbnail": format!("/images/portfolio/{slug}/01.jpg"),
        "description": format!("Notes for {title}"),
        "location": "Lake Como",
        "date": "2025-09-14",
        "client": format!("Client {id}"),
        "duration": "Full day",
        "services": ["Coverage"],
        "photos": photos_json(slug, photo_count),
        "testimonial": {
            "text": "Wonderful to work with.",
            "author": format!("Client {id}"),
            "rating": rating
        },
        "tags": tags
    })
}

/// Two wedding items plus one portrait sharing the `indoor` tag with the
/// second wedding; every gallery holds the expected twelve photos.
pub fn sample_catalog() -> Value {
    json!({
        "categories": [
            {"id": "wedding", "name": "Wedding", "description": "Wedding coverage"},
            {"id": "portrait", "name": "Portrait", "description": "Portrait sessions"}
        ],
        "portfolioItems": [
            item_json(1, "wedding", "coastal-vows", "Coastal Vows", &["outdoor", "golden hour"], 12, 5),
            item_json(2, "wedding", "winter-chapel", "Winter Chapel", &["indoor"], 12, 4),
            item_json(3, "portrait", "studio-profiles", "Studio Profiles", &["indoor", "studio"], 12, 5)
        ],
        "metadata": {
            "totalItems": 3,
            "totalPhotos": 36,
            "lastUpdated": "2025-11-18",
            "version": "1.4.0"
        }
    })
}

pub fn build_state(
    catalog: &Value,
    mailer: Option<Arc<dyn MailTransport>>,
) -> AppState {
    let catalog = CatalogStore::from_json(&catalog.to_string())
        .expect("test catalog must parse");
    AppState::new(Arc::new(catalog), mailer, Arc::new(test_config()))
}

pub fn test_server(
    catalog: &Value,
    mailer: Option<Arc<dyn MailTransport>>,
) -> TestServer {
    TestServer::new(create_app(build_state(catalog, mailer)))
        .expect("test server must start")
}

pub fn sample_inquiry() -> Value {
    json!({
        "name": "Maya Lindqvist",
        "email": "maya@example.com",
        "phone": "+46 70 123 45 67",
        "eventType": "wedding",
        "date": "2026-06-20",
        "message": "We are planning a lakeside ceremony for sixty guests."
    })
}
