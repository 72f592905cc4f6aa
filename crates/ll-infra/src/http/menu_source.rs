//! HTTP menu source
//!
//! One GET against the configured endpoint, expecting
//! `{"menu": [ ... ]}`. The endpoint serves the document with a
//! `text/plain` content type, so the body is read as text and decoded
//! without consulting the header. Wire entries are normalized during
//! decode: a numeric `price` becomes its text rendering, and absent
//! `description`/`image`/`category` fields become empty strings.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

use ll_core::menu::MenuItem;
use ll_core::ports::{MenuSourceError, MenuSourcePort};

pub struct HttpMenuSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpMenuSource {
    /// `timeout` bounds the whole request; `None` lets the request wait
    /// indefinitely, matching the historical behavior.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct MenuDocument {
    menu: Vec<MenuEntry>,
}

/// One entry as the endpoint serves it.
#[derive(Debug, Deserialize)]
struct MenuEntry {
    id: i32,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(deserialize_with = "price_as_text")]
    price: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    category: String,
}

/// Accept the price as either a JSON string or a JSON number; either way
/// the stored form is text so the display matches the source exactly.
fn price_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WirePrice {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match WirePrice::deserialize(deserializer)? {
        WirePrice::Text(text) => text,
        WirePrice::Number(number) => number.to_string(),
    })
}

impl From<MenuEntry> for MenuItem {
    fn from(entry: MenuEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title,
            description: entry.description,
            price: entry.price,
            image: entry.image,
            category: entry.category,
        }
    }
}

#[async_trait]
impl MenuSourcePort for HttpMenuSource {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, MenuSourceError> {
        debug!("Fetching menu from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| MenuSourceError::Network(e.to_string()))?
            .error_for_status()
            .map_err(|e| MenuSourceError::Network(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| MenuSourceError::Network(e.to_string()))?;

        let document: MenuDocument =
            serde_json::from_str(&body).map_err(|e| MenuSourceError::Decode(e.to_string()))?;

        debug!("Fetched {} menu entries", document.menu.len());
        Ok(document.menu.into_iter().map(MenuItem::from).collect())
    }
}
