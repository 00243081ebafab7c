//! REST implementation of DataProvider
//!
//! Talks to the product/match/order API:
//!
//! ```text
//! GET    {base}/{resource}?page=..&limit=..&sortBy=..   list
//! GET    {base}/{resource}/filter-options               filter vocabulary
//! PUT    {base}/{resource}/{id}                         partial update
//! DELETE {base}/{resource}/{id}                         delete
//! ```

use crate::config::ApiConfig;
use crate::core::error::{ConfigError, MatchmakerError, ProviderError};
use crate::core::query::{FilterOptions, ListQuery, ListResponse};
use crate::core::service::DataProvider;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP data provider for one resource (e.g. "products")
#[derive(Clone, Debug)]
pub struct RestDataProvider<T> {
    client: Client,
    base_url: Url,
    resource: String,
    _item: PhantomData<fn() -> T>,
}

impl<T> RestDataProvider<T> {
    /// Create a provider with the default timeout
    pub fn new(base_url: &str, resource: &str) -> Result<Self> {
        Self::with_timeout(base_url, resource, DEFAULT_TIMEOUT)
    }

    /// Create a provider for `resource` from the API section of the config
    pub fn from_config(api: &ApiConfig, resource: &str) -> Result<Self> {
        Self::with_timeout(&api.base_url, resource, api.timeout())
    }

    /// Create a provider with an explicit request timeout
    pub fn with_timeout(base_url: &str, resource: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            MatchmakerError::from(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                value: base_url.to_string(),
                message: e.to_string(),
            })
        })?;
        if base_url.cannot_be_a_base() {
            return Err(MatchmakerError::from(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                value: base_url.to_string(),
                message: "URL cannot be used as a base".to_string(),
            })
            .into());
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MatchmakerError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            resource: resource.to_string(),
            _item: PhantomData,
        })
    }

    /// URL of `{base}/{resource}/{segments...}`, with each segment escaped
    pub fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push(&self.resource).extend(segments);
        }
        url
    }
}

fn transport_error(e: reqwest::Error) -> anyhow::Error {
    let err = if e.is_timeout() {
        ProviderError::Timeout {
            message: e.to_string(),
        }
    } else if e.is_decode() {
        ProviderError::Decode {
            message: e.to_string(),
        }
    } else {
        ProviderError::Transport {
            message: e.to_string(),
        }
    };
    MatchmakerError::from(err).into()
}

impl<T> RestDataProvider<T> {
    /// Map a non-success response to a typed error
    async fn check(&self, response: Response, id: Option<&str>) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let err = match (status, id) {
            (StatusCode::NOT_FOUND, Some(id)) => ProviderError::NotFound {
                resource: self.resource.clone(),
                id: id.to_string(),
            },
            _ => ProviderError::Http {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            },
        };
        tracing::warn!(resource = %self.resource, status = status.as_u16(), "provider request failed");
        Err(MatchmakerError::from(err).into())
    }

    async fn decode<R: DeserializeOwned>(response: Response) -> Result<R> {
        response.json::<R>().await.map_err(|e| {
            MatchmakerError::from(ProviderError::Decode {
                message: e.to_string(),
            })
            .into()
        })
    }
}

#[async_trait]
impl<T> DataProvider<T> for RestDataProvider<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn list(&self, query: &ListQuery) -> Result<ListResponse<T>> {
        let response = self
            .client
            .get(self.url(&[]))
            .query(&query.to_pairs())
            .send()
            .await
            .map_err(transport_error)?;
        let response = self.check(response, None).await?;
        Self::decode(response).await
    }

    async fn filter_options(&self) -> Result<FilterOptions> {
        let response = self
            .client
            .get(self.url(&["filter-options"]))
            .send()
            .await
            .map_err(transport_error)?;
        let response = self.check(response, None).await?;
        Self::decode(response).await
    }

    async fn update(&self, id: &str, patch: Value) -> Result<T> {
        let response = self
            .client
            .put(self.url(&[id]))
            .json(&patch)
            .send()
            .await
            .map_err(transport_error)?;
        let response = self.check(response, Some(id)).await?;
        Self::decode(response).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&[id]))
            .send()
            .await
            .map_err(transport_error)?;
        self.check(response, Some(id)).await?;
        Ok(())
    }
}
