use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::api::{ApiError, EntityApi};
use crate::config::ApiConfig;
use crate::domain::Entity;

/// Error body returned by the API: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP implementation of [`EntityApi`] for one resource path.
pub struct RestClient<E> {
    client: Client,
    base_url: Url,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for RestClient<E> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            _entity: PhantomData,
        }
    }
}

/// Build the shared HTTP client with the configured timeouts.
pub fn build_http_client(config: &ApiConfig) -> Result<Client, ApiError> {
    Client::builder()
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .build()
        .map_err(|e| ApiError::transport(None, format!("failed to build HTTP client: {e}")))
}

impl<E: Entity> RestClient<E> {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = build_http_client(config)?;
        Self::with_client(client, &config.base_url)
    }

    /// Reuse an existing client (one connection pool for every resource).
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::transport(None, format!("invalid base url '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::transport(
                None,
                format!("base url '{base_url}' cannot hold a path"),
            ));
        }
        Ok(Self {
            client,
            base_url,
            _entity: PhantomData,
        })
    }

    fn url(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(E::RESOURCE);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }

    fn request(&self, method: Method, id: Option<&str>) -> RequestBuilder {
        let url = self.url(id);
        tracing::debug!(method = %method, url = %url, "API request");
        self.client.request(method, url)
    }

    /// Send and map non-success statuses onto [`ApiError`].
    async fn send(&self, builder: RequestBuilder, id: Option<&str>) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            let err = ApiError::from(e);
            tracing::warn!(resource = E::RESOURCE, error = %err, "API call failed");
            err
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Only a 404 on a record route means the record is gone; on the
        // collection route it means the base URL is wrong.
        let err = match (status, id) {
            (StatusCode::NOT_FOUND, Some(id)) => ApiError::NotFound {
                resource: E::LABEL,
                id: id.to_string(),
            },
            _ => {
                let message = error_message(response, status).await;
                ApiError::transport(Some(status.as_u16()), message)
            }
        };
        tracing::warn!(resource = E::RESOURCE, status = status.as_u16(), error = %err, "API call rejected");
        Err(err)
    }
}

async fn error_message(response: Response, status: StatusCode) -> String {
    let fallback = status
        .canonical_reason()
        .unwrap_or("unexpected status")
        .to_string();
    match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or(fallback),
        Err(_) => fallback,
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::transport(Some(status), format!("invalid response body: {e}")))
}

#[async_trait]
impl<E: Entity> EntityApi<E> for RestClient<E> {
    async fn list(&self) -> Result<Vec<E>, ApiError> {
        let response = self.send(self.request(Method::GET, None), None).await?;
        decode(response).await
    }

    async fn get(&self, id: &str) -> Result<E, ApiError> {
        let response = self
            .send(self.request(Method::GET, Some(id)), Some(id))
            .await?;
        decode(response).await
    }

    async fn create(&self, draft: &E::Draft) -> Result<E, ApiError> {
        let builder = self.request(Method::POST, None).json(draft);
        let response = self.send(builder, None).await?;
        decode(response).await
    }

    async fn update(&self, entity: &E) -> Result<E, ApiError> {
        let id = entity.id();
        let builder = self.request(Method::PUT, Some(id)).json(entity);
        let response = self.send(builder, Some(id)).await?;
        decode(response).await
    }

    async fn remove(&self, id: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, Some(id)), Some(id))
            .await?;
        Ok(())
    }
}
