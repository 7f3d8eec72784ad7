use std::{future::Future, path::PathBuf};

use reqwest::{Client, Response, StatusCode, Url};
use thiserror::Error;

use crate::{
    config::ApiConfig,
    core::{model::Orphanage, payload::MultipartPayload},
};

const ORPHANAGES_PATH: &str = "orphanages";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base url `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("failed to read image {}: {source}", path.display())]
    ReadImage {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Remote orphanage directory.
pub trait OrphanageApi {
    /// `GET orphanages`
    fn list_orphanages(&self) -> impl Future<Output = Result<Vec<Orphanage>, ApiError>> + Send;
    /// `POST orphanages`; the response body is not inspected.
    fn create_orphanage(
        &self,
        payload: MultipartPayload,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        // Without a trailing slash `join` would replace the last path segment.
        let mut raw = config.base_url.clone();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url = Url::parse(&raw).map_err(|e| ApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn orphanages_url(&self) -> Result<Url, ApiError> {
        self.base_url
            .join(ORPHANAGES_PATH)
            .map_err(|e| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

async fn ensure_success(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

impl OrphanageApi for HttpApi {
    async fn list_orphanages(&self) -> Result<Vec<Orphanage>, ApiError> {
        let url = self.orphanages_url()?;
        tracing::debug!(%url, "fetching orphanages");
        let resp = ensure_success(self.client.get(url).send().await?).await?;
        Ok(resp.json().await?)
    }

    async fn create_orphanage(&self, payload: MultipartPayload) -> Result<(), ApiError> {
        let url = self.orphanages_url()?;
        tracing::debug!(%url, parts = payload.parts().len(), "creating orphanage");
        let form = payload.into_form().await?;
        let resp = ensure_success(self.client.post(url).multipart(form).send().await?).await?;
        resp.bytes().await?;
        Ok(())
    }
}
