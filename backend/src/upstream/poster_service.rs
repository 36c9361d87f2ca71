use crate::config::ServerConfig;
use reqwest::multipart::{Form, Part};
use shared::{GENERATE_ENDPOINT, GenerateResponse, IMAGE_FIELD};

#[derive(Debug, thiserror::Error)]
pub enum PosterServiceError {
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream answered {status} with an unreadable body: {source}")]
    Decode {
        status: u16,
        source: serde_json::Error,
    },
}

/// An image received from the browser, ready to be relayed.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Client for the external poster generator.
#[derive(Clone)]
pub struct PosterService {
    client: reqwest::Client,
    generate_url: String,
}

impl PosterService {
    pub fn new(config: &ServerConfig) -> Result<Self, PosterServiceError> {
        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(Self {
            client,
            generate_url: format!("{}{}", config.upstream_url, GENERATE_ENDPOINT),
        })
    }

    /// Forwards `image` and returns the upstream status with its decoded reply.
    pub async fn generate(
        &self,
        image: UploadedImage,
    ) -> Result<(u16, GenerateResponse), PosterServiceError> {
        let mut part = Part::bytes(image.bytes).file_name(image.file_name);
        if let Some(content_type) = image.content_type {
            part = part.mime_str(&content_type)?;
        }
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .client
            .post(&self.generate_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        let reply = serde_json::from_slice(&body)
            .map_err(|source| PosterServiceError::Decode { status, source })?;

        Ok((status, reply))
    }
}
