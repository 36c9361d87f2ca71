use async_trait::async_trait;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{
    GENERATE_ENDPOINT, GenerateResponse, IMAGE_FIELD, ImageFile, PosterClient, PreviewError,
    TransportError,
};
use wasm_bindgen::JsValue;
use web_sys::FormData;

/// A file picked or dropped in the browser.
pub struct BrowserImage {
    file: GlooFile,
}

impl From<web_sys::File> for BrowserImage {
    fn from(file: web_sys::File) -> Self {
        Self {
            file: GlooFile::from(file),
        }
    }
}

#[async_trait(?Send)]
impl ImageFile for BrowserImage {
    fn name(&self) -> String {
        self.file.name()
    }

    fn media_type(&self) -> String {
        self.file.raw_mime_type()
    }

    fn size(&self) -> u64 {
        self.file.size()
    }

    async fn read_data_url(&self) -> Result<String, PreviewError> {
        gloo_file::futures::read_as_data_url(&self.file)
            .await
            .map_err(|e| PreviewError(e.to_string()))
    }
}

pub struct GlooPosterClient {
    endpoint: String,
}

impl Default for GlooPosterClient {
    fn default() -> Self {
        Self {
            endpoint: GENERATE_ENDPOINT.to_string(),
        }
    }
}

fn js_error(value: JsValue) -> TransportError {
    TransportError::Request(format!("{:?}", value))
}

#[async_trait(?Send)]
impl PosterClient for GlooPosterClient {
    type File = BrowserImage;

    async fn generate(&self, image: &BrowserImage) -> Result<GenerateResponse, TransportError> {
        let form_data = FormData::new().map_err(js_error)?;
        form_data
            .append_with_blob_and_filename(IMAGE_FIELD, image.file.as_ref(), &image.name())
            .map_err(js_error)?;

        let request = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        // Rejections arrive as JSON with a 4xx status, so the body is decoded either way.
        if !response.ok() {
            log::warn!("{} answered {}", self.endpoint, response.status());
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}
