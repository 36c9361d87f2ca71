use crate::config::ServerConfig;
use crate::upstream::poster_service::{PosterService, UploadedImage};
use actix_files::Files;
use actix_multipart::Multipart;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse, web};
use futures::{StreamExt, TryStreamExt};
use log::{error, info, warn};
use serde::Serialize;
use shared::{GENERATE_ENDPOINT, GenerateResponse, IMAGE_FIELD, ImageKind};
use uuid::Uuid;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn rejection(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: message.to_string(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    configure_api(cfg);
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(GENERATE_ENDPOINT).route(web::post().to(handle_generate)));
}

enum ImageUpload {
    Received(UploadedImage),
    TooLarge,
}

// Reads the first `image` file part, stopping once it exceeds `limit` bytes.
// A plain `image` form value without a filename does not count as a file.
async fn read_image_field(
    payload: &mut Multipart,
    limit: usize,
) -> Result<Option<ImageUpload>, Error> {
    while let Some(mut field) = payload.try_next().await? {
        let file_name = field
            .content_disposition()
            .and_then(|disposition| disposition.get_filename())
            .map(str::to_string);

        let file_name = match file_name {
            Some(file_name) if field.name() == Some(IMAGE_FIELD) => file_name,
            _ => {
                while let Some(chunk) = field.next().await {
                    chunk?;
                }
                continue;
            }
        };
        let content_type = field.content_type().map(|mime| mime.to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let data = chunk?;
            if bytes.len() + data.len() > limit {
                return Ok(Some(ImageUpload::TooLarge));
            }
            bytes.extend_from_slice(&data);
        }

        return Ok(Some(ImageUpload::Received(UploadedImage {
            file_name,
            content_type,
            bytes,
        })));
    }

    Ok(None)
}

async fn handle_generate(
    poster_service: web::Data<PosterService>,
    config: web::Data<ServerConfig>,
    mut payload: Multipart,
) -> Result<HttpResponse, Error> {
    let request_id = Uuid::new_v4();

    let image = match read_image_field(&mut payload, config.max_content_length).await? {
        Some(ImageUpload::Received(image)) => image,
        Some(ImageUpload::TooLarge) => {
            warn!("[{}] upload exceeds {} bytes", request_id, config.max_content_length);
            return Ok(rejection(StatusCode::PAYLOAD_TOO_LARGE, "File too large"));
        }
        None => return Ok(rejection(StatusCode::BAD_REQUEST, "No image uploaded")),
    };

    if image.file_name.is_empty() {
        return Ok(rejection(StatusCode::BAD_REQUEST, "No image selected"));
    }
    if ImageKind::from_file_name(&image.file_name).is_none() {
        info!("[{}] rejected file type of {}", request_id, image.file_name);
        return Ok(rejection(StatusCode::BAD_REQUEST, "File type not allowed"));
    }

    info!(
        "[{}] forwarding {} ({} bytes)",
        request_id,
        image.file_name,
        image.bytes.len()
    );

    match poster_service.generate(image).await {
        Ok((status, reply)) => {
            info!("[{}] poster service answered {}", request_id, status);
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            Ok(HttpResponse::build(status).json(reply))
        }
        Err(e) => {
            error!("[{}] poster generation failed: {}", request_id, e);
            Ok(HttpResponse::BadGateway().json(GenerateResponse::failed("Poster service unavailable")))
        }
    }
}
