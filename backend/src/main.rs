mod config;
mod routes;
mod upstream;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use config::ServerConfig;
use routes::configure_routes;
use upstream::poster_service::PosterService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::other(e)
    })?;

    let poster_service = PosterService::new(&config).map_err(|e| {
        log::error!("Failed to build the poster service client: {}", e);
        std::io::Error::other(e)
    })?;

    log::info!("Serving frontend from {}", config.frontend_dir);
    log::info!("Forwarding poster requests to {}", config.upstream_url);

    let bind_address = config.bind_address();
    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        let frontend_dir = config.frontend_dir.clone();
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(web::Data::new(poster_service.clone()))
            .app_data(web::Data::new(config.clone()))
            .configure(|cfg| configure_routes(cfg, frontend_dir))
    })
    .bind(&bind_address)?
    .run()
    .await
}
