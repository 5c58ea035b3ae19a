use actix_cors::Cors;
use actix_web::{
    self, App, HttpServer,
    middleware::{Logger, from_fn},
    web,
};
use std::sync::LazyLock;

use crate::{
    configs::AppServices,
    middlewares::authentication,
    modules::websocket::handler::websocket_handler,
};

mod api;
mod configs;
mod constants;
mod middlewares;
mod modules;
mod store;
#[cfg(test)]
mod test;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/health")]
async fn health_check() -> &'static str {
    "Server is running"
}

/// Shared between `main` and the handler tests so both see the same routing.
fn configure_app(cfg: &mut web::ServiceConfig, services: &AppServices) {
    cfg.app_data(web::Data::from(services.store.clone()))
        .app_data(web::Data::new(services.auth.clone()))
        .app_data(web::Data::new(services.user.clone()))
        .app_data(web::Data::new(services.chat.clone()))
        .app_data(web::Data::new(services.notification.clone()))
        .app_data(web::Data::new(services.friend.clone()))
        .app_data(web::Data::new(services.file_upload.clone()))
        .service(health_check)
        .configure(modules::navigation::route::configure)
        .service(
            web::resource("/ws")
                .wrap(from_fn(authentication))
                .route(web::get().to(websocket_handler)),
        )
        .service(
            web::scope("/api")
                .configure(modules::auth::route::public_api_configure)
                .configure(modules::user::route::public_api_configure)
                .service(
                    web::scope("")
                        .wrap(from_fn(authentication))
                        .configure(modules::chat::route::configure)
                        .configure(modules::notification::route::configure)
                        .configure(modules::friend::route::configure)
                        .configure(modules::file_upload::route::configure)
                        .configure(store::route::configure),
                ),
        );
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    LazyLock::force(&ENV);
    if let Err(e) = tracing::subscriber::set_global_default(tracing_subscriber::fmt().finish()) {
        log::warn!("Tracing subscriber already installed: {}", e);
    }

    let services = AppServices::connect()
        .map_err(|e| std::io::Error::other(format!("Users API client error: {}", e)))?;

    println!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&ENV.frontend_url)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .configure(|cfg| configure_app(cfg, &services))
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await
}
