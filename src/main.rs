use std::env;
use std::time::Duration;

use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_flash_messages::storage::CookieMessageStore;
use config::Config;
use dotenvy::dotenv;
use tera::Tera;

use inspire_talks::models::config::ServerConfig;
use inspire_talks::relay::Web3FormsRelay;
use inspire_talks::repository::CatalogRepository;
use inspire_talks::routes::configure;

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?
        .try_deserialize()
}

fn signing_key(secret: &str) -> Key {
    match Key::try_from(secret.as_bytes()) {
        Ok(key) => key,
        Err(_) => {
            log::warn!("Cookie secret missing or shorter than 64 bytes, using a random key");
            Key::generate()
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server_config = match load_config() {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let catalog = match &server_config.catalog_path {
        Some(path) => CatalogRepository::from_path(path),
        None => CatalogRepository::embedded(),
    };
    let repo = match catalog {
        Ok(repo) => repo,
        Err(e) => {
            log::error!("Failed to load catalog: {e}");
            std::process::exit(1);
        }
    };

    let tera = match Tera::new(&format!("{}/**/*", server_config.templates_dir)) {
        Ok(tera) => tera,
        Err(e) => {
            log::error!("Failed to parse templates: {e}");
            std::process::exit(1);
        }
    };

    let relay = match Web3FormsRelay::new(
        server_config.relay.endpoint.clone(),
        Duration::from_secs(server_config.relay.timeout_secs),
    ) {
        Ok(relay) => {
            log::info!("Relaying form submissions to {}", relay.endpoint());
            relay
        }
        Err(e) => {
            log::error!("Failed to build relay client: {e}");
            std::process::exit(1);
        }
    };

    let message_store = CookieMessageStore::builder(signing_key(&server_config.secret)).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let repo = web::Data::new(repo);
    let tera = web::Data::new(tera);
    let relay = web::Data::new(relay);
    let access_keys = web::Data::new(server_config.relay.access_keys.clone());
    let static_dir = server_config.static_dir.clone();

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Starting server on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(Logger::default())
            .service(Files::new("/assets", &static_dir))
            .app_data(repo.clone())
            .app_data(tera.clone())
            .app_data(relay.clone())
            .app_data(access_keys.clone())
            .configure(configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
