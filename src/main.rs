mod chat;
mod model;
mod store;
mod web;

use actix_cors::Cors;
use actix_web::{web::Data, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::env;

use model::CompletionProvider;
use store::StatusStore;
use web::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Gugi backend");

    let mongo_url = match env::var("MONGO_URL") {
        Ok(url) => url,
        Err(_) => {
            error!("MONGO_URL is not set");
            std::process::exit(1);
        }
    };
    let db_name = match env::var("DB_NAME") {
        Ok(name) => name,
        Err(_) => {
            error!("DB_NAME is not set");
            std::process::exit(1);
        }
    };

    // Initialize the status store (connection to MongoDB)
    let store = match StatusStore::connect(&mongo_url, &db_name).await {
        Ok(store) => {
            info!("Status store initialized for database: {}", db_name);
            Data::new(store)
        }
        Err(e) => {
            error!("Failed to initialize status store: {}", e);
            std::process::exit(1);
        }
    };

    // Resolve the completion provider once at startup; a missing credential
    // degrades the chat endpoint to its echo fallback instead of failing.
    let provider = Data::new(CompletionProvider::from_env());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8080);

    // Start web server
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(store.clone())
            .app_data(provider.clone())
            .configure(routes::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
