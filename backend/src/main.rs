mod config;
mod error;
mod repository;
mod services;
mod validation;

use crate::config::Config;
use crate::repository::{storage, QuestionRepository};
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    storage::ensure_exists(&config.storage_path)
        .await
        .map_err(std::io::Error::other)?;

    // Built once so every worker shares the same file lock
    let repository = QuestionRepository::new(config.storage_path.clone());

    info!(
        "Server running at http://{}:{} (questions stored in {})",
        config.host,
        config.port,
        repository.path().display()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(services::configure(repository.clone()))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
