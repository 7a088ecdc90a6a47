use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{http, web, App, HttpServer};
use sqlx::PgPool;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
mod handlers;
pub mod league;
mod middleware;
pub mod models;
mod routes;
pub mod scoring;
pub mod sync;
pub mod telemetry;

use crate::config::settings::{AdminSettings, LeagueSettings};
use crate::routes::init_routes;
use crate::sync::NflDataProvider;

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    admin_settings: AdminSettings,
    league_settings: LeagueSettings,
    provider: Arc<dyn NflDataProvider>,
) -> Result<Server, std::io::Error> {
    // Wrap shared state in web::Data (an Arc under the hood)
    let db_pool_data = web::Data::new(db_pool.clone());
    let admin_settings = web::Data::new(admin_settings);
    let league_settings = web::Data::new(league_settings);
    let provider_data = web::Data::new(provider);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:5173")
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(db_pool_data.clone())
            .app_data(admin_settings.clone())
            .app_data(league_settings.clone())
            .app_data(provider_data.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
