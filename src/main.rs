mod api;
mod appointments;
mod auth;
mod dashboard;
mod forms;
mod routes;
mod search;
mod state;
mod templates;
mod validation;

use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};
use std::env;

use crate::{api::ApiClient, state::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let state = AppState {
        api: ApiClient::from_env(),
    };

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000);

    let address = format!("0.0.0.0:{port}");
    log::info!("Starting AliceTant web on http://{address}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .configure(routes::public::configure)
            .configure(routes::customer::configure)
            .configure(routes::provider::configure)
            .configure(routes::dashboard::configure)
    })
    .bind(address)?
    .run()
    .await
}
