use actix_files::Files;
use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use text_splitter_api::app_state::AppState;
use text_splitter_api::endpoints::split::split_text;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let state = web::Data::new(AppState::from_env());
    info!(
        "Starting text splitter on {}:{} (default max length {})",
        host, port, state.default_max_length
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(web::scope("/api").service(split_text))
            // serve the static frontend
            .service(Files::new("/", "./static").index_file("index.html"))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
