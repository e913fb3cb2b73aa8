use actix_web::{web, App, HttpServer};

pub mod completion;
pub mod config;
pub mod document;
pub mod gate;
pub mod handlers;
pub mod models;
pub mod prompt;
pub mod sanitize;
pub mod state;

pub use crate::config::Config;
pub use crate::state::AppState;

pub async fn run() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let port = config.port;
    let app_state = web::Data::new(AppState::new(&config));

    log::info!("Starting server at http://0.0.0.0:{port}");

    HttpServer::new(move || {
        App::new().app_data(app_state.clone()).service(
            web::resource("/")
                .route(web::get().to(handlers::index))
                .route(web::post().to(handlers::generate)),
        )
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
