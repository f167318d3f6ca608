mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    {
        dioxus_logger::initialize_default();

        if let Err(err) = serve() {
            dioxus_logger::tracing::error!("Server stopped: {}", err);
            std::process::exit(1);
        }
    }
}

/// Runs the API and the server-rendered app on the configured address.
///
/// The listener is bound manually so `IP`, `PORT` and `BASE_PATH` from the environment
/// apply outside the `dx` development server too.
#[cfg(feature = "server")]
#[tokio::main]
async fn serve() -> Result<(), server::error::AppError> {
    use dioxus_logger::tracing;

    use crate::server::{config::Config, startup, state::AppState};

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::ensure_file_storage(&config)?;
    let db = startup::connect_to_database(&config).await?;
    startup::seed_admin(&db, &config).await?;

    let server_routes =
        server::router::router().with_state(AppState::new(db, config.user_header.clone()));
    let router = dioxus::server::router(App).merge(server_routes);
    let router = startup::mount(router, &config);

    let listener = tokio::net::TcpListener::bind((config.ip, config.port)).await?;
    tracing::info!(
        "Listening on {}:{} (base path '{}')",
        config.ip,
        config.port,
        config.base_path
    );

    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}
