mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, router, service::storage::UploadStorage, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::configure_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let storage = UploadStorage::new(&config.upload_path);

    let app = router::app(&config, AppState::new(db, storage))?;

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!(
        "Listening on {}, serving uploads from {}",
        config.bind_address,
        config.upload_path.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
