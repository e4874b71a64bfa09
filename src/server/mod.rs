pub mod error;
pub mod routes;
pub mod state;

pub use routes::{build_router, UPLOAD_PREFIX};
pub use state::AppState;

use std::sync::Arc;
use log::info;
use tokio::net::TcpListener;
use crate::core::config::Config;
use crate::core::error::Result;

/// Load the engine from `config` and serve HTTP on `config.bind_addr`
pub async fn serve(config: Config) -> Result<()> {
    let addr = config.bind_addr;
    let state = Arc::new(AppState::new(config)?);
    let app = build_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
