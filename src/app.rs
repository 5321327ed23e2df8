use error_stack::{Result, ResultExt};
use std::sync::Arc;
use thiserror::Error;

use crate::{config, database};

#[derive(Debug, Clone)]
pub struct App {
  pub config: Arc<config::Server>,
  pub db: database::Pool,
}

#[derive(Debug, Error)]
#[error("Failed to initialize App struct")]
pub struct AppError;

impl App {
  #[tracing::instrument(skip(cfg))]
  pub async fn new(cfg: config::Server) -> Result<Self, AppError> {
    let db = database::Pool::new(&cfg.db).await.change_context(AppError)?;

    let app = Self {
      config: Arc::new(cfg),
      db,
    };

    Ok(app)
  }
}

impl App {
  /// Checks out a connection from the shared pool.
  #[tracing::instrument(skip_all)]
  pub async fn conn(&self) -> Result<database::PoolConnection, database::Error> {
    Ok(self.db.get().await?)
  }
}
