use error_stack::{Report, ResultExt};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

use crate::config;

mod error;
pub use error::*;

pub type PoolConnection = sqlx::pool::PoolConnection<sqlx::Postgres>;
pub type Connection = sqlx::PgConnection;

#[derive(Clone)]
pub struct Pool {
  pool: sqlx::PgPool,
}

impl Pool {
  /// Connects to the database and performs an immediate round-trip
  /// check. Any failure here is fatal for the caller; the pool is not
  /// usable without a reachable server.
  pub async fn new(cfg: &config::Database) -> Result<Self> {
    let pool = Self {
      pool: PgPoolOptions::new().connect_lazy_with(Self::connect_options(cfg)),
    };
    pool.wait_until_healthy().await?;

    Ok(pool)
  }

  /// Builds a pool from credentials without the startup connectivity
  /// check. Acquiring a connection from it fails fast until a real
  /// server is reachable.
  pub fn build_for_tests(cfg: &config::Database) -> Self {
    Self {
      pool: PgPoolOptions::new().connect_lazy_with(Self::connect_options(cfg)),
    }
  }

  // TLS is fixed off for every environment.
  fn connect_options(cfg: &config::Database) -> PgConnectOptions {
    PgConnectOptions::new()
      .host(&cfg.host)
      .username(&cfg.user)
      .password(&cfg.password)
      .database(&cfg.name)
      .ssl_mode(PgSslMode::Disable)
  }
}

impl std::fmt::Debug for Pool {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    self.pool.fmt(f)
  }
}

impl Pool {
  #[inline(always)]
  pub fn connections(&self) -> u32 {
    self.pool.size()
  }

  #[inline(always)]
  pub fn is_healthy(&self) -> bool {
    self.connections() > 0
  }

  #[tracing::instrument(name = "db.connect", skip(self))]
  pub async fn get(&self) -> Result<PoolConnection> {
    if let Some(inner) = self.pool.try_acquire() {
      Ok(inner)
    } else if !self.is_healthy() {
      Err(Error::UnhealthyPool.into())
    } else {
      let result = self.pool.acquire().await;
      result.map_err(|e| Report::new(Error::Internal(e)))
    }
  }

  #[tracing::instrument(skip(self))]
  pub async fn wait_until_healthy(&self) -> Result<()> {
    match self.pool.acquire().await {
      Ok(..) => Ok(()),
      Err(e) if !self.is_healthy() => Err(e).change_context(Error::UnhealthyPool),
      Err(err) => Err(Report::new(Error::Internal(err))),
    }
  }
}
