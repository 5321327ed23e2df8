use serde::Deserialize;

/// Credentials for connecting to the Postgres database.
///
/// Every field is required; there are no fallback values. Connectivity
/// itself is only verified once the pool is built.
#[derive(Debug, Deserialize)]
pub struct Database {
  /// **Environment variable**: `POSTGRES_USER`
  pub user: String,
  /// **Environment variable**: `POSTGRES_PASSWORD`
  pub password: String,
  /// **Environment variable**: `POSTGRES_HOST`
  pub host: String,
  /// Name of the database to operate on.
  ///
  /// **Environment variable**: `POSTGRES_DB`
  pub name: String,
}
