use error_stack::{Result, ResultExt};
use serde::Deserialize;

use super::ParseError;

#[derive(Debug, Deserialize)]
pub struct Server {
  pub db: super::Database,
}

impl Server {
  pub fn from_env() -> Result<Self, ParseError> {
    dotenvy::dotenv().ok();

    let config = Self::figment()
      .extract::<Self>()
      .change_context(ParseError)?;

    Ok(config)
  }
}

impl Server {
  /// Creates a default [`figment::Figment`] object to load server
  /// configuration. Split out of [`Server::from_env`] for testing.
  pub(crate) fn figment() -> figment::Figment {
    use figment::{providers::Env, Figment};

    Figment::new().merge(Env::raw().map(|v| match v.as_str() {
      "POSTGRES_USER" => "db.user".into(),
      "POSTGRES_PASSWORD" => "db.password".into(),
      "POSTGRES_HOST" => "db.host".into(),
      "POSTGRES_DB" => "db.name".into(),
      _ => v.into(),
    }))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use figment::Jail;

  #[test]
  fn env_aliases() {
    Jail::expect_with(|jail| {
      jail.set_env("POSTGRES_USER", "captain");
      jail.set_env("POSTGRES_PASSWORD", "hunter2");
      jail.set_env("POSTGRES_HOST", "db.internal");
      jail.set_env("POSTGRES_DB", "blog");

      let config: Server = Server::figment().extract()?;
      assert_eq!(config.db.user, "captain");
      assert_eq!(config.db.password, "hunter2");
      assert_eq!(config.db.host, "db.internal");
      assert_eq!(config.db.name, "blog");

      Ok(())
    });
  }
}
