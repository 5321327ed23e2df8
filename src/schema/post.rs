use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::{Connection, ErrorExt, Result};

/// A single row of the `blog` table.
///
/// Columns are decoded by name, so the struct keeps working if the
/// stored column order ever changes.
#[derive(Debug, FromRow, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
  pub id: i64,
  pub body: String,
  pub created_at: NaiveDateTime,
  pub updated_at: NaiveDateTime,
}

impl Post {
  #[tracing::instrument(skip(conn))]
  pub async fn all(conn: &mut Connection) -> Result<Vec<Self>> {
    sqlx::query_as::<_, Self>(r#"SELECT id, body, created_at, updated_at FROM "blog""#)
      .fetch_all(conn)
      .await
      .into_db_error()
  }

  #[tracing::instrument(skip(conn))]
  pub async fn by_id(conn: &mut Connection, id: i64) -> Result<Option<Self>> {
    sqlx::query_as::<_, Self>(
      r#"SELECT id, body, created_at, updated_at FROM "blog" WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await
    .into_db_error()
  }

  /// Inserts a new row and returns the id the database assigned to it.
  /// `created_at` and `updated_at` are filled in by column defaults.
  #[tracing::instrument(skip(conn, body))]
  pub async fn insert(conn: &mut Connection, body: &str) -> Result<i64> {
    sqlx::query_scalar::<_, i64>(r#"INSERT INTO "blog" (body) VALUES ($1) RETURNING id"#)
      .bind(body)
      .fetch_one(conn)
      .await
      .into_db_error()
  }

  #[tracing::instrument(skip(conn, body))]
  pub async fn update_body(conn: &mut Connection, id: i64, body: &str) -> Result<()> {
    sqlx::query(r#"UPDATE "blog" SET body = $1, updated_at = now() WHERE id = $2"#)
      .bind(body)
      .bind(id)
      .execute(conn)
      .await
      .into_db_error()
      .map(|_| ())
  }

  #[tracing::instrument(skip(conn))]
  pub async fn delete_by_id(conn: &mut Connection, id: i64) -> Result<()> {
    sqlx::query(r#"DELETE FROM "blog" WHERE id = $1"#)
      .bind(id)
      .execute(conn)
      .await
      .into_db_error()
      .map(|_| ())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;

  fn stamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
      .unwrap()
      .and_hms_opt(9, 30, 0)
      .unwrap()
  }

  #[test]
  fn serializes_with_iso8601_timestamps() {
    let post = Post {
      id: 7,
      body: "hello".to_string(),
      created_at: stamp(),
      updated_at: stamp(),
    };

    let value = serde_json::to_value(&post).unwrap();
    assert_eq!(
      value,
      serde_json::json!({
        "id": 7,
        "body": "hello",
        "created_at": "2024-05-01T09:30:00",
        "updated_at": "2024-05-01T09:30:00",
      })
    );
  }
}
