use actix_web::{web, HttpResponse};

use crate::{http::Error, schema::Post, types::form, App};

#[tracing::instrument(skip_all)]
pub async fn list(app: web::Data<App>) -> Result<HttpResponse, Error> {
  let mut conn = app.conn().await?;
  let posts = Post::all(&mut conn).await?;

  // An empty table still serializes as `[]`.
  Ok(HttpResponse::Ok().json(posts))
}

#[tracing::instrument(skip_all)]
pub async fn create(app: web::Data<App>, payload: web::Bytes) -> Result<HttpResponse, Error> {
  let form =
    serde_json::from_slice::<form::posts::Submit>(&payload).map_err(Error::BadPayload)?;

  let mut conn = app.conn().await?;
  let id = Post::insert(&mut conn, &form.body).await?;

  Ok(HttpResponse::Ok().json(form::posts::Created { id }))
}

#[tracing::instrument(skip(app))]
pub async fn get(app: web::Data<App>, id: web::Path<String>) -> Result<HttpResponse, Error> {
  // A non-numeric id cannot name a row.
  let Ok(id) = id.parse::<i64>() else {
    return Err(Error::NotFound);
  };

  let mut conn = app.conn().await?;
  let Some(post) = Post::by_id(&mut conn, id).await? else {
    return Err(Error::NotFound);
  };

  Ok(HttpResponse::Ok().json(post))
}

/// The row must exist before the payload is even looked at; an update
/// with a garbage payload against a missing id answers 404, not 400.
#[tracing::instrument(skip(app, payload))]
pub async fn update(
  app: web::Data<App>,
  id: web::Path<String>,
  payload: web::Bytes,
) -> Result<HttpResponse, Error> {
  let Ok(id) = id.parse::<i64>() else {
    return Err(Error::NotFound);
  };

  let mut conn = app.conn().await?;
  let Some(existing) = Post::by_id(&mut conn, id).await? else {
    return Err(Error::NotFound);
  };

  let form =
    serde_json::from_slice::<form::posts::Submit>(&payload).map_err(Error::BadPayload)?;
  Post::update_body(&mut conn, existing.id, &form.body).await?;

  Ok(HttpResponse::Ok().finish())
}

/// Keeps the post named by the path parameter and removes every other
/// row, one delete statement per row. Nothing wraps the sequence in a
/// transaction: a failure part way through leaves the earlier deletes
/// in place. Internal failures are logged and the client still gets a
/// bare 200.
#[tracing::instrument(skip(app))]
pub async fn delete(app: web::Data<App>, id: web::Path<String>) -> HttpResponse {
  let Ok(keep) = id.parse::<i64>() else {
    tracing::error!("delete: path parameter is not an integer");
    return HttpResponse::Ok().finish();
  };

  let mut conn = match app.conn().await {
    Ok(conn) => conn,
    Err(error) => {
      tracing::error!(?error, "delete: could not check out a connection");
      return HttpResponse::Ok().finish();
    }
  };

  let posts = match Post::all(&mut conn).await {
    Ok(posts) => posts,
    Err(error) => {
      tracing::error!(?error, "delete: table scan failed");
      return HttpResponse::Ok().finish();
    }
  };

  for post in posts {
    if post.id == keep {
      continue;
    }
    if let Err(error) = Post::delete_by_id(&mut conn, post.id).await {
      tracing::error!(?error, post.id, "delete: could not remove row");
      return HttpResponse::Ok().finish();
    }
  }

  HttpResponse::Ok().finish()
}
