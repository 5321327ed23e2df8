use actix_web::{body::BoxBody, http::StatusCode, HttpResponse};

use super::Error;

impl actix_web::ResponseError for Error {
  fn status_code(&self) -> StatusCode {
    match self {
      Error::BadPayload(..) => StatusCode::BAD_REQUEST,
      Error::NotFound => StatusCode::NOT_FOUND,
      Error::Internal(..) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse<BoxBody> {
    match self {
      Error::BadPayload(..) => HttpResponse::build(self.status_code())
        .content_type(mime::TEXT_PLAIN_UTF_8)
        .body("Error in request"),
      Error::NotFound => HttpResponse::new(self.status_code()),
      Error::Internal(report) => {
        tracing::error!(error = ?report, "request failed on a database call");
        HttpResponse::new(self.status_code())
      }
    }
  }
}
