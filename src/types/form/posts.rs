use serde::{Deserialize, Serialize};

/// Payload accepted by the create and update endpoints.
#[derive(Debug, Deserialize, Serialize)]
pub struct Submit {
  pub body: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Created {
  pub id: i64,
}
