use actix_web::{web, App, HttpServer};
use std::process;
use tracing_actix_web::TracingLogger;

use quill::config;

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .pretty()
    .with_max_level(tracing::Level::DEBUG)
    .init();

  let config = match config::Server::from_env() {
    Ok(config) => config,
    Err(error) => {
      eprintln!("{error:?}");
      process::exit(1);
    }
  };

  // Connecting also performs the startup round-trip check; there is no
  // point serving traffic without a reachable database.
  let app = match quill::App::new(config).await {
    Ok(app) => app,
    Err(error) => {
      eprintln!("{error:?}");
      process::exit(1);
    }
  };

  tracing::info!("connected to the database");

  HttpServer::new(move || {
    App::new()
      .app_data(web::Data::new(app.clone()))
      .wrap(TracingLogger::default())
      .configure(quill::http::controllers::configure)
  })
  .bind(("0.0.0.0", 8081))
  .expect("could not bind to port 8081")
  .run()
  .await
  .expect("server terminated abnormally")
}
