use actix_web::web;

pub mod posts;

pub fn configure(cfg: &mut web::ServiceConfig) {
  cfg
    .service(web::resource("/").route(web::get().to(posts::list)))
    .service(web::resource("/blog").route(web::post().to(posts::create)))
    .service(
      web::resource("/blog/{id}")
        .route(web::get().to(posts::get))
        .route(web::put().to(posts::update))
        .route(web::delete().to(posts::delete)),
    );
}
