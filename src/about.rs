use actix_web::{web, HttpResponse};
use serde_json::json;

/// The static about pages: who wrote the site and what it runs on.
pub fn config(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/about/author", web::get().to(about_author))
    .route("/about/tech", web::get().to(about_tech));
}

async fn about_author() -> HttpResponse {
  let json = json!({
    "title": "About the author",
    "body": "Scribe is written and run by a small group of people who like \
             plain text and small websites.",
  });
  HttpResponse::Ok().json(json)
}

async fn about_tech() -> HttpResponse {
  let json = json!({
    "title": "Technology",
    "body": "Scribe runs on Rust, actix-web, Diesel and PostgreSQL.",
  });
  HttpResponse::Ok().json(json)
}
