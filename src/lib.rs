pub mod about;
pub mod api_routes_http;
pub mod session_middleware;

use crate::session_middleware::SessionMiddleware;
use actix_web::{middleware, web::Data, App, HttpResponse, HttpServer};
use clap::Parser;
use scribe_api_common::context::ScribeContext;
use scribe_db_schema::utils::build_db_pool;
use scribe_utils::{
  error::{ScribeErrorType, ScribeResult},
  settings::SETTINGS,
};
use tracing_actix_web::TracingLogger;

#[derive(Parser, Debug)]
#[command(
  version,
  about = "A small social blogging platform: posts, groups, comments and follows."
)]
pub struct CmdArgs {
  /// Disables the http server, only runs migrations and exits. Useful for
  /// deploy pipelines.
  #[arg(long, default_value_t = false)]
  pub migrations_only: bool,
}

pub async fn start_scribe_server(args: CmdArgs) -> ScribeResult<()> {
  let settings = SETTINGS.to_owned();

  let pool = build_db_pool().await?;
  if args.migrations_only {
    return Ok(());
  }

  let context = ScribeContext::create(pool);

  tracing::info!(
    "Starting http server at {}:{}",
    settings.bind,
    settings.port
  );

  HttpServer::new(move || {
    App::new()
      .wrap(middleware::Compress::default())
      .wrap(TracingLogger::default())
      .wrap(SessionMiddleware::new(context.clone()))
      .app_data(Data::new(context.clone()))
      .configure(api_routes_http::config)
      .configure(about::config)
      .default_service(actix_web::web::to(not_found))
  })
  .bind((settings.bind, settings.port))?
  .run()
  .await?;

  Ok(())
}

async fn not_found() -> HttpResponse {
  HttpResponse::NotFound().json(ScribeErrorType::NotFound)
}
