use crate::{
  api_routes_websocket::websocket,
  root_span_builder::QuieterRootSpanBuilder,
  session_middleware::SessionMiddleware,
};
use actix::Actor;
use actix_cors::Cors;
use actix_web::{middleware, web, web::Data, App, HttpServer};
use clap::Parser;
use tracing::info;
use tracing_actix_web::TracingLogger;
use workboard_api_common::context::WorkboardContext;
use workboard_db_schema::utils::build_db_pool;
use workboard_utils::{
  error::WorkboardResult,
  settings::{structs::Settings, SETTINGS},
};
use workboard_websocket::chat_server::ChatServer;

pub mod api_routes_http;
pub mod api_routes_websocket;
pub mod root_span_builder;
pub mod session_middleware;

#[derive(Parser, Debug)]
#[command(
  version,
  about = "The workboard backend API server. It connects to PostgreSQL, runs any pending migrations and starts accepting API requests."
)]
pub struct CmdArgs {
  /// Print the config as JSON with documentation and exit
  #[arg(long, default_value_t = false)]
  pub print_config_docs: bool,
}

pub async fn start_workboard_server(args: CmdArgs) -> WorkboardResult<()> {
  if args.print_config_docs {
    println!("{}", generate_config_documentation());
    return Ok(());
  }

  let pool = build_db_pool().await?;

  let chat_server = ChatServer::startup().start();
  let context = WorkboardContext::create(pool, chat_server);

  let bind = (SETTINGS.bind, SETTINGS.port);
  info!("Starting http server at {}:{}", bind.0, bind.1);

  HttpServer::new(move || {
    App::new()
      .wrap(middleware::Compress::default())
      .wrap(cors_config(&SETTINGS))
      .wrap(TracingLogger::<QuieterRootSpanBuilder>::new())
      .app_data(Data::new(context.clone()))
      .wrap(SessionMiddleware::new(context.clone()))
      .configure(api_routes_http::config)
      .route("/api/v1/ws", web::get().to(websocket))
  })
  .bind(bind)?
  .run()
  .await?;

  Ok(())
}

fn cors_config(settings: &Settings) -> Cors {
  match &settings.cors_origin {
    Some(origin) => Cors::default()
      .allowed_origin(origin)
      .allow_any_method()
      .allow_any_header()
      .max_age(3600),
    // without a configured origin the API is open, same as the old deployments
    None => Cors::permissive(),
  }
}

fn generate_config_documentation() -> String {
  let fmt = doku::json::Formatting {
    auto_comments: doku::json::AutoComments::none(),
    comments_style: doku::json::CommentsStyle {
      separator: "#".to_owned(),
    },
    objects_style: doku::json::ObjectsStyle {
      surround_keys_with_quotes: false,
      use_comma_as_separator: false,
    },
    ..Default::default()
  };
  doku::to_json_fmt_val(&fmt, &SETTINGS.to_owned())
}

#[cfg(test)]
mod tests {
  use crate::generate_config_documentation;

  #[test]
  fn test_config_documentation_mentions_every_section() {
    let docs = generate_config_documentation();
    for key in ["database", "hostname", "bind", "port", "email"] {
      assert!(docs.contains(key), "missing config key {key}");
    }
  }
}
