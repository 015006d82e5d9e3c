mod config;

use actix_cors::Cors;
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};

use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use uniuri_core::{chars, generate_text, length, Error, Options, STD_CHARS, STD_LEN, UUID_LEN};

use crate::config::ServerConfig;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	length: Option<usize>,
	chars: Option<String>,
	count: Option<usize>
}

/// Body of the `/v1/defaults` endpoint
#[derive(Serialize)]
struct Defaults {
	std_len: usize,
	uuid_len: usize,
	std_chars: String
}

impl GenerateParams {
	/// Validates the request against the configured limits and turns it
	/// into a generation request plus the number of strings to produce.
	fn to_options(&self, config: &ServerConfig) -> Result<(Options, usize), String> {
		let len = self.length.unwrap_or(STD_LEN);
		if len > config.max_length {
			return Err(format!("length must be at most {}", config.max_length));
		}

		let count = self.count.unwrap_or(1);
		if count == 0 || count > config.max_count {
			return Err(format!("count must be between 1 and {}", config.max_count));
		}

		let mut opts = vec![length(len)];
		if let Some(symbols) = &self.chars {
			if let Some(c) = symbols.chars().find(|c| !c.is_ascii()) {
				return Err(format!("chars must be ASCII, got '{c}'"));
			}
			opts.push(chars(symbols.as_str()));
		}
		Ok((Options::from_opts(opts), count))
	}
}

/// Maps a generation failure to an HTTP response.
///
/// Bad alphabets are the caller's fault; a failing random source is ours.
fn error_response(e: &Error) -> HttpResponse {
	match e {
		Error::InvalidAlphabet { .. } | Error::NotText { .. } => HttpResponse::BadRequest().body(e.to_string()),
		Error::RandomSourceUnavailable(_) => {
			log::error!("generation failed: {e}");
			HttpResponse::InternalServerError().body("Random source unavailable")
		}
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates `count` random strings (one per line) of `length` symbols drawn
/// from `chars`. Missing parameters use the standard length and alphabet.
#[get("/v1/generate")]
async fn get_generated(config: web::Data<ServerConfig>, query: web::Query<GenerateParams>) -> impl Responder {
	let (options, count) = match query.to_options(&config) {
		Ok(r) => r,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};

	let mut ids = Vec::with_capacity(count);
	for _ in 0..count {
		match generate_text(&mut OsRng, &options) {
			Ok(id) => ids.push(id),
			Err(e) => return error_response(&e)
		}
	}

	HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(ids.join("\n"))
}

#[get("/v1/defaults")]
async fn get_defaults() -> impl Responder {
	HttpResponse::Ok().json(Defaults {
		std_len: STD_LEN,
		uuid_len: UUID_LEN,
		std_chars: String::from_utf8_lossy(STD_CHARS).into_owned()
	})
}

/// Main entry point for the server.
///
/// Reads the configuration from the environment (and `.env`), then starts
/// an Actix-web HTTP server. Generation is stateless, so every worker
/// shares the same read-only configuration.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let config = ServerConfig::from_env().map_err(std::io::Error::other)?;
	let bind = (config.host.clone(), config.port);
	log::info!("listening on {}:{}", bind.0, bind.1);

	let shared_config = web::Data::new(config);

	HttpServer::new(move || {
		App::new()
			.app_data(shared_config.clone())
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET"]))
			.wrap(middleware::Logger::default())
			.service(get_generated)
			.service(get_defaults)
	})
		.bind(bind)?
		.run()
		.await
}
