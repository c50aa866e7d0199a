use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};

use serde::{Deserialize, Serialize};

use char_hmm_core::model::predictor::Predictor;
use char_hmm_core::model::state::State;

/// Struct representing query parameters for the `/v1/predict` endpoint
#[derive(Deserialize)]
struct PredictQuery {
	text: Option<String>,
}

/// Struct representing query parameters for the `/v1/transitions` endpoint
#[derive(Deserialize)]
struct TransitionQuery {
	state: String,
}

/// One outgoing edge of the transition graph, renderer-facing.
#[derive(Serialize)]
struct TransitionEntry {
	state: &'static str,
	probability: f64,
}

/// A full transition row, keyed by its source state.
#[derive(Serialize)]
struct TransitionRow {
	from: &'static str,
	targets: Vec<TransitionEntry>,
}

fn row_response(predictor: &Predictor, from: State) -> TransitionRow {
	TransitionRow {
		from: from.name(),
		targets: predictor
			.transition_row(from)
			.iter()
			.map(|(state, probability)| TransitionEntry {
				state: state.name(),
				probability: *probability,
			})
			.collect(),
	}
}

/// HTTP GET endpoint `/v1/predict`
///
/// Runs one prediction pass over the given text (defaults to empty, i.e.
/// the START state) and returns the full outcome as JSON:
/// `{ currentState, predictions: [{character, state, probability}], entropyBits }`.
#[get("/v1/predict")]
async fn get_prediction(
	predictor: web::Data<Predictor>,
	query: web::Query<PredictQuery>,
) -> impl Responder {
	let text = query.text.as_deref().unwrap_or("");
	HttpResponse::Ok().json(predictor.predict(text))
}

/// HTTP GET endpoint `/v1/transitions`
///
/// Returns the full transition-probability row for the requested source
/// state (renderers show this next to the prediction list). The state
/// name is case-insensitive; `START` is a valid source.
#[get("/v1/transitions")]
async fn get_transitions(
	predictor: web::Data<Predictor>,
	query: web::Query<TransitionQuery>,
) -> impl Responder {
	match State::from_name(&query.state) {
		Some(from) => HttpResponse::Ok().json(row_response(&predictor, from)),
		None => HttpResponse::BadRequest().body(format!("Unknown state: {}", query.state)),
	}
}

/// HTTP GET endpoint `/v1/matrix`
///
/// Returns every transition row at once. Graph renderers use this to
/// draw edges (typically filtering to probabilities above their own
/// display threshold) without one request per state.
#[get("/v1/matrix")]
async fn get_matrix(predictor: web::Data<Predictor>) -> impl Responder {
	let rows: Vec<TransitionRow> = [
		State::Vowel,
		State::Consonant,
		State::Space,
		State::Digit,
		State::Punctuation,
		State::Start,
	]
	.iter()
	.map(|from| row_response(&predictor, *from))
	.collect();

	HttpResponse::Ok().json(rows)
}

/// HTTP GET endpoint `/v1/states`
///
/// Returns the five real state names, in enumeration order.
#[get("/v1/states")]
async fn get_states() -> impl Responder {
	let names: Vec<&'static str> = State::REAL.iter().map(|s| s.name()).collect();
	HttpResponse::Ok().json(names)
}

/// Main entry point for the server.
///
/// Validates the static model tables once at startup, shares the
/// resulting predictor across workers, and serves the prediction
/// contract over HTTP for external renderers.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - The predictor is immutable and every endpoint is a pure read, so
///   no lock is needed around the shared state.
/// - CORS is permissive: the expected consumer is a browser renderer.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	// A table that fails validation is a fatal configuration error.
	let predictor = Predictor::new().map_err(std::io::Error::other)?;
	let shared_predictor = web::Data::new(predictor);

	log::info!("Model tables validated, listening on 127.0.0.1:5000");

	HttpServer::new(move || {
		App::new()
			.app_data(shared_predictor.clone())
			.wrap(Cors::permissive())
			.wrap(Logger::default())
			.service(get_prediction)
			.service(get_transitions)
			.service(get_matrix)
			.service(get_states)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
