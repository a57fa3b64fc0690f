use bytes::Bytes;
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};
use warp::{Filter, Rejection, Reply};

use crate::error::SimulationError;
use crate::models::ErrorMessage;
use crate::ring::UniformJitter;
use crate::simulation::SimulationService;

const INDEX_HTML: &str = include_str!("../templates/index.html");

const MAX_BODY_BYTES: u64 = 16 * 1024;

pub async fn run(address: std::net::SocketAddr, service: SimulationService) {
    log::info!(
        "Listening on http://{} ({} points per ring, rasters {})",
        address,
        service.point_count(),
        if service.rasters_available() { "available" } else { "unavailable" }
    );

    warp::serve(routes(Arc::new(service))).run(address).await
}

pub fn routes(
    service: Arc<SimulationService>,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let index_route = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::html(INDEX_HTML));

    let health_route = warp::path!("health").and(warp::get()).map(|| "ok");

    let simulate_route = warp::path!("simulate")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and(with_service(service))
        .map(simulate);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST"])
        .allow_header("content-type");

    index_route
        .or(health_route)
        .or(simulate_route)
        .with(cors)
        .recover(rejection)
}

fn with_service(
    service: Arc<SimulationService>,
) -> impl Filter<Extract = (Arc<SimulationService>,), Error = Infallible> + Clone {
    warp::any().map(move || service.clone())
}

fn simulate(body: Bytes, service: Arc<SimulationService>) -> WithStatus<Json> {
    let mut jitter = UniformJitter::new(rand::rng());

    match service.simulate_body(&body, &mut jitter) {
        Ok(result) => warp::reply::with_status(warp::reply::json(&result), StatusCode::OK),
        Err(err) => {
            match &err {
                SimulationError::Unexpected(e) => log::error!("Error in /simulate: {:?}", e),
                _ => log::warn!("Rejected /simulate request: {}", err),
            }
            error_reply(err.to_string(), err.status())
        }
    }
}

fn error_reply(message: impl Into<String>, code: StatusCode) -> WithStatus<Json> {
    warp::reply::with_status(warp::reply::json(&ErrorMessage::new(message)), code)
}

pub async fn rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found.")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed.")
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Payload too large.")
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "Content-Length required.")
    } else if err.find::<warp::cors::CorsForbidden>().is_some() {
        (StatusCode::FORBIDDEN, "Forbidden.")
    } else {
        log::error!("Error: {:?}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
    };

    Ok(error_reply(message, code))
}
