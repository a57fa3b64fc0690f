use anyhow::Context;
use serde_json::Value;

use crate::error::SimulationError;
use crate::models::{GeoPoint, SimulationRequest, SimulationResult};
use crate::ring::{self, JitterSource};

pub const DEFAULT_POINT_COUNT: usize = 80;
pub const DEFAULT_HOURS: i64 = 1;

/// Validates simulation requests and turns them into perimeter rings.
#[derive(Clone, Debug)]
pub struct SimulationService {
    point_count: usize,
    rasters_available: bool,
}

impl Default for SimulationService {
    fn default() -> Self {
        SimulationService::new(DEFAULT_POINT_COUNT, false)
    }
}

impl SimulationService {
    pub fn new(point_count: usize, rasters_available: bool) -> Self {
        Self {
            point_count,
            rasters_available,
        }
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Whether landcover and elevation rasters were found at startup.
    /// Ring generation does not consult them.
    pub fn rasters_available(&self) -> bool {
        self.rasters_available
    }

    pub fn simulate<J>(
        &self,
        request: &SimulationRequest,
        jitter: &mut J,
    ) -> Result<SimulationResult, SimulationError>
    where
        J: JitterSource + ?Sized,
    {
        let center = GeoPoint::new(request.lat, request.lon);
        if !center.is_valid() {
            return Err(SimulationError::InvalidCoordinates);
        }

        log::debug!(
            "Simulating ring at ({}, {}) after {}h with {} points",
            center.lat,
            center.lon,
            request.hours,
            self.point_count
        );

        let points = ring::generate_ring(center, request.hours, self.point_count, jitter);

        Ok(SimulationResult {
            total_count: points.len(),
            points,
            hours: request.hours,
        })
    }

    /// Parses a raw `/simulate` body and runs the simulation.
    pub fn simulate_body<J>(&self, body: &[u8], jitter: &mut J) -> Result<SimulationResult, SimulationError>
    where
        J: JitterSource + ?Sized,
    {
        let request = parse_request(body)?;
        self.simulate(&request, jitter)
    }
}

/// Reads `{"lat", "lng", "hours"}` from a JSON body.
///
/// Coordinates may be numbers or numeric strings. `hours` defaults to 1 and
/// fractional values are truncated toward zero.
pub fn parse_request(body: &[u8]) -> Result<SimulationRequest, SimulationError> {
    let data: Value = serde_json::from_slice(body).context("Malformed JSON body")?;

    let lat = coordinate(data.get("lat")).ok_or(SimulationError::InvalidCoordinates)?;
    let lon = coordinate(data.get("lng")).ok_or(SimulationError::InvalidCoordinates)?;
    let hours = hours(data.get("hours"))?;

    Ok(SimulationRequest { lat, lon, hours })
}

fn coordinate(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn hours(value: Option<&Value>) -> Result<i64, SimulationError> {
    match value {
        None | Some(Value::Null) => Ok(DEFAULT_HOURS),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(h) => Ok(h),
            None => n
                .as_f64()
                .filter(|h| h.is_finite())
                .map(|h| h.trunc() as i64)
                .ok_or(SimulationError::InvalidHours),
        },
        Some(Value::String(s)) => s.trim().parse().map_err(|_| SimulationError::InvalidHours),
        Some(_) => Err(SimulationError::InvalidHours),
    }
}
