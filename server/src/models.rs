use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationRequest {
    pub lat: f64,
    pub lon: f64,
    pub hours: i64,
}

/// Perimeter ring for one request, serialized with the field names map clients expect.
#[derive(Clone, Debug, Serialize)]
pub struct SimulationResult {
    #[serde(rename = "burned_pixels")]
    pub points: Vec<GeoPoint>,
    #[serde(rename = "total_burned")]
    pub total_count: usize,
    #[serde(rename = "hours_passed")]
    pub hours: i64,
}

#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub error: String,
}

impl ErrorMessage {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
