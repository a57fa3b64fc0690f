use warp::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Invalid coordinates.")]
    InvalidCoordinates,
    #[error("Invalid hours.")]
    InvalidHours,
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl SimulationError {
    pub fn status(&self) -> StatusCode {
        match self {
            SimulationError::InvalidCoordinates | SimulationError::InvalidHours => {
                StatusCode::BAD_REQUEST
            }
            SimulationError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
