use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScatterError {
    #[error("invalid geometry: box dimensions must be positive, got {width}x{height}")]
    InvalidGeometry { width: f32, height: f32 },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ScatterError>;
