use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error(
        "invalid viewport bounds: x=[{x_min}, {x_max}], y=[{y_min}, {y_max}] \
         (spans must be finite and above the minimum span)"
    )]
    InvalidViewport {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("rendering surface unavailable: {0}")]
    SurfaceUnavailable(String),
}
