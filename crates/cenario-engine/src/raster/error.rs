use std::fmt;

/// Error produced by the raster backend.
#[derive(Debug, Clone)]
pub enum RasterError {
    /// The requested surface dimensions could not be allocated
    /// (zero-sized or larger than the backend supports).
    SurfaceSize { width: u32, height: u32 },
    /// PNG encoding failed.
    Encode(String),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::SurfaceSize { width, height } => {
                write!(f, "cannot allocate {width}x{height} raster surface")
            }
            RasterError::Encode(msg) => write!(f, "png encode error: {msg}"),
        }
    }
}

impl std::error::Error for RasterError {}
