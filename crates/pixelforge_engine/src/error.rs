use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("no drawable surface available ({width}x{height})")]
    SurfaceUnavailable { width: u32, height: u32 },
    #[error("viewport {width}x{height} has no area")]
    EmptyViewport { width: u32, height: u32 },
}
