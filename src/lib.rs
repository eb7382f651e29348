pub mod config;
pub mod console;
pub mod graph;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("vertex out of bounds: {0}")]
    VertexOutOfBounds(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
