use thiserror::Error;

pub type PlyResult<T> = Result<T, PlyLoadError>;

#[derive(Debug, Error)]
pub enum PlyLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse PLY header: {0}")]
    Header(String),

    #[error("failed to read PLY payload: {0}")]
    Payload(String),

    #[error("PLY file has no vertex element")]
    MissingVertexElement,

    #[error("vertex element is missing the '{0}' property")]
    MissingProperty(&'static str),

    #[error("vertex {index} has a non-numeric '{property}' value")]
    InvalidProperty { index: usize, property: &'static str },

    #[error("face {face} references vertex {vertex}, but only {count} vertices exist")]
    FaceIndexOutOfRange {
        face: usize,
        vertex: usize,
        count: usize,
    },
}
