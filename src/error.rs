use miette::Diagnostic;
use thiserror::Error;

/// Main error type for geotile operations
#[derive(Error, Diagnostic, Debug)]
pub enum GeotileError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(geotile::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid colour: {value}")]
    #[diagnostic(code(geotile::colour))]
    InvalidColour {
        value: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown generator: {name}")]
    #[diagnostic(code(geotile::generator))]
    UnknownGenerator {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("Generator {kind} is not implemented")]
    #[diagnostic(
        code(geotile::generator),
        help("Run `geotile list` to see which generators are available")
    )]
    UnsupportedGenerator { kind: crate::types::PatternKind },

    #[error("Digest read out of range: {index}..{end} of {len} hex chars")]
    #[diagnostic(code(geotile::digest))]
    OutOfRange { index: usize, end: usize, len: usize },

    #[error("Invalid digest: {message}")]
    #[diagnostic(
        code(geotile::digest),
        help("A pinned hash must be a string of hex characters")
    )]
    InvalidDigest { message: String },

    #[error("Group context underflow: end_group() with no open group")]
    #[diagnostic(code(geotile::markup))]
    EmptyContext,
}

pub type Result<T> = std::result::Result<T, GeotileError>;
