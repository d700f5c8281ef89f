use alloc::string::String;

/// Broad classification of a [`BitmapError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or unsupported BMP content, or a buffer too large to represent.
    Format,
    /// A coordinate, index or dimension outside the valid range.
    Range,
    /// The underlying file could not be read or written.
    Io,
}

/// Errors from bitmap construction, pixel access and BMP encoding/decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: i64, height: i64 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel ({x}, {y}) is outside the {width}x{height} bitmap")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("index {index} is outside a buffer of {len} pixels")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("invalid bitmap dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl BitmapError {
    /// Which of the three error families this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnrecognizedFormat
            | Self::InvalidHeader(_)
            | Self::UnsupportedVariant(_)
            | Self::UnexpectedEof
            | Self::DimensionsTooLarge { .. }
            | Self::LimitExceeded(_) => ErrorKind::Format,
            Self::OutOfBounds { .. }
            | Self::IndexOutOfBounds { .. }
            | Self::InvalidDimensions { .. } => ErrorKind::Range,
            #[cfg(feature = "std")]
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, BitmapError>;
