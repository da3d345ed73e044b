use thiserror::Error;

#[derive(Error, Debug)]
pub enum IrisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing input: {0}")]
    MissingInput(&'static str),

    #[error("Empty selection: at least one {0} must be chosen")]
    EmptySelection(&'static str),

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("Dimension mismatch: texture is {texture_width}x{texture_height}, mask is {mask_width}x{mask_height}")]
    DimensionMismatch {
        texture_width: usize,
        texture_height: usize,
        mask_width: usize,
        mask_height: usize,
    },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Archive error: {0}")]
    Archive(String),
}

impl From<zip::result::ZipError> for IrisError {
    fn from(err: zip::result::ZipError) -> Self {
        IrisError::Archive(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IrisError>;
