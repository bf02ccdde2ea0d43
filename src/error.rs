use thiserror::Error;

/// Every fallible grid operation validates its arguments up front and
/// returns this before touching any cell.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GridError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, GridError>;

/// Rejects zero grid dimensions.
pub(crate) fn check_dims(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(GridError::invalid(format!(
            "width and height must be greater than 0 (got {width}x{height})"
        )));
    }
    Ok(())
}

/// Rejects strengths outside [0, 1], NaN included.
pub(crate) fn check_strength(strength: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&strength) {
        return Err(GridError::invalid(format!(
            "strength must be between 0 and 1 (got {strength})"
        )));
    }
    Ok(())
}
