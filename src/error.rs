//! Error types shared by the integrator, the plotter and the Fibonacci generator.

/// Errors produced by this crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("Fibonacci term {n} does not fit in a u64")]
    Overflow { n: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to load label font: {0}")]
    Font(#[from] ab_glyph::InvalidFont),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Error::InvalidParameter { name, value, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = Error::invalid("dt", -0.5, "must be positive");
        assert_eq!(
            err.to_string(),
            "invalid parameter `dt` = -0.5: must be positive"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
