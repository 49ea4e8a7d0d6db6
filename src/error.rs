use thiserror::Error;

/// Errors returned when constructing a [`HyperLogLog`](crate::HyperLogLog).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Requested error bound or precision lies outside the supported range.
    #[error("invalid value of {name}: {value}, expected value in [{min}, {max}]")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::InvalidParameter {
            name: "err",
            value: 0.02,
            min: 0.00001,
            max: 0.01,
        };
        assert_eq!(
            err.to_string(),
            "invalid value of err: 0.02, expected value in [0.00001, 0.01]"
        );
    }
}
