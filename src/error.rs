/// Precondition violations raised by distribution operations.
///
/// Every variant is raised synchronously by the call that violated the
/// precondition. Nothing here is transient, so nothing is worth retrying.
/// Offending values are carried in their `Debug` rendering so the error
/// stays independent of the key type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid frequency {frequency} for value {value}")]
    InvalidFrequency { value: String, frequency: f64 },

    #[error("cannot normalize a distribution with total mass {total}")]
    DegenerateNormalization { total: f64 },

    #[error("value {value} has no numeric interpretation")]
    NonNumericDomain { value: String },

    #[error("value {value} has no reciprocal")]
    DivisionByZero { value: String },
}

impl Error {
    pub(crate) fn invalid_frequency<T: std::fmt::Debug>(value: &T, frequency: f64) -> Self {
        Self::InvalidFrequency {
            value: format!("{:?}", value),
            frequency,
        }
    }
    pub(crate) fn non_numeric<T: std::fmt::Debug>(value: &T) -> Self {
        Self::NonNumericDomain {
            value: format!("{:?}", value),
        }
    }
    pub(crate) fn division_by_zero<T: std::fmt::Debug>(value: &T) -> Self {
        Self::DivisionByZero {
            value: format!("{:?}", value),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
