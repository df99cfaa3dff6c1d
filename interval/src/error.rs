use thiserror::Error;

/// Failures raised by interval construction and arithmetic
///
/// Endpoints are carried pre-formatted so the error is independent of the
/// scalar type of the interval that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("interval is reversed: min {min} is greater than max {max}")]
    Reversed { min: String, max: String },

    #[error("could not clamp {interval} to {bounds}: ranges do not overlap")]
    Disjoint { interval: String, bounds: String },

    #[error("operand {operand} has a negative endpoint")]
    NegativeOperand { operand: String },

    #[error("divisor {divisor} must be positive")]
    NonPositiveDivisor { divisor: String },

    #[error("ratio denominator is zero")]
    ZeroDenominator,

    #[error("ratio {numer}/{denom} is out of range")]
    RatioOutOfRange { numer: i64, denom: i64 },
}

impl IntervalError {
    pub(crate) fn reversed(min: impl ToString, max: impl ToString) -> Self {
        IntervalError::Reversed {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}
