//! Error macros for edgewalk

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::EdgeWalkError::invalid_value($context, $value))
    };
}

/// Macro for rejecting an unrecognized orientation mode
#[macro_export]
macro_rules! bail_orientation {
    ($value:expr) => {
        return Err($crate::error::EdgeWalkError::invalid_orientation($value))
    };
}
