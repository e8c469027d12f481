use thiserror::Error;

/// Custom error type for rgeflow
///
/// This error type is used to wrap all possible errors that can occur when running a flow.
/// The parameter state itself never errors, its validity is the boolean
/// [crate::ParameterState::check].
#[derive(Error, Debug)]
pub enum RgeError {
    #[error("Flow error: {0}")]
    FlowError(#[from] FlowError),
    #[error("Builder error: {0}")]
    BuilderError(#[from] BuilderError),
}

/// Possible errors that can occur when integrating a flow
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Landau pole or non-finite coupling reached at t = {t}")]
    LandauPole { t: f64 },
    #[error("Initial state fails the validity check")]
    InvalidInitialState,
    #[error("Step size is too small at time = {time}")]
    StepSizeTooSmall { time: f64 },
    #[error("Maximum number of steps ({max_steps}) exceeded at time = {time}")]
    MaxStepsExceeded { max_steps: usize, time: f64 },
    #[error("Tableau has no embedded error estimate, adaptive stepping needs one")]
    NoErrorEstimate,
    #[error("Stop time is equal to the start time t0 = {t0}")]
    EmptyInterval { t0: f64 },
}

/// Possible errors when building a problem
#[derive(Error, Debug)]
pub enum BuilderError {
    #[error("Initial step size must be positive and finite, got {0}")]
    InvalidStepSize(f64),
    #[error("Minimum step size must be positive and below the initial step size")]
    InvalidMinStepSize,
    #[error("Tolerances must be positive, got rtol = {rtol}, atol = {atol}")]
    InvalidTolerance { rtol: f64, atol: f64 },
    #[error("max_steps must be at least one")]
    InvalidMaxSteps,
}

#[macro_export]
macro_rules! flow_error {
    ($variant:ident) => {
        RgeError::from(FlowError::$variant)
    };
    ($variant:ident, $($arg:tt)*) => {
        RgeError::from(FlowError::$variant { $($arg)* })
    };
}

#[macro_export]
macro_rules! builder_error {
    ($variant:ident) => {
        RgeError::from(BuilderError::$variant)
    };
    ($variant:ident, $($arg:tt)*) => {
        RgeError::from(BuilderError::$variant($($arg)*))
    };
}
