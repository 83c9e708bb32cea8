/// Result alias used throughout the simulation crate.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised by the simulation engine.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A configuration parameter lies outside its supported domain.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig {
        /// Name of the offending parameter.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// The engine was ticked or stopped after it had already stopped.
    #[error("simulation has already stopped")]
    Stopped,
}
