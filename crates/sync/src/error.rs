use thiserror::Error;

/// Errors raised while assembling the run configuration.
///
/// These are the only fatal errors in the system; everything after
/// configuration validation degrades to a logged warning for the affected
/// feed or batch.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
