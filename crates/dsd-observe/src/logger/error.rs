use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("unknown LOG_FORMAT {0:?}, expected text, json or journald")]
    InvalidFormat(String),
    #[error("LOG_FORMAT=journald needs Linux and the `journald` feature")]
    JournaldNotSupported,
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
    #[error("cannot install tracing subscriber: {0}")]
    InitializationFailed(String),
    #[error("unknown LOG_LEVEL {0:?}, expected off|error|warn|info|debug|trace or an EnvFilter directive")]
    InvalidLogLevel(String),
}
