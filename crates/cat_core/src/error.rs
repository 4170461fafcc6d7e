use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatError {
    #[error("Invalid {param}: {value}. The {param} should be between {min} and {max}.")]
    InvalidArgument {
        param: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Unknown cat kind `{0}`: expected house, domestic or wild")]
    UnknownKind(String),

    #[error("A {kind} cat cannot {action}")]
    Unsupported {
        action: &'static str,
        kind: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CatError>;
