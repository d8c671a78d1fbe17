pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to build the 'Environment' from the provided string: {0}")]
    StringToEnvironmentFail(String),
    #[error("the product catalogue is empty")]
    EmptyCatalogue,

    #[error("figment extraction error: {0}")]
    Figment(#[from] figment::Error),
}
