pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("templating error: {0}")]
    Tera(#[from] tera::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
