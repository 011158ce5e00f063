use thiserror::Error;

pub type Result<T> = std::result::Result<T, PassblobError>;

#[derive(Debug, Error)]
pub enum PassblobError {
    #[error("crypto failure: {0}")]
    CryptoFailure(String),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("decryption failed: wrong passphrase or corrupted data")]
    PaddingOrKeyError,
}
