use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("payload encoding failed: {0}")]
    Encoding(String),
}
