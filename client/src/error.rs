use reqwest::StatusCode;
use rotom_model::DecodeError;
use thiserror::Error;

/// Errors surfaced by the client.
///
/// No retry is attempted at this layer; a failed call propagates directly
/// to the triggering action, which reports it and aborts.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
