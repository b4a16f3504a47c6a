use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{url}' failed with status {status}")]
    RequestNotOk { url: String, status: u16 },
    #[error("Unexpected response shape from '{url}': {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
