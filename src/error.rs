use thiserror::Error;

/// Main error type for modelfetch
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Not a valid catalog model page link: {0}\n\nTroubleshooting:\n- Use the model page address, not the download link\n- Expected form: https://civitai.com/models/<id>/<slug>")]
    InvalidLink(String),

    #[error("The catalog service seems to be down\n\nTroubleshooting:\n- This is a server-side problem, try again later\n- Check your network connection before retrying")]
    ServiceUnavailable,

    #[error("Catalog request failed: {0}")]
    RequestFailed(String),

    #[error("Unexpected catalog response: {0}")]
    MalformedResponse(String),

    #[error("Config error: {0}\n\nTroubleshooting:\n- Check config file: ~/.config/modelfetch/config.toml\n- Run with RUST_LOG=debug for more details")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
