use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read markup: {0}")]
    Read(#[from] io::Error),

    #[error("input is not markup")]
    NotMarkup,
}
