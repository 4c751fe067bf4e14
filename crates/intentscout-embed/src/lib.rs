//! Text embedding for message clustering

mod encoder;
mod error;
mod hashing;
mod minilm;

pub use encoder::{check_output, Encoder};
pub use error::EncodeError;
pub use hashing::HashingEncoder;
pub use minilm::FastEmbedEncoder;
