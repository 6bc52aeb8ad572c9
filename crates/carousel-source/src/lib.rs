pub mod client;
pub mod error;
pub mod source;

pub use client::ProductClient;
pub use error::SourceError;
pub use source::ProductSource;
