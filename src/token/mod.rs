// Internal modules
mod header;
mod parse;
#[allow(clippy::module_inception)]
mod token;
mod unsigned;

// Public API exports
pub use header::Header;
pub use token::Token;
pub use unsigned::UnsignedToken;
