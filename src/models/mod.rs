pub mod identifier;
mod review;

pub use identifier::{decode, encode, IdentifierError, Key};
pub use review::*;
