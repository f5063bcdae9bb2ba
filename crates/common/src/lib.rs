//! Cross-cutting helpers shared by the server crate and binaries.

pub mod types;
pub mod utils;
