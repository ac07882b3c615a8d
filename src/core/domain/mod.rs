//! Domain types.

mod evaluation;
mod memo;
mod secret;

pub use evaluation::Evaluation;
pub use memo::Memo;
pub use secret::SecretInput;
