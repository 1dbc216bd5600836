//! Value objects - immutable domain primitives

mod account_id;
mod handle;
mod signup_channel;

pub use account_id::AccountId;
pub use handle::{Handle, HandleParseError};
pub use signup_channel::SignupChannel;
