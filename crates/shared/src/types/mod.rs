//! Common types used across the workspace.

pub mod id;
pub mod locale;
pub mod money;

pub use id::*;
pub use locale::Locale;
pub use money::Money;
