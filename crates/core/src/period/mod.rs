//! Calendar month periods.
//!
//! A `Period` identifies one monthly budget. Periods are totally ordered,
//! know their own boundaries, and render to and parse from a localized form.
//! "Now" is always an argument, never read from the system clock.

pub mod error;
pub mod types;
pub mod window;


pub use error::PeriodError;
pub use types::{Period, PeriodInput};
pub use window::YearWindow;
