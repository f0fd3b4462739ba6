//! Budget calculation engine for Tirelire.
//!
//! This crate contains pure calculations with no I/O and no hidden clock.
//! Inputs are validated once at the boundary; every calculator after that
//! works on validated types and integer minor units.
//!
//! # Modules
//!
//! - `period` - Calendar months: ordering, boundaries, formatting
//! - `budget` - Budget records and entry validation
//! - `consumption` - Planned versus actual per line
//! - `formulas` - Ending balance, available to spend, daily allowance
//! - `rollover` - Carrying balances from month to month

pub mod budget;
pub mod consumption;
pub mod formulas;
pub mod period;
pub mod rollover;

#[cfg(test)]
pub(crate) mod testing;
