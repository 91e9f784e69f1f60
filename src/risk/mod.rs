//! The heatwave-risk engine: one shared, tested implementation of the
//! scoring formula and the band classification.
//!
//! - [`score`] — fixed-weight linear score over a [`DriverSet`](crate::models::DriverSet),
//!   rounded and clamped to `0..=100`, plus what-if adjustments.
//! - [`classify`] — maps a score to a [`RiskBand`](crate::models::RiskBand).
//!
//! Every consumer (dashboard, comparison, map markers) goes through this
//! module; nothing recomputes the formula on its own.

pub mod classify;
pub mod score;

pub use self::classify::classify;
pub use self::score::{score, simulate, Adjustments};
