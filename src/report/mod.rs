//! Report renderers for scored taluks.
//!
//! - [`terminal`] — colored dashboard views (risk card, driver tables,
//!   overview/comparison/what-if/map); respects `--verbose` / `--quiet`.
//!
//! JSON output is handled in `main` by serializing the same models.

pub mod terminal;
