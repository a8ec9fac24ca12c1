//! Ready-made widgets for the **datil** TUI framework.
//!
//! Every widget in this crate implements [`datil_core::Component`], so it can
//! be embedded inside any [`datil_core::Model`] and composed freely within
//! [`ratatui`] layouts.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`calendar`] | Month-grid date picker with single- and multi-select |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`date`] | Calendar arithmetic: month grids, day clamping/rolling, name tables |
//! | [`selection`] | [`DateSelection`](selection::DateSelection), ordered duplicate-free picked dates |

pub mod calendar;
pub mod date;
pub mod selection;
