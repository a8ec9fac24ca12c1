//! **datil** — a terminal date picker built on a small Elm-style component
//! framework for [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything you need from a
//! single dependency:
//!
//! ```toml
//! [dependencies]
//! datil = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`datil_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Program`], [`run`],
//!   [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from [`datil_widgets`],
//!   most notably [`widgets::calendar::Calendar`].
//! * [`ratatui`], [`crossterm`], and [`chrono`] are re-exported so
//!   downstream crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use datil::widgets::calendar::{self, Calendar};
//! use datil::{Command, Component, Model, TerminalEvent};
//! use ratatui::Frame;
//!
//! struct Picker {
//!     calendar: Calendar,
//! }
//!
//! enum Msg {
//!     Calendar(calendar::Message),
//! }
//!
//! impl Model for Picker {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         (Picker { calendar: Calendar::new() }, Command::none())
//!     }
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Calendar(m) => self.calendar.update(m).map(Msg::Calendar),
//!         }
//!     }
//!     fn view(&self, frame: &mut Frame) {
//!         self.calendar.view(frame, frame.area());
//!     }
//!     fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
//!         match event {
//!             TerminalEvent::Key(k) => Some(Msg::Calendar(calendar::Message::KeyPress(k))),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! fn main() {
//!     datil::run::<Picker>(()).unwrap();
//! }
//! ```

pub use datil_core::*;
pub mod widgets {
    pub use datil_widgets::*;
}

// Re-export dependencies for use in the demos and downstream crates
pub use chrono;
pub use crossterm;
pub use ratatui;
