//! Core runtime for the **datil** TUI framework.
//!
//! `datil-core` provides the traits, types, and runtime that power every
//! datil application. The design follows the [Elm Architecture]: your
//! program is expressed as a pure **init -> update -> view** cycle, with the
//! few side effects that exist (messages, quitting) pushed to the edges
//! through [`Command`]s. Everything runs synchronously on one thread: a
//! terminal event is read, mapped to a message, the update runs to
//! completion, and the frame is redrawn.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view / on_event) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Describes a follow-up for the runtime (message, quit, batch) |
//! | [`TerminalEvent`] | Key / mouse / resize / paste input |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] without a terminal |
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{log_to_file, Program, ProgramError, ProgramOptions};

/// Run a datil application with default options. Blocks until quit.
pub fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run()
}

/// Run with custom options.
pub fn run_with<M: Model>(flags: M::Flags, options: ProgramOptions) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run()
}
