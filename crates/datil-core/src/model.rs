use crate::command::Command;
use crate::event::TerminalEvent;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// Every datil application implements `Model`. The runtime drives a
/// synchronous **init -> view -> event -> update** cycle:
///
/// 1. [`init`](Model::init) creates the initial state and may return a
///    [`Command`] (e.g. an initial message).
/// 2. [`view`](Model::view) renders the current state to a [`ratatui::Frame`].
/// 3. A terminal event arrives and [`on_event`](Model::on_event) maps it into
///    the application's message type.
/// 4. [`update`](Model::update) processes the message, mutates state, and
///    optionally returns a [`Command`] for further messages or quitting.
/// 5. Steps 2–4 repeat until a command requests exit.
///
/// Every step runs to completion on the calling thread; there is no
/// background work and no message can interleave with another update.
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized {
    /// The application's message type.
    ///
    /// Every event that can affect the application state is represented as a
    /// variant of this type. Messages come from [`on_event`](Model::on_event)
    /// or from [`Command::message`].
    type Message;

    /// Initialization data passed to [`Model::init`].
    ///
    /// Use `()` when no startup data is needed.
    type Flags;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command.
    ///
    /// This is the heart of the application logic. Pattern-match on the
    /// incoming message, update `self`, and return a [`Command`] describing
    /// any follow-up the runtime should perform. The runtime re-renders after
    /// every update.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state to a ratatui [`Frame`].
    ///
    /// This should be a pure function of `&self`.
    fn view(&self, frame: &mut Frame);

    /// Map a terminal event into an application message.
    ///
    /// Called for every event the runtime reads. Return `None` to discard
    /// the event. This is where key bindings live; components typically
    /// expose a `KeyPress` message variant that the host forwards wholesale.
    fn on_event(&self, event: TerminalEvent) -> Option<Self::Message>;
}
