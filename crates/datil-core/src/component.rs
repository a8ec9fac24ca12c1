use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) with one key difference: its
/// [`view`](Component::view) method receives an `area: Rect`, making
/// components composable within layouts. A parent model decides *where* each
/// child renders by passing it a sub-region of the frame, and routes input by
/// wrapping the child's message type in one of its own variants.
///
/// # Composition pattern
///
/// ```rust,ignore
/// use datil_core::{Command, Component, Model, TerminalEvent};
///
/// struct App { picker: Calendar }
///
/// enum AppMsg { Picker(calendar::Message) }
///
/// impl Model for App {
///     type Message = AppMsg;
///     type Flags = ();
///
///     fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///         match msg {
///             AppMsg::Picker(m) => self.picker.update(m).map(AppMsg::Picker),
///         }
///     }
///
///     fn on_event(&self, event: TerminalEvent) -> Option<AppMsg> {
///         match event {
///             TerminalEvent::Key(k) => Some(AppMsg::Picker(calendar::Message::KeyPress(k))),
///             _ => None,
///         }
///     }
///     // init / view elided
/// }
/// ```
pub trait Component {
    /// The component's internal message type.
    ///
    /// Parent models wrap this in one of their own message variants so that
    /// events can be routed to the correct child.
    type Message;

    /// Process a message, mutate state, and return a [`Command`].
    ///
    /// The returned command uses the component's own `Message` type; the
    /// parent calls [`.map()`](Command::map) to lift it into the parent
    /// message type.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus.
    ///
    /// A hint for input routing: a parent can query `focused()` to decide
    /// which child should receive keyboard events. Defaults to `false`.
    fn focused(&self) -> bool {
        false
    }
}
