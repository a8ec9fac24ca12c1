use crate::command::{Command, CommandInner};
use crate::event::TerminalEvent;
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// `TestProgram` exercises the whole init/update/view cycle from a plain
/// `#[test]` function — no TTY required. Messages produced by
/// [`Command::message`] are collected into a queue; flush them with
/// [`drain_messages`](TestProgram::drain_messages). Quit commands are
/// recorded but otherwise ignored.
///
/// # Example
///
/// ```rust,ignore
/// use datil_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<App>::new(());
/// prog.send(AppMsg::NextMonth);
/// assert_eq!(prog.model().cursor_month(), 4);
///
/// let output = prog.render_string(40, 10);
/// assert!(output.contains("April"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending: Vec<M::Message>,
    quit_requested: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    ///
    /// Messages produced by the init command are queued; call
    /// [`drain_messages`](TestProgram::drain_messages) to process them.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending: Vec::new(),
            quit_requested: false,
        };
        program.collect(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Feed a terminal event through [`Model::on_event`], updating if the
    /// model maps it to a message.
    ///
    /// Returns `true` if the event produced a message.
    pub fn send_event(&mut self, event: TerminalEvent) -> bool {
        match self.model.on_event(event) {
            Some(msg) => {
                self.send(msg);
                true
            }
            None => false,
        }
    }

    /// Process all queued messages produced by [`Command::message`].
    ///
    /// Repeatedly drains the queue, calling [`Model::update`] for each
    /// message, until no new messages are generated. Useful for testing
    /// command-chaining scenarios where one update feeds the next.
    pub fn drain_messages(&mut self) {
        while !self.pending.is_empty() {
            let messages: Vec<_> = self.pending.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect(cmd);
            }
        }
    }

    /// Take the currently queued messages without updating the model.
    ///
    /// Lets a test assert on exactly what a component reported (e.g. a
    /// selection event) instead of its effect.
    pub fn take_messages(&mut self) -> Vec<M::Message> {
        self.pending.drain(..).collect()
    }

    /// Whether any processed command requested program exit.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable reference to the model for direct test setup.
    ///
    /// Bypasses the message-driven update cycle; useful for arranging state
    /// before sending messages.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    ///
    /// Returns the raw buffer for cell-by-cell inspection (including styles).
    /// For a simpler string assertion see
    /// [`render_string`](TestProgram::render_string).
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string.
    ///
    /// Rows are concatenated and separated by newlines; trailing whitespace
    /// within each row is preserved.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = Rect::new(0, 0, width, height);
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                output.push_str(buf[(x, y)].symbol());
            }
            if y < area.bottom() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => self.pending.push(msg),
            CommandInner::Quit => self.quit_requested = true,
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect(cmd);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::widgets::Paragraph;

    // A light switch with a pull-chain: each Pull toggles, and the third
    // pull burns out the bulb (a chained message).
    struct Switch {
        on: bool,
        pulls: u32,
        burned_out: bool,
    }

    #[derive(Debug)]
    enum SwitchMsg {
        Pull,
        BurnOut,
        Quit,
    }

    impl Model for Switch {
        type Message = SwitchMsg;
        type Flags = bool;

        fn init(on: bool) -> (Self, Command<SwitchMsg>) {
            (
                Switch {
                    on,
                    pulls: 0,
                    burned_out: false,
                },
                Command::none(),
            )
        }

        fn update(&mut self, msg: SwitchMsg) -> Command<SwitchMsg> {
            match msg {
                SwitchMsg::Pull => {
                    self.on = !self.on;
                    self.pulls += 1;
                    if self.pulls >= 3 {
                        return Command::message(SwitchMsg::BurnOut);
                    }
                }
                SwitchMsg::BurnOut => {
                    self.burned_out = true;
                    self.on = false;
                }
                SwitchMsg::Quit => return Command::quit(),
            }
            Command::none()
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            let text = if self.burned_out {
                "burned out"
            } else if self.on {
                "on"
            } else {
                "off"
            };
            frame.render_widget(Paragraph::new(text), frame.area());
        }

        fn on_event(&self, event: TerminalEvent) -> Option<SwitchMsg> {
            match event {
                TerminalEvent::Key(k) if k.code == KeyCode::Char(' ') => Some(SwitchMsg::Pull),
                TerminalEvent::Key(k) if k.code == KeyCode::Char('q') => Some(SwitchMsg::Quit),
                _ => None,
            }
        }
    }

    fn key(code: KeyCode) -> TerminalEvent {
        TerminalEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn init_uses_flags() {
        let prog = TestProgram::<Switch>::new(true);
        assert!(prog.model().on);
    }

    #[test]
    fn send_updates_model() {
        let mut prog = TestProgram::<Switch>::new(false);
        prog.send(SwitchMsg::Pull);
        assert!(prog.model().on);
        prog.send(SwitchMsg::Pull);
        assert!(!prog.model().on);
    }

    #[test]
    fn send_event_maps_through_on_event() {
        let mut prog = TestProgram::<Switch>::new(false);
        assert!(prog.send_event(key(KeyCode::Char(' '))));
        assert!(prog.model().on);
        assert!(!prog.send_event(key(KeyCode::Char('x'))));
    }

    #[test]
    fn drain_processes_chained_messages() {
        let mut prog = TestProgram::<Switch>::new(false);
        prog.send(SwitchMsg::Pull);
        prog.send(SwitchMsg::Pull);
        prog.send(SwitchMsg::Pull);
        assert!(!prog.model().burned_out);
        prog.drain_messages();
        assert!(prog.model().burned_out);
    }

    #[test]
    fn take_messages_exposes_queue() {
        let mut prog = TestProgram::<Switch>::new(false);
        prog.send(SwitchMsg::Pull);
        prog.send(SwitchMsg::Pull);
        prog.send(SwitchMsg::Pull);
        let queued = prog.take_messages();
        assert_eq!(queued.len(), 1);
        assert!(matches!(queued[0], SwitchMsg::BurnOut));
        // Taking clears the queue.
        assert!(prog.take_messages().is_empty());
    }

    #[test]
    fn quit_is_recorded() {
        let mut prog = TestProgram::<Switch>::new(false);
        assert!(!prog.quit_requested());
        prog.send_event(key(KeyCode::Char('q')));
        assert!(prog.quit_requested());
    }

    #[test]
    fn render_string_shows_state() {
        let mut prog = TestProgram::<Switch>::new(false);
        assert!(prog.render_string(20, 1).contains("off"));
        prog.send(SwitchMsg::Pull);
        assert!(prog.render_string(20, 1).contains("on"));
    }
}
