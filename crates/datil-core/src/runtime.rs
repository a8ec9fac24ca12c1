use crate::command::{Command, CommandInner};
use crate::event::TerminalEvent;
use crate::model::Model;
use crossterm::event::{self, KeyCode, KeyModifiers};
use crossterm::{
    cursor, execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::VecDeque;
use std::io::{stdout, Stdout, Write};
use std::time::Duration;

/// Errors that can occur while initializing or running a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// An I/O error from terminal setup, rendering, or teardown.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration options for a [`Program`].
///
/// All fields have defaults; use struct update syntax to override only the
/// options you need:
///
/// ```rust,ignore
/// use datil_core::ProgramOptions;
///
/// let opts = ProgramOptions {
///     title: Some("My App".into()),
///     ..ProgramOptions::default()
/// };
/// ```
pub struct ProgramOptions {
    /// How long to block waiting for a terminal event before checking for
    /// pending work (default: 250ms).
    pub tick_rate: Duration,
    /// Start in alternate screen (default: true).
    pub alt_screen: bool,
    /// Enable mouse event capture (default: false).
    pub mouse_capture: bool,
    /// Set the terminal title.
    pub title: Option<String>,
    /// Whether to catch panics and restore the terminal (default: true).
    pub catch_panics: bool,
    /// Quit on Ctrl+C (default: true).
    pub ctrl_c_quits: bool,
    /// Log file path for debugging TUI apps whose stdout is the UI.
    pub log_file: Option<std::path::PathBuf>,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            alt_screen: true,
            mouse_capture: false,
            title: None,
            catch_panics: true,
            ctrl_c_quits: true,
            log_file: None,
        }
    }
}

/// The program runtime. Manages terminal setup, the event loop, and the full
/// [`Model`] lifecycle.
///
/// `Program` wires a [`Model`] to a real terminal via [`ratatui`]/[`crossterm`]
/// and drives the init/update/view loop until the model returns
/// [`Command::quit()`]. The loop is fully synchronous: it blocks on
/// [`crossterm::event::read`], maps each event through
/// [`Model::on_event`], and runs the resulting update to completion before
/// reading the next event.
///
/// # Example
///
/// ```rust,ignore
/// use datil_core::{Program, ProgramError};
///
/// fn main() -> Result<(), ProgramError> {
///     let model = Program::<MyApp>::new(())?.run()?;
///     // `model` is the final state after quit
///     Ok(())
/// }
/// ```
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    queue: VecDeque<M::Message>,
    options: ProgramOptions,
    needs_redraw: bool,
    should_quit: bool,
    log_file: Option<std::fs::File>,
}

impl<M: Model> Program<M> {
    /// Create a new program with default options.
    ///
    /// Returns an error if terminal initialization fails.
    pub fn new(flags: M::Flags) -> Result<Self, ProgramError> {
        Self::with_options(flags, ProgramOptions::default())
    }

    /// Create a new program with custom options.
    ///
    /// Returns an error if terminal initialization fails.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        let log_file = match options.log_file {
            Some(ref path) => Some(log_to_file(path)?),
            None => None,
        };

        let (model, init_cmd) = M::init(flags);
        let terminal = init_terminal(&options)?;

        let mut program = Self {
            model,
            terminal,
            queue: VecDeque::new(),
            options,
            needs_redraw: true,
            should_quit: false,
            log_file,
        };

        program.debug_log("program initialized");
        program.execute_command(init_cmd);

        Ok(program)
    }

    /// Run the program. Blocks until quit, returning the final model state.
    pub fn run(mut self) -> Result<M, ProgramError> {
        loop {
            while let Some(msg) = self.queue.pop_front() {
                self.process_message(msg);
            }

            if self.should_quit {
                break;
            }

            if self.needs_redraw {
                self.render()?;
                self.needs_redraw = false;
            }

            if !event::poll(self.options.tick_rate)? {
                continue;
            }

            let raw = event::read()?;
            if let crossterm::event::Event::Key(key) = &raw {
                if self.options.ctrl_c_quits
                    && key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    self.debug_log("ctrl+c, quitting");
                    break;
                }
            }

            if let Some(ev) = TerminalEvent::from_crossterm(raw) {
                // Resizes always invalidate the frame, whether or not the
                // model maps them to a message.
                if matches!(ev, TerminalEvent::Resize(..)) {
                    self.needs_redraw = true;
                }
                if let Some(msg) = self.model.on_event(ev) {
                    self.process_message(msg);
                }
            }
        }

        self.debug_log("shutting down");
        restore_terminal(&self.options)?;
        Ok(self.model)
    }

    fn process_message(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.execute_command(cmd);
        self.needs_redraw = true;
    }

    fn execute_command(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => self.queue.push_back(msg),
            CommandInner::Quit => self.should_quit = true,
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_command(cmd);
                }
            }
        }
    }

    /// Write a debug message to the log file, if configured.
    fn debug_log(&mut self, msg: &str) {
        if let Some(ref mut f) = self.log_file {
            let _ = writeln!(f, "{msg}");
        }
    }

    fn render(&mut self) -> Result<(), ProgramError> {
        self.terminal.draw(|frame| {
            self.model.view(frame);
        })?;
        Ok(())
    }
}

fn init_terminal(
    options: &ProgramOptions,
) -> Result<Terminal<CrosstermBackend<Stdout>>, ProgramError> {
    // Install a panic hook that restores the terminal (only once to avoid
    // stacking hooks across repeated Program constructions).
    if options.catch_panics {
        use std::sync::Once;
        static HOOK_INSTALLED: Once = Once::new();
        let alt_screen = options.alt_screen;
        HOOK_INSTALLED.call_once(|| {
            let original_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = restore_terminal_minimal(alt_screen);
                original_hook(info);
            }));
        });
    }

    enable_raw_mode()?;
    let mut writer = stdout();

    if options.alt_screen {
        execute!(writer, EnterAlternateScreen)?;
    }
    if options.mouse_capture {
        execute!(writer, event::EnableMouseCapture)?;
    }
    if let Some(ref title) = options.title {
        execute!(writer, SetTitle(title))?;
    }
    execute!(writer, cursor::Hide)?;

    let backend = CrosstermBackend::new(writer);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(options: &ProgramOptions) -> Result<(), ProgramError> {
    restore_terminal_minimal(options.alt_screen)?;
    Ok(())
}

fn restore_terminal_minimal(alt_screen: bool) -> Result<(), std::io::Error> {
    // Best-effort cleanup: continue even if individual steps fail, so we
    // restore as much terminal state as possible.
    let r1 = disable_raw_mode();
    let mut writer = stdout();
    execute!(writer, event::DisableMouseCapture).ok();
    execute!(writer, cursor::Show).ok();
    if alt_screen {
        execute!(writer, LeaveAlternateScreen).ok();
    }
    r1
}

/// Open a log file for debugging TUI applications.
///
/// Returns a file handle opened in append mode, usable with `writeln!` or a
/// logging framework. [`ProgramOptions::log_file`] uses this internally.
///
/// # Example
///
/// ```no_run
/// use datil_core::runtime::log_to_file;
/// use std::io::Write;
///
/// let mut f = log_to_file("debug.log").unwrap();
/// writeln!(f, "debug message").unwrap();
/// ```
pub fn log_to_file(path: impl AsRef<std::path::Path>) -> Result<std::fs::File, std::io::Error> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}
