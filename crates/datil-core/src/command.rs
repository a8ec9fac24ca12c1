/// A side effect returned from [`Model::update`](crate::Model::update) or
/// [`Model::init`](crate::Model::init).
///
/// The datil runtime is fully synchronous: every command is executed to
/// completion before the next event is read. Commands therefore cover only
/// immediate messages, batches of those, and program exit.
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::none();
///
/// // Deliver a message on the next loop iteration:
/// let cmd = Command::message(Msg::SelectionChanged);
///
/// // Quit the program:
/// let cmd = Command::quit();
/// ```
pub struct Command<Msg> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg> {
    None,
    Message(Msg),
    Quit,
    Batch(Vec<Command<Msg>>),
}

impl<Msg> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Send a message back into the event loop.
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Message(msg),
        }
    }

    /// Quit the program.
    pub fn quit() -> Self {
        Command {
            inner: CommandInner::Quit,
        }
    }

    /// Run several commands in order.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let mut cmds: Vec<_> = cmds.into_iter().collect();
        match cmds.len() {
            0 => Command::none(),
            1 => cmds.pop().unwrap(),
            _ => Command {
                inner: CommandInner::Batch(cmds),
            },
        }
    }

    /// Transform the message type (for component composition).
    ///
    /// A parent model embedding a [`Component`](crate::Component) calls `map`
    /// on the command the child returned, lifting the child's message type
    /// into its own.
    pub fn map<NewMsg>(self, f: impl Fn(Msg) -> NewMsg + Copy) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Message(msg) => Command::message(f(msg)),
            CommandInner::Quit => Command::quit(),
            CommandInner::Batch(cmds) => Command {
                inner: CommandInner::Batch(cmds.into_iter().map(|cmd| cmd.map(f)).collect()),
            },
        }
    }

    // --- Inspection methods (useful for testing) ---

    /// Returns `true` if this is a no-op command.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// If this command is an immediate message, return it.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Message(msg) => Some(msg),
            _ => None,
        }
    }

    /// If this command is a batch, return the inner commands.
    pub fn into_batch(self) -> Option<Vec<Command<Msg>>> {
        match self.inner {
            CommandInner::Batch(cmds) => Some(cmds),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_none() {
        let cmd: Command<()> = Command::none();
        assert!(cmd.is_none());
    }

    #[test]
    fn message_round_trips() {
        let cmd: Command<i32> = Command::message(42);
        assert_eq!(cmd.into_message(), Some(42));
    }

    #[test]
    fn quit_is_not_a_message() {
        let cmd: Command<i32> = Command::quit();
        assert!(matches!(cmd.inner, CommandInner::Quit));
        assert!(Command::<i32>::quit().into_message().is_none());
    }

    #[test]
    fn batch_empty_collapses_to_none() {
        let cmd: Command<()> = Command::batch(vec![]);
        assert!(cmd.is_none());
    }

    #[test]
    fn batch_single_unwraps() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(7)]);
        assert_eq!(cmd.into_message(), Some(7));
    }

    #[test]
    fn batch_multiple_stays_batch() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::message(2)]);
        let inner = cmd.into_batch().expect("batch");
        assert_eq!(inner.len(), 2);
    }

    #[test]
    fn map_message() {
        let cmd: Command<i32> = Command::message(3);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert_eq!(mapped.into_message(), Some("3".to_string()));
    }

    #[test]
    fn map_quit_stays_quit() {
        let cmd: Command<i32> = Command::quit();
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert!(matches!(mapped.inner, CommandInner::Quit));
    }

    #[test]
    fn map_batch_maps_each_inner() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::quit()]);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        let inner = mapped.into_batch().expect("batch");
        assert_eq!(inner.len(), 2);
        assert!(matches!(inner[0].inner, CommandInner::Message(ref s) if s == "1"));
        assert!(matches!(inner[1].inner, CommandInner::Quit));
    }
}
