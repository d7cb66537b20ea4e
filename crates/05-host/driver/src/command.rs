use crossbeam_channel::Sender;

/// Control messages accepted by a running [`Driver`](crate::Driver).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Register the combat units and mark the script started.
    Start,
    /// Unregister the combat units; scanning continues.
    Stop,
    /// Leave the loop after the current cycle.
    Shutdown,
}

/// Cloneable sender for [`Command`]s.
#[derive(Clone, Debug)]
pub struct DriverHandle {
    pub(crate) tx: Sender<Command>,
}

impl DriverHandle {
    /// Sends `cmd`; false once the driver is gone.
    pub fn send(&self, cmd: Command) -> bool {
        self.tx.send(cmd).is_ok()
    }

    /// Shorthand for [`Command::Start`].
    pub fn start(&self) -> bool {
        self.send(Command::Start)
    }

    /// Shorthand for [`Command::Stop`].
    pub fn stop(&self) -> bool {
        self.send(Command::Stop)
    }

    /// Shorthand for [`Command::Shutdown`].
    pub fn shutdown(&self) -> bool {
        self.send(Command::Shutdown)
    }
}
