#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadStatus { epoch: u64, startup: bool },
    LoadCatalog { epoch: u64 },
    Send(String),
    /// Sends `powerOn`/`powerOff` and refreshes the status without waiting for the send.
    TogglePower { power_on: bool, epoch: u64 },
}
