use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects requested by `update`; the executor performs them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Deliver a canned agent answer after `delay_ms`
    ScheduleAgentReply { delay_ms: u64, text: String },

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; delivered via the render request channel and coalesced by AppRunner
    RequestRender,

    // Logging related
    LogError { message: String },
    LogInfo { message: String },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command completes after `execute` returns
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::ScheduleAgentReply { .. } => true,
            Cmd::Tui(..)
            | Cmd::RequestRender
            | Cmd::LogError { .. }
            | Cmd::LogInfo { .. }
            | Cmd::None => false,
            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }

    /// Human-readable command name for execution logs
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::ScheduleAgentReply { .. } => "ScheduleAgentReply",
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui::Resize",
            Cmd::RequestRender => "RequestRender",
            Cmd::LogError { .. } => "LogError",
            Cmd::LogInfo { .. } => "LogInfo",
            Cmd::Batch(..) => "Batch",
            Cmd::None => "None",
        }
    }
}
