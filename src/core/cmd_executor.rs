use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    raw_msg::RawMsg,
};

/// Performs the side effects requested by `update`.
/// Every sink is optional so tests can wire only what they observe.
#[derive(Clone, Default)]
pub struct CmdExecutor {
    raw_sender: Option<mpsc::UnboundedSender<RawMsg>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject the runtime's raw message sender used to deliver async results.
    pub fn set_raw_sender(&mut self, sender: mpsc::UnboundedSender<RawMsg>) {
        self.raw_sender = Some(sender);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::ScheduleAgentReply { delay_ms, text } => {
                self.schedule_agent_reply(*delay_ms, text.clone());
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    })?;
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            }

            Cmd::RequestRender => {
                if let Some(tx) = &self.render_req_sender {
                    // A closed channel only means the runner is shutting down
                    let _ = tx.send(());
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    fn schedule_agent_reply(&self, delay_ms: u64, text: String) {
        let Some(sender) = self.raw_sender.clone() else {
            log::warn!("CmdExecutor: raw sender not configured; dropping agent reply");
            return;
        };
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            log::warn!("CmdExecutor: no tokio runtime; dropping agent reply");
            return;
        };
        handle.spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            if sender.send(RawMsg::AgentReply(text)).is_err() {
                log::debug!("agent reply dropped, runtime is gone");
            }
        });
    }

    /// Execute multiple commands, logging failures instead of stopping
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        execution_log
    }
}
