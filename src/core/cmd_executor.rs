use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::cmd::{ApiCall, Cmd, TuiCommand};

/// Command executor that routes Elm commands to the API service and the TUI host
#[derive(Clone, Default)]
pub struct CmdExecutor {
    api_sender: Option<mpsc::UnboundedSender<ApiCall>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    /// Create a new command executor without any service attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new command executor wired to the API service
    pub fn new_with_api(api_sender: mpsc::UnboundedSender<ApiCall>) -> Self {
        Self {
            api_sender: Some(api_sender),
            tui_sender: None,
        }
    }

    /// Add API support to existing executor
    pub fn set_api_sender(&mut self, api_sender: mpsc::UnboundedSender<ApiCall>) {
        self.api_sender = Some(api_sender);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::Api(call) => {
                if let Some(api_sender) = &self.api_sender {
                    log::debug!(
                        "CmdExecutor: routing {} for session {}",
                        call.request.name(),
                        call.session.0
                    );
                    api_sender.send(call.clone())?;
                } else {
                    log::warn!(
                        "{} ignored: ApiService not available",
                        call.request.name()
                    );
                }
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    })?;
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {}x{}",
                        width,
                        height
                    );
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{}", error_msg);
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_api_sender: self.api_sender.is_some(),
            is_api_sender_closed: self.api_sender.as_ref().map(|sender| sender.is_closed()),
            has_tui_sender: self.tui_sender.is_some(),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub has_api_sender: bool,
    pub is_api_sender_closed: Option<bool>,
    pub has_tui_sender: bool,
}
