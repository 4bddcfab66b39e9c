use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::core::{
    cmd::{ApiCall, Cmd, TuiCommand},
    cmd_executor::CmdExecutor,
    msg::Msg,
    raw_msg::RawMsg,
    state::{dashboard::Tab, AppState},
    translator::translate_raw_to_domain,
    update::update,
};

/// Owns the state and the message/command queues of the Elm loop
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    pub fn new_with_executor(initial_state: AppState, executor: CmdExecutor) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(executor);
        runtime
    }

    pub fn new_with_api_executor(
        initial_state: AppState,
        api_sender: mpsc::UnboundedSender<ApiCall>,
    ) -> Self {
        Self::new_with_executor(initial_state, CmdExecutor::new_with_api(api_sender))
    }

    pub fn add_tui_sender(
        &mut self,
        tui_sender: mpsc::UnboundedSender<TuiCommand>,
    ) -> Result<(), String> {
        if let Some(executor) = &mut self.cmd_executor {
            executor.set_tui_sender(tui_sender);
            Ok(())
        } else {
            Err("No executor available. Use new_with_executor() first.".to_string())
        }
    }

    /// Connects the executor to a running `ApiService`
    pub fn add_api_sender(&mut self, api_sender: mpsc::UnboundedSender<ApiCall>) {
        match &mut self.cmd_executor {
            Some(executor) => executor.set_api_sender(api_sender),
            None => self.cmd_executor = Some(CmdExecutor::new_with_api(api_sender)),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Waits for the next message on the raw channel and queues it.
    ///
    /// Cancel-safe, so it can sit in a `select!` next to terminal events.
    pub async fn wait_for_raw_msg(&mut self) {
        if let Some(raw_msg) = self.raw_msg_rx.recv().await {
            self.raw_msg_queue.push_back(raw_msg);
        }
    }

    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let commands = self.pending_commands();
        let Some(executor) = self.cmd_executor.as_ref() else {
            return Err(
                "No command executor available. Use new_with_executor() to configure.".to_string(),
            );
        };
        if commands.is_empty() {
            return Ok(vec![]);
        }

        executor
            .execute_commands(&commands)
            .map_err(|e| format!("Command execution failed: {e}"))
    }

    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::trace!("Processing {msg:?}");
        }
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update(msg, state);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            self.raw_msg_queue.push_back(raw_msg);
        }
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.msg_queue.push_back(msg);
        }

        // Translate one raw message at a time so each sees the state left by the previous one
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            self.msg_queue
                .extend(translate_raw_to_domain(raw_msg, &self.state));
            while let Some(msg) = self.msg_queue.pop_front() {
                all_commands.extend(self.process_message(msg));
            }
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    pub fn get_stats(&self) -> RuntimeStats {
        let has_api_support = self
            .cmd_executor
            .as_ref()
            .map(|executor| executor.get_stats().has_api_sender)
            .unwrap_or(false);

        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            is_logged_in: self.state.is_logged_in(),
            active_tab: self.state.dashboard().map(|dashboard| dashboard.active_tab),
            has_executor: self.cmd_executor.is_some(),
            has_api_support,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub is_logged_in: bool,
    pub active_tab: Option<Tab>,
    pub has_executor: bool,
    pub has_api_support: bool,
}
