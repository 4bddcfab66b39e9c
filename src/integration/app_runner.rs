use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::{
    sync::{mpsc, Mutex},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{cmd::TuiCommand, cmd_executor::CmdExecutor, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        api::ApiClient,
        api_service::ApiService,
        config::Config,
        tui::{Event, TuiLike},
    },
    integration::runtime::Runtime,
    presentation::components::Components,
};

/// Drives the Elm loop: terminal events and API replies in, renders out
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike>>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    components: Components,
    api_cancel: CancellationToken,
    api_task: Option<JoinHandle<()>>,
}

enum Wake {
    Terminal(Option<Event>),
    Backend,
}

impl AppRunner {
    /// Starts the API service against `config.api.base_url` and prepares the
    /// landing view, or the sample dashboard when `preview` is set.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: Config, tui: Arc<Mutex<dyn TuiLike>>, preview: bool) -> Self {
        let initial_state = if preview {
            AppState::preview(config.clone())
        } else {
            AppState::new_with_config(config.clone())
        };
        Self::with_client(
            initial_state,
            ApiClient::new(config.api.base_url.clone()),
            tui,
        )
    }

    /// Same as `new`, with an explicit initial state and client
    pub fn with_client(
        initial_state: AppState,
        client: ApiClient,
        tui: Arc<Mutex<dyn TuiLike>>,
    ) -> Self {
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new();
        executor.set_tui_sender(tui_cmd_tx);
        let mut runtime = Runtime::new_with_executor(initial_state, executor);

        let (api_tx, api_cancel, api_service) = ApiService::new(client, runtime.get_raw_sender());
        let api_task = api_service.run();
        runtime.add_api_sender(api_tx);

        Self {
            runtime,
            tui,
            tui_cmd_rx,
            components: Components::new(),
            api_cancel,
            api_task: Some(api_task),
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Runs until the state asks to quit or the terminal stops producing events
    pub async fn run(&mut self) -> Result<()> {
        let tui = Arc::clone(&self.tui);
        tui.lock().await.enter()?;
        self.render().await?;

        loop {
            let wake = {
                let mut tui = tui.lock().await;
                tokio::select! {
                    event = tui.next() => Wake::Terminal(event),
                    _ = self.runtime.wait_for_raw_msg() => Wake::Backend,
                }
            };

            match wake {
                Wake::Terminal(None) | Wake::Terminal(Some(Event::Closed)) => {
                    log::info!("Terminal event source closed");
                    break;
                }
                Wake::Terminal(Some(Event::Render)) => {
                    self.render().await?;
                    continue;
                }
                Wake::Terminal(Some(event)) => self.forward_event(event),
                Wake::Backend => {}
            }

            self.update().await?;

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
            }
            if self.runtime.state().system.should_quit {
                break;
            }
            self.render().await?;
        }

        self.shutdown().await
    }

    fn forward_event(&mut self, event: Event) {
        let raw = match event {
            Event::Key(key) => RawMsg::Key(key),
            Event::Paste(text) => RawMsg::Paste(text),
            Event::Resize(width, height) => RawMsg::Resize(width, height),
            Event::Tick => RawMsg::Tick,
            Event::Quit => RawMsg::Quit,
            Event::Error => {
                log::warn!("Terminal reported an input error");
                return;
            }
            Event::Init | Event::Render | Event::Closed | Event::FocusGained | Event::FocusLost => return,
        };
        self.runtime.send_raw_msg(raw);
    }

    /// One update cycle plus the terminal commands it produced
    async fn update(&mut self) -> Result<()> {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
        }

        while let Ok(command) = self.tui_cmd_rx.try_recv() {
            match command {
                TuiCommand::Resize { width, height } => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                }
            }
        }
        Ok(())
    }

    async fn suspend(&mut self) -> Result<()> {
        self.tui.lock().await.suspend()?;
        // Execution continues here once the shell resumes the process
        self.tui.lock().await.resume()?;
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.update().await
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &self.components;
        self.tui
            .lock()
            .await
            .draw(&mut |frame| components.render(frame, state))
    }

    async fn shutdown(&mut self) -> Result<()> {
        log::info!("Shutting down: {:?}", self.runtime.get_stats());
        self.api_cancel.cancel();
        if let Some(task) = self.api_task.take() {
            if let Err(e) = task.await {
                log::warn!("ApiService task ended abnormally: {e}");
            }
        }
        self.tui.lock().await.exit()
    }
}
