use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::tui::{self, event_source::EventSource},
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// Drives the dashboard: pulls terminal events, runs the update cycle,
/// applies terminal commands and renders when something asked for it.
pub struct AppRunner {
    runtime: Runtime,
    renderer: Renderer,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    events: EventSource,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_rx: mpsc::UnboundedReceiver<()>,
    last_size: Option<(u16, u16)>,
}

impl AppRunner {
    /// Runner reading events from the same TUI it draws to
    pub fn new(state: AppState, tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Result<Self> {
        let events = EventSource::real(tui.clone());
        Self::with_event_source(state, tui, events)
    }

    /// Runner with an explicit event source (tests feed scripted events)
    pub fn with_event_source(
        state: AppState,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        events: EventSource,
    ) -> Result<Self> {
        let mut runtime = Runtime::new_with_executor(state);
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_tx)?;
        runtime.add_render_request_sender(render_tx)?;

        Ok(Self {
            runtime,
            renderer: Renderer::new(),
            tui,
            events,
            tui_rx,
            render_rx,
            last_size: None,
        })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Run until the state asks to quit or the event source is exhausted.
    pub async fn run(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.enter()?;
            let size = tui.size()?;
            self.runtime
                .send_raw_msg(RawMsg::Resize(size.width, size.height));
        }
        self.step(true).await?;

        while !self.runtime.state().system.should_quit {
            let event = self.events.next().await;
            let saw_tui_render = self.forward_event(event);
            self.step(saw_tui_render).await?;

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
            }
        }

        self.tui.lock().await.exit()?;
        log::info!("dashboard closed");
        Ok(())
    }

    /// Translate a terminal event into raw messages.
    /// Returns whether the event itself calls for a redraw.
    fn forward_event(&mut self, event: Option<tui::Event>) -> bool {
        let Some(event) = event else {
            // Closed event stream
            self.runtime.send_raw_msg(RawMsg::Quit);
            return false;
        };
        let redraw = matches!(event, tui::Event::Render) || event.is_input();
        match event {
            tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            tui::Event::Quit | tui::Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            tui::Event::Error => self
                .runtime
                .send_raw_msg(RawMsg::Error("terminal event stream failed".to_string())),
            tui::Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            tui::Event::Mouse(mouse) => self.runtime.send_raw_msg(RawMsg::Mouse(mouse)),
            tui::Event::Paste(text) => self.runtime.send_raw_msg(RawMsg::Paste(text)),
            tui::Event::Render
            | tui::Event::Init
            | tui::Event::FocusGained
            | tui::Event::FocusLost => {}
        }
        redraw
    }

    /// One update cycle followed by coalesced resize and render.
    async fn step(&mut self, saw_tui_render: bool) -> Result<()> {
        match self.runtime.run_update_cycle() {
            Ok(log) => {
                for line in log.iter().filter(|line| line.starts_with('✗')) {
                    log::warn!("{line}");
                }
            }
            Err(e) => {
                log::error!("Runtime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }
        }

        let mut resizes = Vec::new();
        while let Ok(TuiCommand::Resize { width, height }) = self.tui_rx.try_recv() {
            resizes.push((width, height));
        }
        let resized = match Coalescer::decide_resize(self.last_size, &resizes) {
            Some((width, height)) => {
                self.tui
                    .lock()
                    .await
                    .resize(Rect::new(0, 0, width, height))?;
                self.last_size = Some((width, height));
                true
            }
            None => false,
        };

        let mut queued_render_reqs = 0;
        while self.render_rx.try_recv().is_ok() {
            queued_render_reqs += 1;
        }

        if Coalescer::decide_render(queued_render_reqs, saw_tui_render || resized) {
            self.renderer
                .render(&self.tui, self.runtime.state())
                .await?;
        }
        Ok(())
    }

    async fn suspend(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.step(true).await
    }
}
