use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use notetaker_auth::SessionManager;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;

use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::commands::{executor, handlers, AppCommand};
use crate::input::KeyEvent;
use crate::log_buffer::LogBuffer;
use crate::router::Route;
use crate::state::{reducer, AppState};
use crate::ui::screens::Screen;

type Term = Terminal<CrosstermBackend<std::io::Stdout>>;

pub struct App {
    session: Arc<SessionManager>,
    log_buffer: LogBuffer,
    route: Option<Route>,
}

impl App {
    pub fn new(session: SessionManager, log_buffer: LogBuffer) -> Self {
        Self {
            session: Arc::new(session),
            log_buffer,
            route: None,
        }
    }

    /// Open this route instead of the default start screen
    pub fn with_route(mut self, route: Option<Route>) -> Self {
        self.route = route;
        self
    }

    pub async fn run(&self) -> Result<()> {
        tracing::info!("notetaker starting against {}", self.session.settings().api_url);

        let mut terminal = self.init()?;
        let result = self.event_loop(&mut terminal).await;

        tracing::info!("Cleaning up application");
        self.exit(terminal)?;

        result
    }

    async fn event_loop(&self, terminal: &mut Term) -> Result<()> {
        let (data_tx, mut data_rx) = tokio::sync::mpsc::unbounded_channel();

        let mut ui_state = AppState::with_session(self.session.current());
        let mut task_manager = BackgroundTaskManager::new();
        let data_loader = DataLoader::new(self.session.clone(), data_tx);

        let mut event_stream = EventStream::new();

        let route = self
            .route
            .clone()
            .unwrap_or_else(|| Route::initial(ui_state.is_authenticated()));
        executor::execute_command(
            AppCommand::Open(route),
            &mut ui_state,
            &mut task_manager,
            &data_loader,
        );

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        loop {
            if let Screen::Logs(logs_state) = ui_state.current_screen_mut() {
                logs_state.total_entries = self.log_buffer.len();
            }

            terminal.draw(|f| {
                crate::ui::render_app(f, &ui_state, &self.log_buffer);
            })?;

            tokio::select! {
                _ = interval.tick() => {
                    ui_state.tick();
                }
                Some(Ok(event)) = event_stream.next() => {
                    match event {
                        Event::Key(key) if matches!(key.kind, KeyEventKind::Press) => {
                            // Don't log when on logs screen to avoid feedback loop
                            let on_logs_screen = matches!(ui_state.current_screen(), Screen::Logs(_));
                            if let Some(command) = handlers::handle_key_input(KeyEvent::from(key), &ui_state) {
                                if !on_logs_screen {
                                    tracing::debug!("Executing command: {:?}", command);
                                }
                                executor::execute_command(
                                    command,
                                    &mut ui_state,
                                    &mut task_manager,
                                    &data_loader,
                                );
                            }
                        }
                        _ => {
                            // Ignore other events
                        }
                    }
                }
                Some(data_event) = data_rx.recv() => {
                    tracing::debug!("Received data event for task {}", data_event.task_id());
                    if let Some(command) = reducer::reduce_data_event(&mut ui_state, data_event) {
                        executor::execute_command(
                            command,
                            &mut ui_state,
                            &mut task_manager,
                            &data_loader,
                        );
                    }
                }
            }

            if ui_state.should_quit {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        task_manager.cancel_all();
        Ok(())
    }

    fn init(&self) -> Result<Term, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(&self, mut terminal: Term) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}
