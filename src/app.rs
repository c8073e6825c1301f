use crate::event::{AppEvent, Event, EventHandler};
use color_eyre::Result;
use ratatui::{
    DefaultTerminal,
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use simple_chart::{
    config::AppConfig,
    previews::{self, Preview},
};
use std::path::PathBuf;
use tracing::{error, info};

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Charts on offer, one shown at a time
    pub previews: Vec<Preview>,
    /// Index into `previews`
    pub selected: usize,
    /// Config file given on the command line, reread on reload
    pub config_path: Option<PathBuf>,
    /// Last reload failure, shown in the status line
    pub status: Option<String>,
    /// Event handler.
    pub events: EventHandler,
}

impl App {
    /// Constructs a new instance of [`App`].
    pub fn new(
        config: &AppConfig,
        config_path: Option<PathBuf>,
        events: EventHandler,
    ) -> Result<Self> {
        let previews = previews::from_config(config)?;
        info!("Starting with {} previews", previews.len());

        Ok(Self {
            running: true,
            previews,
            selected: 0,
            config_path,
            status: None,
            events,
        })
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
                needs_redraw = false;
            }

            match self.events.next().await? {
                Event::Tick => {}
                Event::Crossterm(event) => match event {
                    crossterm::event::Event::Key(key_event) => self.handle_key_events(key_event),
                    crossterm::event::Event::Resize(_, _) => needs_redraw = true,
                    _ => {}
                },
                Event::App(app_event) => {
                    self.handle_app_event(app_event);
                    needs_redraw = true;
                }
            }
        }

        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) {
        if key_event.kind != KeyEventKind::Press {
            return;
        }

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => {
                self.events.send(AppEvent::Quit)
            }
            KeyCode::Down | KeyCode::Char('j') => self.events.send(AppEvent::NextChart),
            KeyCode::Up | KeyCode::Char('k') => self.events.send(AppEvent::PreviousChart),
            KeyCode::Char('r') => self.events.send(AppEvent::Reload),
            _ => {}
        }
    }

    pub fn handle_app_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::NextChart => self.next_chart(),
            AppEvent::PreviousChart => self.previous_chart(),
            AppEvent::Reload => self.reload(),
            AppEvent::Quit => self.quit(),
        }
    }

    pub fn next_chart(&mut self) {
        if !self.previews.is_empty() {
            self.selected = (self.selected + 1) % self.previews.len();
        }
    }

    pub fn previous_chart(&mut self) {
        if !self.previews.is_empty() {
            self.selected = (self.selected + self.previews.len() - 1) % self.previews.len();
        }
    }

    pub fn selected_preview(&self) -> Option<&Preview> {
        self.previews.get(self.selected)
    }

    /// Rereads the config. On failure the current previews stay up.
    pub fn reload(&mut self) {
        let loaded = AppConfig::load_or_default(self.config_path.as_deref())
            .and_then(|config| Ok(previews::from_config(&config)?));

        match loaded {
            Ok(previews) => {
                info!("Reloaded {} previews", previews.len());
                self.selected = self.selected.min(previews.len().saturating_sub(1));
                self.previews = previews;
                self.status = None;
            }
            Err(e) => {
                error!("Reload failed: {}", e);
                self.status = Some(format!("Reload failed: {}", e));
            }
        }
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
