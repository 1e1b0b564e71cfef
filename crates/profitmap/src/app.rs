use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::parameters_panel::ParametersPanel;
use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::event::{AppKeyEvent, KeyCode};
use crate::platform::Storage;
use crate::screens::{efficiency::EfficiencyScreen, profit::ProfitScreen, surface::SurfaceScreen};
use crate::state::{AppState, Focus, TabId, params_from_query};

/// Dashboard shared by the terminal and browser front ends.
///
/// Key handling and drawing are platform independent; only the event loop
/// in [`App::run`] is native.
pub struct App {
    state: AppState,
    storage: Box<dyn Storage>,
    tab_bar: TabBar,
    status_bar: StatusBar,
    parameters_panel: ParametersPanel,
    efficiency_screen: EfficiencyScreen,
    profit_screen: ProfitScreen,
    surface_screen: SurfaceScreen,
}

impl App {
    /// Create the app, reading configuration and parameters from `storage`.
    ///
    /// Load failures fall back to defaults and are reported in the status bar.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        let mut errors = Vec::new();

        let config = storage.load_config().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load config, using defaults");
            errors.push(format!("Config: {}", e));
            Default::default()
        });

        let params = match storage.load_query() {
            Ok(Some(query)) => {
                tracing::info!(query = %query, "Loaded parameters");
                params_from_query(&query)
            }
            Ok(None) => Default::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load parameters, using defaults");
                errors.push(format!("Parameters: {}", e));
                Default::default()
            }
        };

        let mut state = AppState::new(params, config);
        if !errors.is_empty() {
            state.set_error(errors.join("; "));
        }

        Self {
            state,
            storage,
            tab_bar: TabBar,
            status_bar: StatusBar,
            parameters_panel: ParametersPanel,
            efficiency_screen: EfficiencyScreen,
            profit_screen: ProfitScreen,
            surface_screen: SurfaceScreen,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Write the current parameters to the query string sink
    fn save(&mut self) {
        let query = self.state.query_string();
        match self.storage.save_query(&query) {
            Ok(()) => {
                tracing::info!(query = %query, "Parameters saved");
                self.state.mark_saved();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save parameters");
                self.state.set_error(format!("Failed to save: {}", e));
            }
        }
    }

    /// Quit on native; the browser tab cannot be closed from here
    fn request_exit(&mut self) -> EventResult {
        if cfg!(feature = "native") {
            self.state.exit = true;
        } else {
            tracing::info!("Exit requested, ignored in the browser");
        }
        EventResult::Exit
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: AppKeyEvent) -> EventResult {
        self.state.status_message = None;

        // Global key bindings
        match key.code {
            KeyCode::Char('q') if key.no_modifiers() => return self.request_exit(),
            KeyCode::Char('c') if key.ctrl() => return self.request_exit(),
            KeyCode::Char('s') if key.ctrl() => {
                self.save();
                return EventResult::Handled;
            }
            KeyCode::Char('r') if key.no_modifiers() => {
                self.state.reset_params();
                return EventResult::Handled;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return EventResult::Handled;
            }
            KeyCode::Tab => {
                self.state.toggle_focus();
                return EventResult::Handled;
            }
            _ if key.is_back_tab() => {
                self.state.toggle_focus();
                return EventResult::Handled;
            }
            _ => {}
        }

        // Try tab bar first
        let result = self.tab_bar.handle_key(key.clone(), &mut self.state);
        if result != EventResult::NotHandled {
            return result;
        }

        let result = match self.state.focus {
            Focus::Parameters => self.parameters_panel.handle_key(key, &mut self.state),
            Focus::Chart => match self.state.active_tab {
                TabId::Efficiency => self.efficiency_screen.handle_key(key, &mut self.state),
                TabId::Profit => self.profit_screen.handle_key(key, &mut self.state),
                TabId::Surface => self.surface_screen.handle_key(key, &mut self.state),
            },
        };

        if result == EventResult::Exit {
            return self.request_exit();
        }
        result
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        // Create main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Efficiency => self.efficiency_screen.render(frame, area, &self.state),
            TabId::Profit => self.profit_screen.render(frame, area, &self.state),
            TabId::Surface => self.surface_screen.render(frame, area, &self.state),
        }
    }
}

#[cfg(feature = "native")]
impl App {
    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        if self.state.dirty {
            tracing::info!(
                query = %self.state.query_string(),
                "Exiting with unsaved parameters"
            );
        }
        Ok(())
    }

    fn handle_events(&mut self) -> std::io::Result<()> {
        use crossterm::event::{self, Event, KeyEventKind};

        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key(key_event.into());
            }
            _ => {}
        };
        Ok(())
    }

    /// Write the current surface as JSON
    pub fn export(&self, path: &std::path::Path) -> color_eyre::Result<()> {
        crate::export::export_surface(path, &self.state)
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::data::config_data::DashboardConfig;
    use crate::platform::StorageError;
    use profitmap_core::ProfitParameters;
    use ratatui::{Terminal, backend::TestBackend};

    /// Storage that keeps the query string in memory
    #[derive(Default)]
    struct MemoryStorage {
        query: Rc<RefCell<Option<String>>>,
        fail: bool,
    }

    impl Storage for MemoryStorage {
        fn load_query(&self) -> Result<Option<String>, StorageError> {
            if self.fail {
                return Err(StorageError::NotAvailable("test".to_string()));
            }
            Ok(self.query.borrow().clone())
        }

        fn save_query(&mut self, query: &str) -> Result<(), StorageError> {
            if self.fail {
                return Err(StorageError::Io("read-only".to_string()));
            }
            *self.query.borrow_mut() = Some(query.to_string());
            Ok(())
        }

        fn load_config(&self) -> Result<DashboardConfig, StorageError> {
            Ok(DashboardConfig::default())
        }

        fn save_config(&self, _config: &DashboardConfig) -> Result<(), StorageError> {
            Ok(())
        }
    }

    fn app_with_query(query: Option<&str>) -> (App, Rc<RefCell<Option<String>>>) {
        let shared = Rc::new(RefCell::new(query.map(str::to_string)));
        let storage = MemoryStorage {
            query: Rc::clone(&shared),
            fail: false,
        };
        (App::new(Box::new(storage)), shared)
    }

    fn screen_text(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_startup_reads_stored_query() {
        let (app, _) = app_with_query(Some("work_cost=0.3&weekend_multiplier=9"));
        assert_eq!(app.state().params.work_cost_percentage, 0.3);
        assert_eq!(app.state().params.weekend_multiplier, 2.0);
        assert!(app.state().error_message.is_none());
    }

    #[test]
    fn test_load_failure_falls_back_to_defaults() {
        let storage = MemoryStorage {
            fail: true,
            ..Default::default()
        };
        let app = App::new(Box::new(storage));
        assert_eq!(app.state().params, ProfitParameters::default());
        assert!(app.state().error_message.is_some());
    }

    #[test]
    fn test_adjust_and_save() {
        let (mut app, saved) = app_with_query(None);

        app.handle_key(AppKeyEvent::new(KeyCode::Char('l')));
        assert_eq!(app.state().params.weekend_multiplier, 1.25);
        assert!(app.state().dirty);

        app.handle_key(AppKeyEvent::with_ctrl(KeyCode::Char('s')));
        assert!(!app.state().dirty);
        assert_eq!(saved.borrow().as_deref(), Some(app.state().query_string().as_str()));
        assert!(
            saved
                .borrow()
                .as_deref()
                .is_some_and(|q| q.starts_with("weekend_multiplier=1.25&"))
        );
    }

    #[test]
    fn test_save_failure_sets_error() {
        let mut app = App::new(Box::new(MemoryStorage {
            fail: true,
            ..Default::default()
        }));
        app.handle_key(AppKeyEvent::new(KeyCode::Esc));
        assert!(app.state().error_message.is_none());

        app.handle_key(AppKeyEvent::with_ctrl(KeyCode::Char('s')));
        assert!(
            app.state()
                .error_message
                .as_deref()
                .is_some_and(|e| e.starts_with("Failed to save"))
        );
    }

    #[test]
    fn test_focus_routes_arrows() {
        let (mut app, _) = app_with_query(None);
        let crosshair = app.state().crosshair;

        // Parameters focused: Down selects the next slider
        app.handle_key(AppKeyEvent::new(KeyCode::Down));
        assert_eq!(app.state().selected_param, 1);
        assert_eq!(app.state().crosshair, crosshair);

        // Chart focused: Down moves the crosshair to a lower ROAS
        app.handle_key(AppKeyEvent::new(KeyCode::Tab));
        app.handle_key(AppKeyEvent::new(KeyCode::Down));
        assert_eq!(app.state().selected_param, 1);
        assert_eq!(app.state().crosshair, (crosshair.0 - 1, crosshair.1));
    }

    #[test]
    fn test_tabs_reset_and_quit() {
        let (mut app, _) = app_with_query(Some("marketing_fee=0.05"));

        app.handle_key(AppKeyEvent::new(KeyCode::Char('3')));
        assert_eq!(app.state().active_tab, TabId::Surface);

        app.handle_key(AppKeyEvent::new(KeyCode::Char('r')));
        assert_eq!(app.state().params, ProfitParameters::default());

        assert_eq!(
            app.handle_key(AppKeyEvent::new(KeyCode::Char('q'))),
            EventResult::Exit
        );
        assert!(app.state().exit);
    }

    #[test]
    fn test_render_every_tab() {
        let (mut app, _) = app_with_query(None);

        let text = screen_text(&mut app, 140, 45);
        assert!(text.contains("Efficiency Map"));
        assert!(text.contains("Parameters"));
        assert!(text.contains("Profit Efficiency"));

        app.handle_key(AppKeyEvent::new(KeyCode::Char('2')));
        let text = screen_text(&mut app, 140, 45);
        assert!(text.contains("Profit vs. ROAS and Marketing Spend"));

        app.handle_key(AppKeyEvent::new(KeyCode::Char('3')));
        let text = screen_text(&mut app, 140, 45);
        assert!(text.contains("Interactive Profit Surface"));

        // Tiny terminals must not panic
        screen_text(&mut app, 20, 6);
    }
}
