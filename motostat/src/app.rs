//! App state and main loop: input handling, applying fetch outcomes, and drawing.

use std::{
    io::{self, Stdout},
    sync::Arc,
    time::Duration,
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::time::sleep;
use tracing::info;

use crate::dashboard::Dashboard;
use crate::http::IndicatorSource;
use crate::poller::{apply_pending, outcome_channel, spawn_poller, FetchOutcome};
use crate::ui::{header::draw_header, panel::draw_panel};

pub struct App {
    dash: Dashboard,
    endpoint: String,
    should_quit: bool,
    frame_interval: Duration,
}

impl App {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            dash: Dashboard::new(),
            endpoint: endpoint.into(),
            should_quit: false,
            frame_interval: Duration::from_millis(100),
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dash
    }

    pub async fn run<S: IndicatorSource>(
        &mut self,
        source: Arc<S>,
        period: Duration,
    ) -> anyhow::Result<()> {
        let mut terminal = setup_terminal()?;

        let (tx, mut rx) = outcome_channel();
        let poller = spawn_poller(source, period, tx);
        info!(endpoint = %self.endpoint, period_ms = period.as_millis() as u64, "polling started");

        let res = self.event_loop(&mut terminal, &mut rx).await;

        // The timer lives exactly as long as the UI.
        poller.abort();

        // Teardown
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        rx: &mut tokio::sync::mpsc::UnboundedReceiver<FetchOutcome>,
    ) -> anyhow::Result<()> {
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                if let Event::Key(k) = event::read()? {
                    if k.kind == KeyEventKind::Press
                        && matches!(k.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
                    {
                        self.should_quit = true;
                    }
                }
            }
            if self.should_quit {
                break;
            }

            apply_pending(&mut self.dash, rx);

            terminal.draw(|f| self.draw(f))?;

            sleep(self.frame_interval).await;
        }
        Ok(())
    }

    pub fn draw(&self, f: &mut ratatui::Frame<'_>) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header + rule
                Constraint::Min(7),    // tiles + banner
            ])
            .split(f.area());

        draw_header(f, rows[0], &self.dash, &self.endpoint);
        draw_panel(f, rows[1], self.dash.panel.as_ref());
    }
}

// Raw mode is on once this starts; any later setup failure must turn it back off.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    restore_on_err(enter_alternate_screen(), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
}

fn enter_alternate_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_on_err<T>(res: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if res.is_err() {
        restore();
    }
    res
}

/// Single fetch for `--once`. Returns the resulting dashboard and whether the fetch succeeded.
pub async fn fetch_once<S: IndicatorSource>(source: &S) -> (Dashboard, bool) {
    let outcome = source.fetch().await;
    let ok = outcome.is_ok();
    let mut dash = Dashboard::new();
    dash.apply_outcome(outcome);
    (dash, ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::types::IndicatorSnapshot;
    use ratatui::backend::TestBackend;

    fn screen(app: &App) -> String {
        let backend = TestBackend::new(100, 12);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        terminal.draw(|f| app.draw(f)).expect("failed to draw");
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for row in buf.content().chunks(buf.area.width as usize) {
            for cell in row {
                out.push_str(cell.symbol());
            }
            out.push('\n');
        }
        out
    }

    fn sample() -> IndicatorSnapshot {
        IndicatorSnapshot {
            total_motos: 10,
            disponivel: 4,
            em_uso: 3,
            manutencao: 2,
            inativa: 1,
            atualizado_em: None,
        }
    }

    #[test]
    fn draws_waiting_state_before_first_snapshot() {
        let app = App::new("http://127.0.0.1:3000/api/indicadores");
        let s = screen(&app);
        assert!(s.contains("waiting for first snapshot"), "{s}");
        assert!(s.contains("Carregando indicadores"), "{s}");
    }

    #[test]
    fn draws_tiles_banner_and_badge() {
        let mut app = App::new("http://fleet/api/indicadores");
        app.dash.apply_snapshot(&sample());
        let s = screen(&app);
        assert!(s.contains("3 alerta(s) ativo(s) em Motos"), "{s}");
        assert!(s.contains("Em uso"), "{s}");
        assert!(s.contains("Motos  3 "), "{s}");
        assert!(!s.contains("waiting for first snapshot"), "{s}");
    }

    #[test]
    fn failure_keeps_panel_on_screen() {
        let mut app = App::new("http://fleet/api/indicadores");
        app.dash.apply_snapshot(&sample());
        app.dash.apply_outcome(Err(FetchError::Status(500)));
        let s = screen(&app);
        assert!(s.contains("3 alerta(s) ativo(s) em Motos"), "{s}");
        assert!(!s.contains("Motos  3 "), "{s}");
        assert!(!app.dashboard().badge.as_ref().unwrap().visible);
    }

    #[test]
    fn setup_failure_restores_terminal() {
        let mut restored = false;
        let res: io::Result<()> = restore_on_err(Err(io::Error::other("no tty")), || restored = true);
        assert!(res.is_err());
        assert!(restored);

        let mut restored = false;
        let res = restore_on_err(Ok(7), || restored = true);
        assert_eq!(res.unwrap(), 7);
        assert!(!restored);
    }

    #[test]
    fn header_names_endpoint() {
        let app = App::new("http://fleet/api/indicadores");
        let s = screen(&app);
        assert!(s.contains("motostat | http://fleet/api/indicadores"), "{s}");
    }

    struct Fixed(Result<IndicatorSnapshot, u16>);

    impl IndicatorSource for Fixed {
        async fn fetch(&self) -> Result<IndicatorSnapshot, FetchError> {
            self.0.clone().map_err(FetchError::Status)
        }
    }

    #[tokio::test]
    async fn fetch_once_reports_success_and_failure() {
        let (dash, ok) = fetch_once(&Fixed(Ok(sample()))).await;
        assert!(ok);
        assert_eq!(dash.badge.as_ref().unwrap().text, "3");

        let (dash, ok) = fetch_once(&Fixed(Err(500))).await;
        assert!(!ok);
        assert!(!dash.badge.as_ref().unwrap().visible);
        assert!(dash.panel.as_ref().unwrap().content.is_none());
    }
}
