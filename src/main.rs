pub mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use goalmath::{
    config::{Config, ConfigStore, FileConfigStore},
    game::Game,
    runtime::{CrosstermEventSource, GameEvent, Runner},
    tier::Tier,
    TICK_RATE_MS,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};

/// football-themed arithmetic practice for young goal-getters
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A football-themed arithmetic practice TUI: three difficulty divisions, streak tracking toward legend status, and goal celebrations on hattricks."
)]
pub struct Cli {
    /// difficulty division to start in (overrides the config file)
    #[clap(short = 't', long, value_enum)]
    tier: Option<Tier>,

    /// absolute tolerance for fraction answers (overrides the config file)
    #[clap(long)]
    tolerance: Option<f64>,

    /// seconds before the next problem after a goal (overrides the config file)
    #[clap(short = 'd', long)]
    delay: Option<f64>,
}

/// Resolve the effective settings: CLI flags win over the config file.
fn resolve_settings(cli: &Cli, cfg: &Config) -> (Tier, f64, f64) {
    let tier = cli
        .tier
        .or_else(|| Tier::from_name(&cfg.tier))
        .unwrap_or(Tier::Easy);
    let tolerance = cli.tolerance.unwrap_or(cfg.fraction_tolerance);
    let delay = cli.delay.unwrap_or(cfg.advance_delay_secs);
    (tier, tolerance, delay)
}

#[derive(Debug)]
pub struct App {
    pub game: Game,
}

impl App {
    pub fn new(tier: Tier, tolerance: f64, advance_delay: f64) -> Self {
        Self {
            game: Game::new(tier, tolerance, advance_delay),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let cfg = FileConfigStore::new().load();
    let (tier, tolerance, delay) = resolve_settings(&cli, &cfg);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(tier, tolerance, delay);
    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let mut runner = Runner::new(
        CrosstermEventSource::new(),
        Duration::from_millis(TICK_RATE_MS),
    );

    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        match runner.step() {
            GameEvent::Tick => {
                let was_busy = app.game.celebration.is_active || app.game.is_advancing();
                app.game.on_tick();

                // Only repaint on ticks while something is animating.
                if was_busy {
                    terminal.draw(|f| f.render_widget(&*app, f.area()))?;
                }
            }
            GameEvent::Resize => {
                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
            GameEvent::Key(key) => {
                match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Backspace => app.game.backspace(),
                    KeyCode::Tab => {
                        let next = app.game.tier.next();
                        app.game.set_tier(next);
                    }
                    KeyCode::Enter => {
                        if let Some(goalmath::game::Outcome::Correct) = app.game.submit() {
                            let size = terminal.size().unwrap_or_default();
                            app.game
                                .start_celebration_if_milestone(size.width, size.height);
                        }
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Char('n') => app.game.next_problem(),
                    KeyCode::Char(c) => app.game.write(c),
                    _ => {}
                }
                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
        }
    }

    Ok(())
}
