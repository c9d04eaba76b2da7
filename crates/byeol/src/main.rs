use std::time::{Duration, Instant};

use byeol_config::Config;
use byeol_core::{FrameRate, Viewport};
use byeol_sky::SkyState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
};

mod present;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();
    let result = App::new(Config::load()).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Loaded user configuration.
    config: Config,
    /// Current target frame rate.
    frame_rate: FrameRate,
    /// The animated sky, created on the first non-empty frame.
    sky: Option<SkyState>,
    /// Monotonic epoch for frame timestamps.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let frame_rate = config.frame_rate;
        Self {
            running: false,
            config,
            frame_rate,
            sky: None,
            started: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface: the sky above a one-line help footer.
    fn render(&mut self, frame: &mut Frame) {
        let chunks =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(frame.area());
        let sky_area = chunks[0];

        // Two surface pixels per cell row (half-block presentation)
        let viewport = Viewport::new(sky_area.width as f64, sky_area.height as f64 * 2.0);
        if !viewport.is_empty() {
            let sky = self.sky.get_or_insert_with(|| {
                let mut sky = SkyState::new(viewport);
                sky.set_spawn_interval(self.config.meteor_interval_ms);
                if let Some(count) = self.config.star_count_override {
                    sky.repopulate(count);
                }
                sky
            });
            sky.resize(viewport);
            sky.tick(self.started.elapsed().as_millis() as u64);
            frame.render_widget(present::sky_widget(sky.surface()), sky_area);
        }

        let help = Line::from(vec![
            "q".bold().cyan(),
            " quit  ".dark_gray(),
            "f".bold().cyan(),
            " frame rate  ".dark_gray(),
            "r".bold().cyan(),
            " new sky".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// The poll timeout doubles as the frame scheduler.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let interval = Duration::from_millis(self.frame_rate.tick_interval_ms());
        if event::poll(interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                // The next draw picks up the new dimensions from the frame
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('f')) => self.cycle_frame_rate(),
            (_, KeyCode::Char('r')) => self.regenerate_sky(),
            _ => {}
        }
    }

    /// Cycle through the available frame rates.
    fn cycle_frame_rate(&mut self) {
        self.frame_rate = self.frame_rate.next();
    }

    /// Scatter a fresh star field.
    fn regenerate_sky(&mut self) {
        if let Some(sky) = &mut self.sky {
            match self.config.star_count_override {
                Some(count) => sky.repopulate(count),
                None => sky.regenerate(),
            }
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
