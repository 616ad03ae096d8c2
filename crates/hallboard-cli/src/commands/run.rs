use std::io;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use hallboard_core::scheduler::{Clock, SystemClock};
use hallboard_core::{AppConfig, ScrollMode, StatusKey};
use hallboard_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    widgets::draw,
};

/// Command-line overrides for the board
#[derive(Debug, Default)]
pub struct RunOptions {
    pub mode: Option<ScrollMode>,
    pub no_enhanced: bool,
    pub status: Option<String>,
    pub demo: bool,
}

impl RunOptions {
    /// Fold the overrides into the loaded configuration
    fn apply(self, config: &mut AppConfig) -> Result<()> {
        if let Some(mode) = self.mode {
            config.scroll.mode = mode;
        }
        if self.no_enhanced {
            config.scroll.enhanced_carousel = false;
        }
        if let Some(status) = self.status {
            let key: StatusKey = status
                .parse()
                .with_context(|| format!("invalid --status '{}'", status))?;
            config.status.initial = key.as_str().to_string();
        }
        if self.demo {
            config.status.demo_cycle = true;
        }
        Ok(())
    }
}

pub fn run(mut config: AppConfig, options: RunOptions) -> Result<()> {
    options.apply(&mut config)?;

    let clock = SystemClock::new();
    let mut app = App::new(config, clock.monotonic(), clock.local_now());
    let event_handler = EventHandler::with_animation_fps(
        app.config.display.tick_rate_ms,
        app.config.scroll.animation_fps,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let title = format!("Hallboard - {}", app.config.display.room_name);
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        SetTitle(title)
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run_loop(&mut terminal, &mut app, &clock, &event_handler);
    app.teardown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    clock: &impl Clock,
    event_handler: &EventHandler,
) -> Result<()> {
    info!("Board running");

    // Main loop
    loop {
        let now = clock.monotonic();
        app.tick(now, clock.local_now());

        // Draw UI
        terminal.draw(|frame| draw(frame, app, now))?;

        // Sleep until the next frame when scrolling, otherwise until the next tick
        let event = event_handler.next(app.poll_wait(clock.monotonic()))?;
        if let Some(event) = event {
            let now = clock.monotonic();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, &app.keymap);
                    app.handle_action(action, now);
                }
                AppEvent::Mouse(mouse) => {
                    app.handle_pointer(handle_mouse_event(mouse), now);
                }
                AppEvent::Resize(width, height) => {
                    // Picked up by the next draw, debounced
                    debug!("Terminal resized to {}x{}", width, height);
                }
                AppEvent::FocusLost => app.focus_lost(now),
                AppEvent::FocusGained | AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_override_config() {
        let mut config = AppConfig::default();
        let options = RunOptions {
            mode: Some(ScrollMode::Carousel),
            no_enhanced: true,
            status: Some("Engaged".to_string()),
            demo: true,
        };
        options.apply(&mut config).unwrap();

        assert_eq!(config.scroll.mode, ScrollMode::Carousel);
        assert!(!config.scroll.enhanced_carousel);
        assert_eq!(config.status.initial, "engaged");
        assert!(config.status.demo_cycle);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let mut config = AppConfig::default();
        let options = RunOptions {
            status: Some("busy".to_string()),
            ..Default::default()
        };
        assert!(options.apply(&mut config).is_err());
        assert_eq!(config.status.initial, "available");
    }

    #[test]
    fn test_no_options_keep_config() {
        let mut config = AppConfig::default();
        RunOptions::default().apply(&mut config).unwrap();
        assert_eq!(config.scroll.mode, ScrollMode::Table);
        assert!(config.scroll.enhanced_carousel);
        assert!(!config.status.demo_cycle);
    }
}
