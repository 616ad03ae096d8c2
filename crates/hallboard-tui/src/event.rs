use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    frame: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self::with_animation_fps(tick_rate_ms, 60)
    }

    /// Event handler that never waits longer than one animation frame when
    /// asked for a frame-paced poll
    pub fn with_animation_fps(tick_rate_ms: u64, fps: u32) -> Self {
        let fps = if fps == 0 { 60 } else { fps };
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms.max(1)),
            frame: Duration::from_nanos(1_000_000_000 / u64::from(fps)),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Poll timeout for the next event: `wait` capped at the tick rate and
    /// floored at one frame
    pub fn timeout(&self, wait: Option<Duration>) -> Duration {
        wait.map(|w| w.max(self.frame))
            .unwrap_or(self.tick_rate)
            .min(self.tick_rate)
    }

    /// Poll for the next event, waiting at most `timeout(wait)`
    pub fn next(&self, wait: Option<Duration>) -> Result<Option<AppEvent>> {
        if event::poll(self.timeout(wait))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm 0.27+ sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                Event::FocusGained => Ok(Some(AppEvent::FocusGained)),
                Event::FocusLost => Ok(Some(AppEvent::FocusLost)),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Pointer moved, clicked or scrolled
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Terminal window gained focus
    FocusGained,
    /// Terminal window lost focus
    FocusLost,
    /// Nothing happened within the poll timeout
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_bounds() {
        let handler = EventHandler::with_animation_fps(250, 50);
        assert_eq!(handler.frame_duration(), Duration::from_millis(20));
        assert_eq!(handler.timeout(None), Duration::from_millis(250));
        assert_eq!(handler.timeout(Some(Duration::ZERO)), Duration::from_millis(20));
        assert_eq!(
            handler.timeout(Some(Duration::from_millis(100))),
            Duration::from_millis(100)
        );
        assert_eq!(
            handler.timeout(Some(Duration::from_secs(30))),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_zero_fps_uses_default() {
        let handler = EventHandler::with_animation_fps(250, 0);
        assert!(handler.frame_duration() > Duration::from_millis(16));
        assert!(handler.frame_duration() < Duration::from_millis(17));
    }
}
