use tracing::{debug, info};

use super::descriptor::{StatusDescriptor, StatusKey};
use crate::Result;

/// Holds the currently selected status. All transitions go through here.
#[derive(Debug, Clone)]
pub struct StatusBoard {
    current: StatusKey,
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new(StatusKey::Available)
    }
}

impl StatusBoard {
    pub fn new(initial: StatusKey) -> Self {
        Self { current: initial }
    }

    #[inline]
    pub fn current(&self) -> StatusKey {
        self.current
    }

    pub fn descriptor(&self) -> &'static StatusDescriptor {
        self.current.descriptor()
    }

    /// Select a status. Returns true if it changed.
    pub fn set(&mut self, key: StatusKey) -> bool {
        if key == self.current {
            debug!("Status unchanged: {}", key);
            return false;
        }
        info!("Status changed: {} -> {}", self.current, key);
        self.current = key;
        true
    }

    /// Select a status by name. Unknown names are rejected and leave the
    /// current status untouched.
    pub fn set_by_name(&mut self, name: &str) -> Result<StatusKey> {
        let key: StatusKey = name.parse()?;
        self.set(key);
        Ok(key)
    }

    /// Advance to the next status in toggle order
    pub fn cycle(&mut self) -> StatusKey {
        let next = self.current.next();
        self.set(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_available() {
        assert_eq!(StatusBoard::default().current(), StatusKey::Available);
    }

    #[test]
    fn test_cycle() {
        let mut board = StatusBoard::default();
        assert_eq!(board.cycle(), StatusKey::Engaged);
        assert_eq!(board.cycle(), StatusKey::Upcoming);
        assert_eq!(board.cycle(), StatusKey::Available);
    }

    #[test]
    fn test_set_reports_change() {
        let mut board = StatusBoard::default();
        assert!(!board.set(StatusKey::Available));
        assert!(board.set(StatusKey::Upcoming));
        assert_eq!(board.descriptor().key, StatusKey::Upcoming);
    }

    #[test]
    fn test_unknown_name_leaves_state() {
        let mut board = StatusBoard::new(StatusKey::Engaged);
        assert!(board.set_by_name("maintenance").is_err());
        assert_eq!(board.current(), StatusKey::Engaged);

        assert_eq!(board.set_by_name("available").unwrap(), StatusKey::Available);
        assert_eq!(board.current(), StatusKey::Available);
    }
}
