use glam::Vec2;

/// A single point along a stroke, with a dot that lights up once passed.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub position: Vec2,
    visible: bool,
}

impl Waypoint {
    /// New waypoints start hidden.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the dot. Returns true if it was hidden.
    pub fn activate(&mut self) -> bool {
        !std::mem::replace(&mut self.visible, true)
    }

    /// Hide the dot. Returns true if it was visible.
    pub fn deactivate(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activate_and_deactivate_are_idempotent() {
        let mut wp = Waypoint::new(Vec2::new(1.0, 2.0));
        assert!(!wp.is_visible());

        assert!(wp.activate());
        assert!(!wp.activate());
        assert!(wp.is_visible());

        assert!(wp.deactivate());
        assert!(!wp.deactivate());
        assert!(!wp.is_visible());
    }
}
