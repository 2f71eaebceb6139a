//! Bookkeeping for the navbar's cover-then-scroll transition.

/// How long the cover slides in before the page starts scrolling underneath it.
pub const COVER_DELAY_MS: u32 = 1_250;
pub const POSITION_TOLERANCE_PX: f64 = 1.0;
pub const VELOCITY_TOLERANCE: f64 = 0.02;
/// About ten seconds of frames at 60Hz.
pub const MAX_SETTLE_FRAMES: u32 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    About,
    Gallery,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::About, Section::Gallery, Section::Contact];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Gallery => "gallery",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "O nas",
            Section::Gallery => "Galeria",
            Section::Contact => "Kontakt",
        }
    }

    pub fn aria_label(self) -> String {
        format!("Przejdź do sekcji {}", self.label())
    }
}

pub fn is_settled(position: f64, target: f64, velocity: f64) -> bool {
    (position - target).abs() < POSITION_TOLERANCE_PX && velocity.abs() < VELOCITY_TOLERANCE
}

/// Single-flight guard. Each request takes a fresh ticket; only the newest ticket
/// may drive the cover and the menu.
#[derive(Debug, Default)]
pub struct TransitionGuard {
    generation: u64,
    in_flight: bool,
}

impl TransitionGuard {
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.in_flight = true;
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.in_flight && ticket == self.generation
    }

    /// Returns true when `ticket` was the live request and the cover should come down.
    pub fn finish(&mut self, ticket: u64) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.in_flight = false;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlePoll {
    Pending,
    Settled,
    GaveUp,
}

/// Watches one programmatic scroll frame by frame. Velocity is the per-frame delta.
#[derive(Debug, Default)]
pub struct SettleTracker {
    last_position: Option<f64>,
    frames: u32,
}

impl SettleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, position: f64, target: f64) -> SettlePoll {
        self.frames += 1;
        let velocity = match self.last_position {
            Some(last) => position - last,
            // No motion measured yet.
            None => f64::INFINITY,
        };
        self.last_position = Some(position);

        if is_settled(position, target, velocity) {
            SettlePoll::Settled
        } else if self.frames >= MAX_SETTLE_FRAMES {
            SettlePoll::GaveUp
        } else {
            SettlePoll::Pending
        }
    }
}

/// Programmatic scroll cannot pass the bottom of the document.
pub fn reachable_target(section_top: f64, max_scroll: f64) -> f64 {
    section_top.clamp(0.0, max_scroll.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_supersedes_older() {
        let mut guard = TransitionGuard::default();
        let first = guard.begin();
        let second = guard.begin();

        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
        assert!(!guard.finish(first), "stale sequence must not clear the cover");
        assert!(guard.finish(second));
        assert!(!guard.is_current(second));
        assert!(!guard.finish(second));
    }

    #[test]
    fn settles_only_when_close_and_still() {
        assert!(is_settled(1000.4, 1000.0, 0.0));
        assert!(!is_settled(1001.5, 1000.0, 0.0));
        assert!(!is_settled(1000.0, 1000.0, 0.5));
        assert!(is_settled(999.2, 1000.0, -0.01));
    }

    #[test]
    fn tracker_needs_two_frames_at_rest() {
        let mut tracker = SettleTracker::new();
        assert_eq!(tracker.observe(400.0, 1000.0), SettlePoll::Pending);
        assert_eq!(tracker.observe(900.0, 1000.0), SettlePoll::Pending);
        assert_eq!(tracker.observe(1000.0, 1000.0), SettlePoll::Pending);
        assert_eq!(tracker.observe(1000.0, 1000.0), SettlePoll::Settled);
    }

    #[test]
    fn tracker_gives_up_on_unreachable_target() {
        let mut tracker = SettleTracker::new();
        let mut last = SettlePoll::Pending;
        for _ in 0..MAX_SETTLE_FRAMES {
            last = tracker.observe(500.0, 2000.0);
            if last != SettlePoll::Pending {
                break;
            }
        }
        assert_eq!(last, SettlePoll::GaveUp);
    }

    #[test]
    fn target_is_clamped_to_scrollable_range() {
        assert_eq!(reachable_target(3000.0, 2500.0), 2500.0);
        assert_eq!(reachable_target(-4.0, 2500.0), 0.0);
        assert_eq!(reachable_target(1200.0, 2500.0), 1200.0);
        assert_eq!(reachable_target(1200.0, -10.0), 0.0);
    }

    #[test]
    fn sections_map_to_anchors() {
        let anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["about", "gallery", "contact"]);
        assert_eq!(Section::Contact.aria_label(), "Przejdź do sekcji Kontakt");
    }
}
