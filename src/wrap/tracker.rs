use bevy::prelude::*;
use statig::prelude::*;

use super::bounds::ScreenBounds;
use super::error::WrapError;
use super::ghost::{position_ghosts, Ghost, GHOST_COUNT};
use super::machine::{phase_of, SwapMachine, WrapEvent, WrapPhase};
use super::visibility::{is_visible, TrackedObject};

/// Result of a single tracker tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Primary is on screen; nothing moved.
    Visible,
    /// Primary was off screen and was moved onto the first visible ghost.
    Swapped {
        ghost_index: usize,
        from: Vec2,
        to: Vec2,
    },
    /// Primary is off screen and so is every ghost. Retried next tick.
    NoVisibleGhost,
}

/// Keeps eight ghosts around the primary and teleports the primary onto a
/// visible ghost whenever it leaves the screen.
///
/// Unusable until [`WrapTracker::init`] has been given the screen bounds.
#[derive(Resource)]
pub struct WrapTracker {
    bounds: Option<ScreenBounds>,
    ghosts: Option<[Ghost; GHOST_COUNT]>,
    primary_visible: bool,
    swap_count: u64,
    machine: StateMachine<SwapMachine>,
}

impl Default for WrapTracker {
    fn default() -> Self {
        Self {
            bounds: None,
            ghosts: None,
            primary_visible: true,
            swap_count: 0,
            machine: SwapMachine.state_machine(),
        }
    }
}

impl WrapTracker {
    pub fn new(bounds: ScreenBounds) -> Self {
        let mut tracker = Self::default();
        tracker.init(bounds);
        tracker
    }

    pub fn init(&mut self, bounds: ScreenBounds) {
        self.bounds = Some(bounds);
    }

    pub fn is_ready(&self) -> bool {
        self.bounds.is_some()
    }

    pub fn bounds(&self) -> Result<&ScreenBounds, WrapError> {
        self.bounds.as_ref().ok_or(WrapError::NotInitialized)
    }

    /// Ghosts as positioned by the most recent tick.
    pub fn ghosts(&self) -> Option<&[Ghost; GHOST_COUNT]> {
        self.ghosts.as_ref()
    }

    /// Whether the primary is on screen after the most recent tick, swap included.
    pub fn primary_visible(&self) -> bool {
        self.primary_visible
    }

    pub fn phase(&self) -> WrapPhase {
        phase_of(self.machine.state())
    }

    pub fn swap_count(&self) -> u64 {
        self.swap_count
    }

    /// Reposition ghosts, test visibility and swap if needed.
    pub fn tick(&mut self, primary: &mut TrackedObject) -> Result<TickOutcome, WrapError> {
        let bounds = *self.bounds()?;
        let ghosts = position_ghosts(primary, &bounds);
        self.ghosts = Some(ghosts);

        let outcome = if is_visible(primary, &bounds) {
            TickOutcome::Visible
        } else {
            match ghosts.iter().find(|g| is_visible(&g.object, &bounds)) {
                Some(ghost) => {
                    let from = primary.position;
                    primary.position = ghost.position();
                    self.swap_count += 1;
                    TickOutcome::Swapped {
                        ghost_index: ghost.index,
                        from,
                        to: primary.position,
                    }
                }
                None => TickOutcome::NoVisibleGhost,
            }
        };

        self.primary_visible = outcome != TickOutcome::NoVisibleGhost;

        let before = self.phase();
        self.machine.handle(&match outcome {
            TickOutcome::Visible => WrapEvent::PrimaryOnScreen,
            TickOutcome::Swapped { .. } => WrapEvent::Swapped,
            TickOutcome::NoVisibleGhost => WrapEvent::NoVisibleGhost,
        });
        if before != WrapPhase::PrimaryHidden && self.phase() == WrapPhase::PrimaryHidden {
            warn!(
                "Primary at {} is off screen and no ghost is visible, holding position",
                primary.position
            );
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn bounds_10() -> ScreenBounds {
        ScreenBounds::new(Vec2::ZERO, 10.0, 10.0).unwrap()
    }

    fn ship_at(x: f32, y: f32) -> TrackedObject {
        TrackedObject::new(Vec2::new(x, y), 0.0, Vec2::ONE)
    }

    #[test]
    fn tick_before_init_fails() {
        let mut tracker = WrapTracker::default();
        assert!(!tracker.is_ready());
        assert_eq!(tracker.bounds(), Err(WrapError::NotInitialized));
        assert_eq!(
            tracker.tick(&mut ship_at(1.0, 1.0)),
            Err(WrapError::NotInitialized)
        );
        assert!(tracker.ghosts().is_none());
    }

    #[test]
    fn swap_past_right_edge() {
        let mut tracker = WrapTracker::new(bounds_10());
        let mut ship = ship_at(11.0, 0.0);

        let outcome = tracker.tick(&mut ship).unwrap();

        assert_eq!(
            outcome,
            TickOutcome::Swapped {
                ghost_index: 4,
                from: Vec2::new(11.0, 0.0),
                to: Vec2::new(1.0, 0.0),
            }
        );
        assert_eq!(ship.position, Vec2::new(1.0, 0.0));
        assert!(tracker.primary_visible());
        assert_eq!(tracker.phase(), WrapPhase::PrimaryVisible);
        assert_eq!(tracker.swap_count(), 1);
        let ghost = tracker.ghosts().unwrap()[4];
        assert_eq!(ghost.offset, Vec2::new(-10.0, 0.0));
        assert_eq!(ghost.position(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn swap_past_bottom_left_corner() {
        let mut tracker = WrapTracker::new(bounds_10());
        let mut ship = ship_at(-0.75, -0.75);

        let outcome = tracker.tick(&mut ship).unwrap();

        // Only the diagonal neighbour (+w, +h) reaches back onto the screen.
        assert!(matches!(
            outcome,
            TickOutcome::Swapped { ghost_index: 7, .. }
        ));
        assert_eq!(ship.position, Vec2::new(9.25, 9.25));
    }

    #[test]
    fn first_visible_ghost_wins_ties() {
        let mut tracker = WrapTracker::new(bounds_10());
        // Ghosts 4 and 5 both touch the screen; 4 is scanned first.
        let mut ship = ship_at(10.75, -0.25);
        let ghosts = position_ghosts(&ship, &bounds_10());
        assert!(is_visible(&ghosts[4].object, &bounds_10()));
        assert!(is_visible(&ghosts[5].object, &bounds_10()));

        let outcome = tracker.tick(&mut ship).unwrap();
        assert!(matches!(
            outcome,
            TickOutcome::Swapped { ghost_index: 4, .. }
        ));
        assert_eq!(ship.position, Vec2::new(0.75, -0.25));
    }

    #[test]
    fn no_swap_when_visible_but_ghosts_follow() {
        let mut tracker = WrapTracker::new(bounds_10());
        let mut ship = ship_at(5.0, 5.0);

        assert_eq!(tracker.tick(&mut ship).unwrap(), TickOutcome::Visible);
        assert_eq!(ship.position, Vec2::new(5.0, 5.0));
        assert_eq!(tracker.ghosts().unwrap()[0].position(), Vec2::new(15.0, 5.0));

        ship.position = Vec2::new(6.0, 5.0);
        assert_eq!(tracker.tick(&mut ship).unwrap(), TickOutcome::Visible);
        assert_eq!(ship.position, Vec2::new(6.0, 5.0));
        assert_eq!(tracker.ghosts().unwrap()[0].position(), Vec2::new(16.0, 5.0));
        assert_eq!(tracker.swap_count(), 0);
    }

    #[test]
    fn stationary_primary_is_stable() {
        let mut tracker = WrapTracker::new(bounds_10());
        let mut ship = ship_at(9.9, 0.1);

        tracker.tick(&mut ship).unwrap();
        let first = *tracker.ghosts().unwrap();
        for _ in 0..10 {
            assert_eq!(tracker.tick(&mut ship).unwrap(), TickOutcome::Visible);
            assert_eq!(*tracker.ghosts().unwrap(), first);
        }
        assert_eq!(tracker.swap_count(), 0);
    }

    #[test]
    fn swapped_primary_does_not_swap_back() {
        let mut tracker = WrapTracker::new(bounds_10());
        let mut ship = ship_at(11.0, 5.0);
        tracker.tick(&mut ship).unwrap();
        for _ in 0..5 {
            assert_eq!(tracker.tick(&mut ship).unwrap(), TickOutcome::Visible);
        }
        assert_eq!(tracker.swap_count(), 1);
    }

    #[test]
    fn visibility_flag_tracks_position_after_the_tick() {
        let mut tracker = WrapTracker::new(bounds_10());
        let mut ship = ship_at(100.0, 100.0);
        tracker.tick(&mut ship).unwrap();
        assert!(!tracker.primary_visible());

        ship.position = Vec2::new(-1.0, 5.0);
        assert!(matches!(
            tracker.tick(&mut ship).unwrap(),
            TickOutcome::Swapped { .. }
        ));
        assert!(tracker.primary_visible());
        assert_eq!(tracker.primary_visible(), is_visible(&ship, &bounds_10()));
    }

    #[test]
    fn far_away_primary_waits_hidden() {
        let mut tracker = WrapTracker::new(bounds_10());
        let mut ship = ship_at(100.0, 100.0);

        assert_eq!(tracker.tick(&mut ship).unwrap(), TickOutcome::NoVisibleGhost);
        assert_eq!(ship.position, Vec2::new(100.0, 100.0));
        assert_eq!(tracker.phase(), WrapPhase::PrimaryHidden);

        // Brought back within one tile: the next tick recovers.
        ship.position = Vec2::new(15.0, 5.0);
        assert!(matches!(
            tracker.tick(&mut ship).unwrap(),
            TickOutcome::Swapped { .. }
        ));
        assert_eq!(ship.position, Vec2::new(5.0, 5.0));
        assert_eq!(tracker.phase(), WrapPhase::PrimaryVisible);
    }

    #[test]
    fn tiling_leaves_no_gaps_within_one_tile() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let origin = Vec2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
            let size = Vec2::new(rng.gen_range(4.0..40.0), rng.gen_range(4.0..40.0));
            let bounds = ScreenBounds::new(origin, size.x, size.y).unwrap();
            let scale = Vec2::new(
                rng.gen_range(0.1..size.x),
                rng.gen_range(0.1..size.y),
            );
            let position = Vec2::new(
                rng.gen_range(origin.x - size.x..origin.x + 2.0 * size.x),
                rng.gen_range(origin.y - size.y..origin.y + 2.0 * size.y),
            );
            let primary = TrackedObject::new(position, 0.0, scale);

            let any_visible = is_visible(&primary, &bounds)
                || position_ghosts(&primary, &bounds)
                    .iter()
                    .any(|g| is_visible(&g.object, &bounds));
            assert!(
                any_visible,
                "gap at {position} for bounds {bounds:?} and scale {scale}"
            );

            let mut tracker = WrapTracker::new(bounds);
            let mut ship = primary;
            assert_ne!(tracker.tick(&mut ship).unwrap(), TickOutcome::NoVisibleGhost);
            assert!(is_visible(&ship, &bounds));
        }
    }
}
