//! Score bookkeeping
//!
//! The player scores the moment the front obstacle's right edge slips behind
//! it. Only the sign change counts, so each obstacle scores once no matter
//! how many frames it spends behind the player before being evicted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreTracker {
    /// `right_edge - player_x` from the previous frame
    last_distance: Option<f32>,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare this frame's front obstacle against the player. Returns true
    /// (and bumps `score`) on a non-negative to negative transition.
    pub fn update(&mut self, front_right_edge: f32, player_x: f32, score: &mut u32) -> bool {
        let distance = front_right_edge - player_x;
        let passed = matches!(self.last_distance, Some(prev) if prev >= 0.0) && distance < 0.0;
        self.last_distance = Some(distance);

        if passed {
            *score = score.saturating_add(1);
            log::debug!("obstacle passed, score {}", score);
        }
        passed
    }

    /// Forget the previous frame (no obstacle to compare against)
    pub fn clear(&mut self) {
        self.last_distance = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacles::{Obstacle, ObstacleGeometry, ObstacleStream};
    use proptest::prelude::*;

    #[test]
    fn test_scores_on_sign_change_only() {
        let mut tracker = ScoreTracker::new();
        let mut score = 0;
        assert!(!tracker.update(60.0, 50.0, &mut score));
        assert!(!tracker.update(50.0, 50.0, &mut score)); // zero is still ahead
        assert!(tracker.update(49.0, 50.0, &mut score));
        assert!(!tracker.update(40.0, 50.0, &mut score));
        assert_eq!(score, 1);
    }

    #[test]
    fn test_first_frame_behind_does_not_score() {
        let mut tracker = ScoreTracker::new();
        let mut score = 0;
        assert!(!tracker.update(10.0, 50.0, &mut score));
        assert_eq!(score, 0);
    }

    #[test]
    fn test_new_front_after_eviction_does_not_score() {
        let mut tracker = ScoreTracker::new();
        let mut score = 0;
        tracker.update(5.0, 50.0, &mut score);
        // Front evicted; the next obstacle is far ahead
        assert!(!tracker.update(300.0, 50.0, &mut score));
        assert!(!tracker.update(295.0, 50.0, &mut score));
        assert_eq!(score, 0);
    }

    #[test]
    fn test_crossing_frame_with_drifting_obstacle() {
        // Obstacle at x=100, width 20, player at x=50, drift 5 per frame.
        // distance = 70 - 5k: 0 at k=14, -5 at k=15. The obstacle is evicted
        // at k=25 and the far one behind it takes over the front.
        let geom = ObstacleGeometry { width: 20.0, gap: 100.0, height: 512.0 };
        let mut stream = ObstacleStream::from_obstacles(
            [
                Obstacle { x: 100.0, gap_center: 200.0 },
                Obstacle { x: 1000.0, gap_center: 200.0 },
            ],
            1000.0,
        );
        let mut tracker = ScoreTracker::new();
        let mut score = 0;
        tracker.update(stream.front().unwrap().right_edge(&geom), 50.0, &mut score);

        for frame in 1..=31 {
            stream.advance(5.0, &geom);
            let front = stream.front().unwrap();
            let scored = tracker.update(front.right_edge(&geom), 50.0, &mut score);
            assert_eq!(scored, frame == 15, "frame {frame}");
            assert_eq!(score, u32::from(frame >= 15), "frame {frame}");
        }
    }

    proptest! {
        #[test]
        fn prop_one_point_per_obstacle(drift in 0.5f32..30.0, start in 60.0f32..400.0) {
            let geom = ObstacleGeometry { width: 52.0, gap: 100.0, height: 512.0 };
            let mut stream =
                ObstacleStream::from_obstacles([Obstacle { x: start, gap_center: 0.0 }], 0.0);
            let mut tracker = ScoreTracker::new();
            let mut score = 0u32;
            let mut last = 0u32;
            while let Some(front) = stream.front().copied() {
                tracker.update(front.right_edge(&geom), 50.0, &mut score);
                prop_assert!(score >= last);
                last = score;
                stream.advance(drift, &geom);
            }
            prop_assert_eq!(score, 1);
        }
    }
}
