//! Scrolling obstacle stream
//!
//! A FIFO of barrier pairs. Front is the leftmost obstacle on screen. Each
//! frame the whole queue drifts left, the front is evicted once it has fully
//! left the screen, and the back is refilled so the count stays constant.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;

/// Allowed range for gap centers (screen y, +y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapBand {
    pub lo: f32,
    pub hi: f32,
}

impl GapBand {
    /// Band over a playfield of height `playfield`, leaving `margin_fraction`
    /// of it free at the top and at the bottom
    pub fn from_playfield(playfield: f32, margin_fraction: f32) -> Self {
        let margin = playfield * margin_fraction;
        Self {
            lo: margin,
            hi: playfield - margin,
        }
    }

    #[inline]
    pub fn contains(&self, y: f32) -> bool {
        y >= self.lo && y <= self.hi
    }
}

/// Session-seeded source of gap centers
#[derive(Debug, Clone)]
pub struct GapSampler {
    rng: Pcg32,
}

impl GapSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform draw over the band
    pub fn sample(&mut self, band: GapBand) -> f32 {
        if band.hi > band.lo {
            self.rng.random_range(band.lo..=band.hi)
        } else {
            // Degenerate window: nowhere to randomize
            band.lo
        }
    }
}

/// Dimensions shared by every obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleGeometry {
    /// Barrier width
    pub width: f32,
    /// Vertical opening between the two barriers
    pub gap: f32,
    /// Barrier height (the window height)
    pub height: f32,
}

/// A top/bottom barrier pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Vertical center of the opening
    pub gap_center: f32,
}

impl Obstacle {
    #[inline]
    pub fn right_edge(&self, geom: &ObstacleGeometry) -> f32 {
        self.x + geom.width
    }

    /// Barrier hanging below the gap
    pub fn bottom_barrier(&self, geom: &ObstacleGeometry) -> Rect {
        Rect::new(
            Vec2::new(self.x, self.gap_center + geom.gap / 2.0),
            Vec2::new(geom.width, geom.height),
        )
    }

    /// Bottom barrier mirrored across the gap
    pub fn top_barrier(&self, geom: &ObstacleGeometry) -> Rect {
        Rect::new(
            Vec2::new(self.x, self.gap_center - geom.gap / 2.0 - geom.height),
            Vec2::new(geom.width, geom.height),
        )
    }
}

/// Fixed-size queue of obstacles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleStream {
    queue: VecDeque<Obstacle>,
    /// Target number of obstacles
    count: usize,
    /// Where to spawn when the queue has run empty
    spawn_x: f32,
}

impl ObstacleStream {
    pub fn new(count: usize, spawn_x: f32) -> Self {
        Self {
            queue: VecDeque::with_capacity(count),
            count,
            spawn_x,
        }
    }

    /// Fresh stream: first obstacle at the spawn point, the rest `spacing` apart
    pub fn filled(
        count: usize,
        spawn_x: f32,
        spacing: f32,
        band: GapBand,
        sampler: &mut GapSampler,
    ) -> Self {
        let mut stream = Self::new(count, spawn_x);
        stream.replenish(spacing, band, sampler);
        stream
    }

    /// Build a stream from explicit obstacles (no sampling)
    pub fn from_obstacles(obstacles: impl IntoIterator<Item = Obstacle>, spawn_x: f32) -> Self {
        let queue: VecDeque<Obstacle> = obstacles.into_iter().collect();
        Self {
            count: queue.len(),
            queue,
            spawn_x,
        }
    }

    pub fn set_spawn_x(&mut self, spawn_x: f32) {
        self.spawn_x = spawn_x;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Target obstacle count
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn front(&self) -> Option<&Obstacle> {
        self.queue.front()
    }

    pub fn back(&self) -> Option<&Obstacle> {
        self.queue.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.queue.iter()
    }

    /// Drift every obstacle left by `drift` and evict the front once its
    /// right edge is past x = 0. At most one eviction per call.
    pub fn advance(&mut self, drift: f32, geom: &ObstacleGeometry) -> Option<Obstacle> {
        for obstacle in &mut self.queue {
            obstacle.x -= drift;
        }

        match self.queue.front() {
            Some(front) if front.right_edge(geom) < 0.0 => {
                let evicted = self.queue.pop_front();
                if let Some(ref o) = evicted {
                    log::debug!("obstacle evicted at x={:.1}", o.x);
                }
                evicted
            }
            _ => None,
        }
    }

    /// Append obstacles `spacing` behind the back until the target count is
    /// reached. Returns the number appended.
    pub fn replenish(&mut self, spacing: f32, band: GapBand, sampler: &mut GapSampler) -> usize {
        let mut appended = 0;
        while self.queue.len() < self.count {
            let x = match self.queue.back() {
                Some(back) => back.x + spacing,
                None => self.spawn_x,
            };
            let gap_center = sampler.sample(band);
            self.queue.push_back(Obstacle { x, gap_center });
            appended += 1;
        }
        appended
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GEOM: ObstacleGeometry = ObstacleGeometry {
        width: 20.0,
        gap: 150.0,
        height: 512.0,
    };
    const BAND: GapBand = GapBand { lo: 100.0, hi: 300.0 };

    #[test]
    fn test_band_from_playfield() {
        let band = GapBand::from_playfield(400.0, 0.25);
        assert_eq!(band, GapBand { lo: 100.0, hi: 300.0 });
    }

    #[test]
    fn test_filled_stream_layout() {
        let mut sampler = GapSampler::new(1);
        let stream = ObstacleStream::filled(4, 288.0, 144.0, BAND, &mut sampler);
        assert_eq!(stream.len(), 4);
        let xs: Vec<f32> = stream.iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![288.0, 432.0, 576.0, 720.0]);
        assert!(stream.iter().all(|o| BAND.contains(o.gap_center)));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = ObstacleStream::filled(4, 0.0, 10.0, BAND, &mut GapSampler::new(42));
        let b = ObstacleStream::filled(4, 0.0, 10.0, BAND, &mut GapSampler::new(42));
        let ga: Vec<f32> = a.iter().map(|o| o.gap_center).collect();
        let gb: Vec<f32> = b.iter().map(|o| o.gap_center).collect();
        assert_eq!(ga, gb);
    }

    #[test]
    fn test_degenerate_band() {
        let mut sampler = GapSampler::new(3);
        let band = GapBand { lo: 50.0, hi: 10.0 };
        assert_eq!(sampler.sample(band), 50.0);
    }

    #[test]
    fn test_barriers_frame_the_gap() {
        let o = Obstacle { x: 10.0, gap_center: 200.0 };
        let bottom = o.bottom_barrier(&GEOM);
        let top = o.top_barrier(&GEOM);
        assert_eq!(bottom.pos, Vec2::new(10.0, 275.0));
        assert_eq!(top.pos.y + top.size.y, 125.0);
        assert_eq!(bottom.pos.y - (top.pos.y + top.size.y), GEOM.gap);
        assert_eq!(top.size, bottom.size);
    }

    #[test]
    fn test_eviction_frame() {
        // x + width = 120, drift 7: 120 - 7k < 0 first at k = ceil(120/7) = 18
        let mut stream =
            ObstacleStream::from_obstacles([Obstacle { x: 100.0, gap_center: 200.0 }], 500.0);
        for frame in 1..=17 {
            assert!(stream.advance(7.0, &GEOM).is_none(), "evicted early at {frame}");
        }
        assert!(stream.advance(7.0, &GEOM).is_some());
        assert!(stream.is_empty());
    }

    #[test]
    fn test_right_edge_exactly_zero_is_kept() {
        let mut stream =
            ObstacleStream::from_obstacles([Obstacle { x: -15.0, gap_center: 0.0 }], 0.0);
        assert!(stream.advance(5.0, &GEOM).is_none());
        assert_eq!(stream.front().map(|o| o.right_edge(&GEOM)), Some(0.0));
        assert!(stream.advance(0.5, &GEOM).is_some());
    }

    #[test]
    fn test_replenish_after_running_empty() {
        let mut sampler = GapSampler::new(9);
        let mut stream = ObstacleStream::new(1, 300.0);
        assert_eq!(stream.replenish(50.0, BAND, &mut sampler), 1);
        stream.advance(400.0, &GEOM);
        assert!(stream.is_empty());
        stream.replenish(50.0, BAND, &mut sampler);
        assert_eq!(stream.front().map(|o| o.x), Some(300.0));
    }

    proptest! {
        #[test]
        fn prop_count_constant_after_replenish(
            seed in any::<u64>(),
            drifts in proptest::collection::vec(0.0f32..40.0, 1..400),
        ) {
            let mut sampler = GapSampler::new(seed);
            let mut stream = ObstacleStream::filled(4, 288.0, 144.0, BAND, &mut sampler);
            for drift in drifts {
                stream.advance(drift, &GEOM);
                prop_assert!(stream.len() <= 4);
                stream.replenish(144.0, BAND, &mut sampler);
                prop_assert_eq!(stream.len(), 4);
                // Front-to-back order is left-to-right
                let xs: Vec<f32> = stream.iter().map(|o| o.x).collect();
                prop_assert!(xs.windows(2).all(|w| w[0] < w[1]));
            }
        }

        #[test]
        fn prop_evicts_iff_fully_offscreen(x in -100.0f32..300.0, drift in 0.0f32..50.0) {
            let mut stream =
                ObstacleStream::from_obstacles([Obstacle { x, gap_center: 0.0 }], 0.0);
            let evicted = stream.advance(drift, &GEOM).is_some();
            prop_assert_eq!(evicted, (x - drift) + GEOM.width < 0.0);
        }
    }
}
