//! Starfield particles
//!
//! A fixed particle set drifting across the viewport. Particles leaving one
//! edge re-enter from the opposite edge (wrap, not bounce).

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::settings::Settings;
use crate::wrap_coord;

/// A single drifting star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Canvas-space position, always within [0, size)
    pub pos: Vec2,
    pub radius: f32,
    /// Per-frame displacement
    pub vel: Vec2,
}

impl Star {
    fn random(rng: &mut Pcg32, size: Vec2, settings: &Settings) -> Self {
        let pos = Vec2::new(
            wrap_coord(rng.random::<f32>() * size.x, size.x),
            wrap_coord(rng.random::<f32>() * size.y, size.y),
        );
        let radius = settings.star_radius_min
            + rng.random::<f32>() * (settings.star_radius_max - settings.star_radius_min);
        let speed = settings.star_max_speed;
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * 2.0 * speed,
            (rng.random::<f32>() - 0.5) * 2.0 * speed,
        );
        Self { pos, radius, vel }
    }
}

/// The full particle set plus the surface bounds it wraps within
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    size: Vec2,
}

impl Starfield {
    /// Generate `settings.star_count` stars scattered over `size`
    pub fn new(seed: u64, size: Vec2, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..settings.star_count)
            .map(|_| Star::random(&mut rng, size, settings))
            .collect();
        Self { stars, size }
    }

    /// Track new viewport bounds. Stars are kept; any now outside the
    /// bounds wrap back in on the next step.
    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    /// Advance every star by its velocity, wrapping at the edges
    pub fn step(&mut self) {
        let size = self.size;
        for star in &mut self.stars {
            star.pos += star.vel;
            star.pos.x = wrap_coord(star.pos.x, size.x);
            star.pos.y = wrap_coord(star.pos.y, size.y);
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn in_bounds(field: &Starfield) -> bool {
        let size = field.size();
        field.stars().iter().all(|s| {
            s.pos.x >= 0.0 && s.pos.x < size.x && s.pos.y >= 0.0 && s.pos.y < size.y
        })
    }

    #[test]
    fn test_generation_matches_settings() {
        let settings = Settings::default();
        let field = Starfield::new(7, Vec2::new(1280.0, 720.0), &settings);
        assert_eq!(field.stars().len(), 300);
        assert!(in_bounds(&field));
        for star in field.stars() {
            assert!(star.radius >= 0.5 && star.radius < 2.0);
            assert!(star.vel.x >= -0.15 && star.vel.x < 0.15);
            assert!(star.vel.y >= -0.15 && star.vel.y < 0.15);
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let settings = Settings::default();
        let a = Starfield::new(99, Vec2::new(800.0, 600.0), &settings);
        let b = Starfield::new(99, Vec2::new(800.0, 600.0), &settings);
        assert_eq!(a.stars(), b.stars());
    }

    #[test]
    fn test_star_leaving_right_edge_reappears_left() {
        let mut field = Starfield {
            stars: vec![Star {
                pos: Vec2::new(99.95, 50.0),
                radius: 1.0,
                vel: Vec2::new(0.1, 0.0),
            }],
            size: Vec2::new(100.0, 100.0),
        };
        field.step();
        let x = field.stars()[0].pos.x;
        assert!(x < 1.0, "expected wrap to left edge, got {x}");
    }

    #[test]
    fn test_star_leaving_top_reappears_bottom() {
        let mut field = Starfield {
            stars: vec![Star {
                pos: Vec2::new(50.0, 0.05),
                radius: 1.0,
                vel: Vec2::new(0.0, -0.1),
            }],
            size: Vec2::new(100.0, 100.0),
        };
        field.step();
        let y = field.stars()[0].pos.y;
        assert!(y > 99.0 && y < 100.0, "expected wrap to bottom edge, got {y}");
    }

    #[test]
    fn test_shrinking_viewport_pulls_stars_back_in() {
        let settings = Settings::default();
        let mut field = Starfield::new(3, Vec2::new(1920.0, 1080.0), &settings);
        field.resize(Vec2::new(320.0, 240.0));
        field.step();
        assert_eq!(field.stars().len(), 300);
        assert!(in_bounds(&field));
    }

    #[test]
    fn test_zero_size_surface_is_harmless() {
        let settings = Settings::default();
        let mut field = Starfield::new(1, Vec2::ZERO, &settings);
        field.step();
        assert!(field.stars().iter().all(|s| s.pos == Vec2::ZERO));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_stars_stay_in_bounds(
            seed in any::<u64>(),
            w in 1.0f32..2560.0,
            h in 1.0f32..1440.0,
            steps in 0usize..400,
        ) {
            let settings = Settings::default();
            let mut field = Starfield::new(seed, Vec2::new(w, h), &settings);
            for _ in 0..steps {
                field.step();
            }
            prop_assert!(in_bounds(&field));
        }
    }
}
