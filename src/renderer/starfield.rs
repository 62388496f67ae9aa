//! Starfield painter

use super::Surface;
use crate::sim::Starfield;

/// Clear the surface and draw every star as a filled circle
pub fn paint_starfield<S: Surface>(surface: &mut S, field: &Starfield, color: &str) {
    surface.clear(field.size());
    surface.set_fill(color);
    for star in field.stars() {
        surface.begin_path();
        surface.circle(star.pos, star.radius);
        surface.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::STAR_COLOR;
    use crate::renderer::surface::recording::{Op, Recorder};
    use crate::settings::Settings;
    use glam::Vec2;

    #[test]
    fn test_paints_one_circle_per_star() {
        let field = Starfield::new(11, Vec2::new(640.0, 480.0), &Settings::default());
        let mut rec = Recorder::default();
        paint_starfield(&mut rec, &field, STAR_COLOR);

        assert_eq!(rec.ops[0], Op::Clear(Vec2::new(640.0, 480.0)));
        assert_eq!(rec.count(|op| matches!(op, Op::Circle { .. })), 300);
        assert_eq!(rec.count(|op| *op == Op::FillPath), 300);

        let first = field.stars()[0];
        assert!(rec.ops.contains(&Op::Circle {
            center: first.pos,
            radius: first.radius,
        }));
    }

    #[test]
    fn test_empty_field_only_clears() {
        let settings = Settings {
            star_count: 0,
            ..Settings::default()
        };
        let field = Starfield::new(0, Vec2::new(10.0, 10.0), &settings);
        let mut rec = Recorder::default();
        paint_starfield(&mut rec, &field, STAR_COLOR);
        assert_eq!(rec.count(|op| matches!(op, Op::Circle { .. })), 0);
    }
}
