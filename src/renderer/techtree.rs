//! Tech tree painter
//!
//! Per connector: a faint full-length curve, a bright curve up to the current
//! progress, and a glow dot riding the chord. Both curves share one control
//! point that circles the chord midpoint over time.

use glam::Vec2;

use super::Surface;
use crate::settings::Settings;
use crate::sim::{ConnectorLine, bow_offset, jitter_offset};

fn draw_curve<S: Surface>(surface: &mut S, from: Vec2, control: Vec2, end: Vec2) {
    surface.begin_path();
    surface.move_to(from);
    surface.quadratic_curve_to(control, end);
    surface.stroke();
}

/// Clear `size` and draw every connector at frame time `time_ms`
pub fn paint_tree<S: Surface>(
    surface: &mut S,
    size: Vec2,
    lines: &[ConnectorLine],
    time_ms: f64,
    settings: &Settings,
) {
    surface.clear(size);

    let bow = bow_offset(
        time_ms,
        settings.effective_bow_amplitude(),
        settings.bow_period_ms,
    );
    let jitter = jitter_offset(
        time_ms,
        settings.effective_jitter_amplitude(),
        settings.jitter_period_ms,
    );

    for line in lines {
        let control = line.control_point(bow);
        let head = line.head();

        surface.set_stroke(&settings.line_back_color, settings.line_back_width);
        draw_curve(surface, line.from, control, line.to);

        surface.set_stroke(&settings.line_front_color, settings.line_front_width);
        draw_curve(surface, line.from, control, head);

        surface.begin_path();
        surface.circle(head + jitter, settings.glow_radius);
        surface.set_fill(&settings.glow_color);
        surface.fill();
    }
}
