//! 2D drawing surface
//!
//! The handful of canvas primitives the painters need. The browser's
//! `CanvasRenderingContext2d` implements it on wasm32; tests use a recorder.

use glam::Vec2;

pub trait Surface {
    /// Erase the rectangle from the origin to `size`
    fn clear(&mut self, size: Vec2);
    fn begin_path(&mut self);
    fn move_to(&mut self, point: Vec2);
    fn quadratic_curve_to(&mut self, control: Vec2, end: Vec2);
    /// Add a full circle to the current path
    fn circle(&mut self, center: Vec2, radius: f32);
    fn set_stroke(&mut self, style: &str, width: f32);
    fn set_fill(&mut self, style: &str);
    fn stroke(&mut self);
    fn fill(&mut self);
}

#[cfg(target_arch = "wasm32")]
impl Surface for web_sys::CanvasRenderingContext2d {
    fn clear(&mut self, size: Vec2) {
        self.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn begin_path(&mut self) {
        web_sys::CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, point: Vec2) {
        web_sys::CanvasRenderingContext2d::move_to(self, point.x as f64, point.y as f64);
    }

    fn quadratic_curve_to(&mut self, control: Vec2, end: Vec2) {
        web_sys::CanvasRenderingContext2d::quadratic_curve_to(
            self,
            control.x as f64,
            control.y as f64,
            end.x as f64,
            end.y as f64,
        );
    }

    fn circle(&mut self, center: Vec2, radius: f32) {
        // Only fails on a negative radius, which settings validation rules out
        let _ = self.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
    }

    fn set_stroke(&mut self, style: &str, width: f32) {
        self.set_stroke_style_str(style);
        self.set_line_width(width as f64);
    }

    fn set_fill(&mut self, style: &str) {
        self.set_fill_style_str(style);
    }

    fn stroke(&mut self) {
        web_sys::CanvasRenderingContext2d::stroke(self);
    }

    fn fill(&mut self) {
        web_sys::CanvasRenderingContext2d::fill(self);
    }
}

/// Records every primitive call, for painter tests
#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear(Vec2),
        BeginPath,
        MoveTo(Vec2),
        Quad { control: Vec2, end: Vec2 },
        Circle { center: Vec2, radius: f32 },
        Stroke { style: String, width: f32 },
        Fill { style: String },
        StrokePath,
        FillPath,
    }

    #[derive(Debug, Default)]
    pub struct Recorder {
        pub ops: Vec<Op>,
    }

    impl Recorder {
        pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
            self.ops.iter().filter(|op| pred(op)).count()
        }
    }

    impl Surface for Recorder {
        fn clear(&mut self, size: Vec2) {
            self.ops.push(Op::Clear(size));
        }
        fn begin_path(&mut self) {
            self.ops.push(Op::BeginPath);
        }
        fn move_to(&mut self, point: Vec2) {
            self.ops.push(Op::MoveTo(point));
        }
        fn quadratic_curve_to(&mut self, control: Vec2, end: Vec2) {
            self.ops.push(Op::Quad { control, end });
        }
        fn circle(&mut self, center: Vec2, radius: f32) {
            self.ops.push(Op::Circle { center, radius });
        }
        fn set_stroke(&mut self, style: &str, width: f32) {
            self.ops.push(Op::Stroke {
                style: style.to_string(),
                width,
            });
        }
        fn set_fill(&mut self, style: &str) {
            self.ops.push(Op::Fill {
                style: style.to_string(),
            });
        }
        fn stroke(&mut self) {
            self.ops.push(Op::StrokePath);
        }
        fn fill(&mut self) {
            self.ops.push(Op::FillPath);
        }
    }
}
