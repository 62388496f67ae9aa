//! Tech tree connector layout and animation state
//!
//! One hub node (matched by name) is joined to every other node by a curved
//! connector. Each connector grows from the hub to its target over a fixed
//! number of frames, then holds at full length.

use glam::Vec2;

/// Snap tolerance so accumulated float steps land on exactly 1.0
const PROGRESS_EPSILON: f32 = 1e-4;

/// Measured geometry of one tech-tree node (offset box in canvas space)
#[derive(Debug, Clone, PartialEq)]
pub struct NodeBox {
    /// Display name, if the node carries one
    pub name: Option<String>,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl NodeBox {
    pub fn new(name: Option<&str>, left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            name: name.map(str::to_string),
            left,
            top,
            width,
            height,
        }
    }

    /// Center of the box, where connectors attach
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}

/// A connector from the hub to one node
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorLine {
    pub from: Vec2,
    pub to: Vec2,
    /// Draw completion in [0, 1]
    pub progress: f32,
    /// Index of the target node in the measured node list
    pub target: usize,
}

impl ConnectorLine {
    pub fn new(from: Vec2, to: Vec2, target: usize) -> Self {
        Self {
            from,
            to,
            progress: 0.0,
            target,
        }
    }

    /// Grow by `step`, clamped at 1.0
    pub fn advance(&mut self, step: f32) {
        let next = self.progress + step;
        self.progress = if next >= 1.0 - PROGRESS_EPSILON {
            1.0
        } else {
            next
        };
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Point on the straight chord at the current progress
    #[inline]
    pub fn head(&self) -> Vec2 {
        self.from.lerp(self.to, self.progress)
    }

    /// Quadratic control point: chord midpoint displaced by `bow`
    #[inline]
    pub fn control_point(&self, bow: Vec2) -> Vec2 {
        (self.from + self.to) * 0.5 + bow
    }
}

/// Control point displacement at `time_ms`; traces a circle of radius
/// `amplitude` once every `2π · period_ms`
pub fn bow_offset(time_ms: f64, amplitude: f32, period_ms: f64) -> Vec2 {
    let phase = time_ms / period_ms;
    Vec2::new(phase.sin() as f32 * amplitude, phase.cos() as f32 * amplitude)
}

/// Vertical wobble of the glow marker at `time_ms`
pub fn jitter_offset(time_ms: f64, amplitude: f32, period_ms: f64) -> Vec2 {
    Vec2::new(0.0, (time_ms / period_ms).sin() as f32 * amplitude)
}

/// Delay before the node at `index` is revealed
#[inline]
pub fn reveal_delay_ms(index: usize, stagger_ms: f64) -> f64 {
    index as f64 * stagger_ms
}

/// Index of the hub node, if present
pub fn find_center(nodes: &[NodeBox], name: &str) -> Option<usize> {
    nodes.iter().position(|n| n.is_named(name))
}

/// Connectors for one layout pass
#[derive(Debug, Clone)]
pub struct TreeLayout {
    /// Index of the hub node
    pub center: usize,
    pub lines: Vec<ConnectorLine>,
}

impl TreeLayout {
    /// Build one connector per non-hub node. Returns `None` when no node is
    /// named `center_name` (including an empty node list).
    pub fn build(nodes: &[NodeBox], center_name: &str) -> Option<Self> {
        let center = find_center(nodes, center_name)?;
        let hub = nodes[center].center();
        let lines = nodes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != center)
            .map(|(i, node)| ConnectorLine::new(hub, node.center(), i))
            .collect();
        Some(Self { center, lines })
    }

    /// Advance every connector by one frame
    pub fn advance(&mut self, step: f32) {
        for line in &mut self.lines {
            line.advance(step);
        }
    }

    pub fn is_complete(&self) -> bool {
        self.lines.iter().all(ConnectorLine::is_complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PROGRESS_STEP;
    use proptest::prelude::*;

    fn sample_nodes() -> Vec<NodeBox> {
        vec![
            NodeBox::new(Some("Rust"), 0.0, 0.0, 40.0, 20.0),
            NodeBox::new(Some("Megamind"), 200.0, 100.0, 80.0, 40.0),
            NodeBox::new(Some("WebGPU"), 400.0, 300.0, 60.0, 30.0),
            NodeBox::new(None, 100.0, 400.0, 20.0, 20.0),
        ]
    }

    #[test]
    fn test_node_center() {
        let node = NodeBox::new(None, 10.0, 20.0, 100.0, 50.0);
        assert_eq!(node.center(), Vec2::new(60.0, 45.0));
    }

    #[test]
    fn test_find_center() {
        let nodes = sample_nodes();
        assert_eq!(find_center(&nodes, "Megamind"), Some(1));
        assert_eq!(find_center(&nodes, "Nobody"), None);
        assert_eq!(find_center(&[], "Megamind"), None);
    }

    #[test]
    fn test_layout_one_line_per_other_node() {
        let nodes = sample_nodes();
        let layout = TreeLayout::build(&nodes, "Megamind").unwrap();
        assert_eq!(layout.center, 1);
        assert_eq!(layout.lines.len(), 3);

        let hub = Vec2::new(240.0, 120.0);
        let targets: Vec<usize> = layout.lines.iter().map(|l| l.target).collect();
        assert_eq!(targets, vec![0, 2, 3]);
        for line in &layout.lines {
            assert_eq!(line.from, hub);
            assert_eq!(line.to, nodes[line.target].center());
            assert_eq!(line.progress, 0.0);
        }
    }

    #[test]
    fn test_layout_empty_nodes() {
        let layout = TreeLayout::build(&[], "Megamind");
        assert_eq!(layout.map_or(0, |l| l.lines.len()), 0);
    }

    #[test]
    fn test_layout_hub_only() {
        let nodes = vec![NodeBox::new(Some("Megamind"), 0.0, 0.0, 10.0, 10.0)];
        let layout = TreeLayout::build(&nodes, "Megamind").unwrap();
        assert!(layout.lines.is_empty());
        assert!(layout.is_complete());
    }

    #[test]
    fn test_progress_full_after_fifty_steps() {
        let mut line = ConnectorLine::new(Vec2::ZERO, Vec2::new(100.0, 0.0), 0);
        for _ in 0..49 {
            line.advance(PROGRESS_STEP);
        }
        assert!(line.progress < 1.0);
        line.advance(PROGRESS_STEP);
        assert_eq!(line.progress, 1.0);
        line.advance(PROGRESS_STEP);
        assert_eq!(line.progress, 1.0);
        assert_eq!(line.head(), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_head_and_control_point() {
        let mut line = ConnectorLine::new(Vec2::ZERO, Vec2::new(100.0, 50.0), 0);
        line.progress = 0.5;
        assert_eq!(line.head(), Vec2::new(50.0, 25.0));
        assert_eq!(line.control_point(Vec2::new(0.0, 10.0)), Vec2::new(50.0, 35.0));
    }

    #[test]
    fn test_bow_and_jitter_offsets() {
        let bow = bow_offset(0.0, 50.0, 500.0);
        assert!(bow.x.abs() < 1e-6);
        assert!((bow.y - 50.0).abs() < 1e-4);

        let quarter = 500.0 * std::f64::consts::FRAC_PI_2;
        let bow = bow_offset(quarter, 50.0, 500.0);
        assert!((bow.x - 50.0).abs() < 1e-3);
        assert!(bow.y.abs() < 1e-3);

        let jitter = jitter_offset(200.0 * std::f64::consts::FRAC_PI_2, 3.0, 200.0);
        assert_eq!(jitter.x, 0.0);
        assert!((jitter.y - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_reveal_delays() {
        assert_eq!(reveal_delay_ms(0, 150.0), 0.0);
        assert_eq!(reveal_delay_ms(4, 150.0), 600.0);
    }

    proptest! {
        #[test]
        fn prop_progress_monotonic_and_bounded(
            step in 0.001f32..1.0,
            frames in 0usize..2000,
        ) {
            let mut line = ConnectorLine::new(Vec2::ZERO, Vec2::ONE, 0);
            let mut prev = line.progress;
            for _ in 0..frames {
                line.advance(step);
                prop_assert!(line.progress >= prev);
                prop_assert!(line.progress <= 1.0);
                prev = line.progress;
            }
        }
    }
}
