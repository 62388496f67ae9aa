//! Scroll visibility decision for fade-in sections

/// Whether a section should carry the visible class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    /// Decide from the intersection ratio alone. Prior state never matters,
    /// so re-delivering an entry is harmless.
    pub fn from_ratio(ratio: f64, threshold: f64) -> Self {
        if ratio >= threshold {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    pub fn is_visible(&self) -> bool {
        *self == Visibility::Visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::VISIBILITY_THRESHOLD;

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(Visibility::from_ratio(0.2, VISIBILITY_THRESHOLD), Visibility::Visible);
        assert_eq!(Visibility::from_ratio(0.19999, VISIBILITY_THRESHOLD), Visibility::Hidden);
        assert_eq!(Visibility::from_ratio(1.0, VISIBILITY_THRESHOLD), Visibility::Visible);
        assert_eq!(Visibility::from_ratio(0.0, VISIBILITY_THRESHOLD), Visibility::Hidden);
    }

    #[test]
    fn test_nan_ratio_hidden() {
        assert!(!Visibility::from_ratio(f64::NAN, VISIBILITY_THRESHOLD).is_visible());
    }

    #[test]
    fn test_repeated_reports_idempotent() {
        for ratio in [0.05, 0.2, 0.7] {
            let first = Visibility::from_ratio(ratio, VISIBILITY_THRESHOLD);
            for _ in 0..3 {
                assert_eq!(Visibility::from_ratio(ratio, VISIBILITY_THRESHOLD), first);
            }
        }
    }
}
