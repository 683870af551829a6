//! Timing curves for fixed-duration animations.

/// Cubic timing curve applied to linear progress.
///
/// Input and output are both in `[0.0, 1.0]`; out-of-range input is clamped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Starts slow, ends fast.
    EaseIn,
    /// Starts fast, ends slow.
    #[default]
    EaseOut,
    /// Slow at both ends.
    EaseInOut,
}

impl Easing {
    /// Maps linear progress to eased progress.
    pub fn apply(self, progress: f32) -> f32 {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at t=0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at t=1");
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=50 {
                let v = easing.apply(i as f32 / 50.0);
                assert!(v >= prev - 1e-6, "{easing:?} not monotonic at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_easing_clamps_input() {
        assert_eq!(Easing::EaseOut.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseIn.apply(2.0), 1.0);
    }

    #[test]
    fn test_ease_out_leads_ease_in() {
        assert!(Easing::EaseOut.apply(0.3) > Easing::Linear.apply(0.3));
        assert!(Easing::EaseIn.apply(0.3) < Easing::Linear.apply(0.3));
    }
}
