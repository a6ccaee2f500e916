//! Per-axis measure specs and the square sizing rule.
//!
//! A parent hands each child one [`MeasureSpec`] per axis. The spec carries a
//! [`MeasureMode`] telling the child how much freedom it has, and a size that
//! only matters when the mode is not [`MeasureMode::Unconstrained`].

const MODE_SHIFT: u32 = 30;
const MODE_MASK: u32 = 0x3 << MODE_SHIFT;
const SIZE_MASK: u32 = !MODE_MASK;

/// How a parent constrains one dimension of a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureMode {
    /// The parent dictates the exact size.
    Exact,
    /// The child may be as large as it wants up to the given size.
    AtMost,
    /// The child may pick any size.
    Unconstrained,
}

impl MeasureMode {
    /// Decode the two mode bits of a packed spec.
    ///
    /// Unknown bit patterns fall back to `Unconstrained`.
    pub fn from_bits(bits: u32) -> Self {
        match bits & MODE_MASK {
            0 => MeasureMode::Unconstrained,
            b if b == 1 << MODE_SHIFT => MeasureMode::Exact,
            b if b == 2 << MODE_SHIFT => MeasureMode::AtMost,
            b => {
                log::warn!(
                    "Unknown measure mode bits {:#x}, treating as unconstrained",
                    b >> MODE_SHIFT
                );
                MeasureMode::Unconstrained
            }
        }
    }

    fn bits(self) -> u32 {
        match self {
            MeasureMode::Unconstrained => 0,
            MeasureMode::Exact => 1 << MODE_SHIFT,
            MeasureMode::AtMost => 2 << MODE_SHIFT,
        }
    }
}

/// A constraint on one axis, as handed down by the parent for a single layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: u32,
}

impl MeasureSpec {
    pub const fn exact(size: u32) -> Self {
        Self {
            mode: MeasureMode::Exact,
            size,
        }
    }

    pub const fn at_most(size: u32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    pub const fn unconstrained() -> Self {
        Self {
            mode: MeasureMode::Unconstrained,
            size: 0,
        }
    }

    /// Decode a spec packed into one integer: mode in the top two bits,
    /// size in the remaining thirty.
    pub fn from_packed(packed: u32) -> Self {
        Self {
            mode: MeasureMode::from_bits(packed),
            size: packed & SIZE_MASK,
        }
    }

    /// Pack this spec into one integer. Sizes wider than thirty bits are truncated.
    pub fn to_packed(self) -> u32 {
        self.mode.bits() | (self.size & SIZE_MASK)
    }

    /// Convert a min/max box constraint on one axis.
    ///
    /// A tight finite range becomes `Exact`, a finite maximum becomes `AtMost`
    /// and an infinite maximum becomes `Unconstrained`. Sizes are floored and
    /// negative values clamp to zero.
    pub fn from_bounds(min: f32, max: f32) -> Self {
        if !max.is_finite() {
            return Self::unconstrained();
        }
        let size = max.max(0.0).floor() as u32;
        if min == max {
            Self::exact(size)
        } else {
            Self::at_most(size)
        }
    }

    /// Resolve this axis against the widget's desired size.
    pub fn resolve(self, desired: u32) -> u32 {
        match self.mode {
            MeasureMode::Exact => self.size,
            MeasureMode::AtMost => desired.min(self.size),
            MeasureMode::Unconstrained => desired,
        }
    }
}

impl Default for MeasureSpec {
    fn default() -> Self {
        Self::unconstrained()
    }
}

/// Resolve both axes independently and keep the smaller result, so the
/// reported width and height are always equal.
pub fn resolve_square(
    width: MeasureSpec,
    height: MeasureSpec,
    desired_width: u32,
    desired_height: u32,
) -> u32 {
    let actual_width = width.resolve(desired_width);
    let actual_height = height.resolve(desired_height);
    actual_width.min(actual_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [MeasureMode; 3] = [
        MeasureMode::Exact,
        MeasureMode::AtMost,
        MeasureMode::Unconstrained,
    ];

    #[test]
    fn test_resolve_exact_uses_host_size() {
        assert_eq!(MeasureSpec::exact(300).resolve(120), 300);
        assert_eq!(MeasureSpec::exact(0).resolve(120), 0);
    }

    #[test]
    fn test_resolve_at_most_caps_desired() {
        assert_eq!(MeasureSpec::at_most(200).resolve(120), 120);
        assert_eq!(MeasureSpec::at_most(80).resolve(120), 80);
    }

    #[test]
    fn test_resolve_unconstrained_uses_desired() {
        assert_eq!(MeasureSpec::unconstrained().resolve(120), 120);
        let stale_size = MeasureSpec {
            mode: MeasureMode::Unconstrained,
            size: 7,
        };
        assert_eq!(stale_size.resolve(120), 120);
    }

    #[test]
    fn test_square_exact_exact() {
        let side = resolve_square(MeasureSpec::exact(100), MeasureSpec::exact(50), 120, 120);
        assert_eq!(side, 50);
    }

    #[test]
    fn test_square_at_most_at_most() {
        let side = resolve_square(
            MeasureSpec::at_most(200),
            MeasureSpec::at_most(80),
            120,
            120,
        );
        assert_eq!(side, 80);
    }

    #[test]
    fn test_square_unconstrained() {
        let side = resolve_square(
            MeasureSpec::unconstrained(),
            MeasureSpec::unconstrained(),
            120,
            120,
        );
        assert_eq!(side, 120);
    }

    #[test]
    fn test_square_never_exceeds_either_axis() {
        let sizes = [0, 1, 50, 119, 120, 121, 500];
        for &wm in &MODES {
            for &hm in &MODES {
                for &ws in &sizes {
                    for &hs in &sizes {
                        let w = MeasureSpec { mode: wm, size: ws };
                        let h = MeasureSpec { mode: hm, size: hs };
                        let side = resolve_square(w, h, 120, 120);
                        assert!(side <= w.resolve(120));
                        assert!(side <= h.resolve(120));
                        assert!(side == w.resolve(120) || side == h.resolve(120));
                    }
                }
            }
        }
    }

    #[test]
    fn test_square_with_non_square_desired_size() {
        let side = resolve_square(
            MeasureSpec::unconstrained(),
            MeasureSpec::unconstrained(),
            160,
            90,
        );
        assert_eq!(side, 90);
    }

    #[test]
    fn test_packed_known_modes() {
        assert_eq!(
            MeasureSpec::from_packed((1 << 30) | 250),
            MeasureSpec::exact(250)
        );
        assert_eq!(
            MeasureSpec::from_packed((2 << 30) | 64),
            MeasureSpec::at_most(64)
        );
        assert_eq!(MeasureSpec::from_packed(0).mode, MeasureMode::Unconstrained);
    }

    #[test]
    fn test_packed_unknown_mode_is_unconstrained() {
        let spec = MeasureSpec::from_packed((3 << 30) | 40);
        assert_eq!(spec.mode, MeasureMode::Unconstrained);
        assert_eq!(spec.size, 40);
        assert_eq!(spec.resolve(120), 120);
    }

    #[test]
    fn test_to_packed() {
        assert_eq!(MeasureSpec::exact(250).to_packed(), (1 << 30) | 250);
        assert_eq!(MeasureSpec::at_most(64).to_packed(), (2 << 30) | 64);
        assert_eq!(MeasureSpec::unconstrained().to_packed(), 0);
        let spec = MeasureSpec::at_most(1234);
        assert_eq!(MeasureSpec::from_packed(spec.to_packed()), spec);
    }

    #[test]
    fn test_from_bounds() {
        assert_eq!(MeasureSpec::from_bounds(40.0, 40.0), MeasureSpec::exact(40));
        assert_eq!(MeasureSpec::from_bounds(0.0, 99.7), MeasureSpec::at_most(99));
        assert_eq!(
            MeasureSpec::from_bounds(0.0, f32::INFINITY),
            MeasureSpec::unconstrained()
        );
        assert_eq!(MeasureSpec::from_bounds(-5.0, -5.0), MeasureSpec::exact(0));
    }

    #[test]
    fn test_default_is_unconstrained() {
        assert_eq!(MeasureSpec::default(), MeasureSpec::unconstrained());
    }
}
