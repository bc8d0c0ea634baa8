//! Edge pinning constraints
//!
//! Each constant follows the `child.edge = parent.edge + constant` convention,
//! so a positive `bottom` moves the child's bottom edge *down* past the
//! parent's, and a negative one pulls it up. Constraints resolve to an
//! absolutely positioned Taffy style whose insets are derived from the
//! constants.

use taffy::prelude::*;

/// Four edge-to-edge constraints of a node against its parent
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeConstraints {
    pub top: f32,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeConstraints {
    /// Pinned flush to all four edges
    pub const PINNED: EdgeConstraints = EdgeConstraints {
        top: 0.0,
        left: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Absolutely positioned style realizing these constraints
    pub fn to_style(&self) -> Style {
        Style {
            position: Position::Absolute,
            inset: Rect {
                top: LengthPercentageAuto::Length(self.top),
                left: LengthPercentageAuto::Length(self.left),
                right: LengthPercentageAuto::Length(-self.right),
                bottom: LengthPercentageAuto::Length(-self.bottom),
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_constant_maps_to_negated_inset() {
        let constraints = EdgeConstraints {
            bottom: 24.0,
            ..EdgeConstraints::PINNED
        };
        let style = constraints.to_style();

        assert_eq!(style.position, Position::Absolute);
        assert_eq!(style.inset.bottom, LengthPercentageAuto::Length(-24.0));
        assert_eq!(style.inset.top, LengthPercentageAuto::Length(0.0));
    }
}
