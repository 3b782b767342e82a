//! Color representation

/// Linear RGBA color with components in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    /// Opaque gray with the given white level.
    pub const fn gray(white: f32) -> Self {
        Self::rgb(white, white, white)
    }

    pub fn alpha(&self) -> f32 {
        self.3
    }

    pub fn components(&self) -> [f32; 4] {
        [self.0, self.1, self.2, self.3]
    }

    /// Component-wise interpolation towards `target`.
    pub fn lerp(&self, target: &Color, fraction: f32) -> Self {
        let mix = |from: f32, to: f32| from + (to - from) * fraction;
        Self(
            mix(self.0, target.0),
            mix(self.1, target.1),
            mix(self.2, target.2),
            mix(self.3, target.3),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_both_ends() {
        let from = Color::gray(0.9);
        let to = Color::rgb(0.25, 0.74, 0.55);
        assert_eq!(from.lerp(&to, 0.0), from);
        assert_eq!(from.lerp(&to, 1.0), to);
    }

    #[test]
    fn lerp_midpoint_mixes_components() {
        let mid = Color::BLACK.lerp(&Color::WHITE, 0.5);
        assert_eq!(mid, Color::gray(0.5));
        assert_eq!(mid.alpha(), 1.0);
    }
}
