/// Blank margin added around the measured text extents, per side, in
/// logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Equal padding on all four sides.
    pub fn uniform(v: f32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Expand CSS-style shorthand:
    /// - 1 value: all sides
    /// - 2 values: `[vertical, horizontal]`
    /// - 4 values: `[top, right, bottom, left]`
    ///
    /// Any other length is rejected.
    pub fn from_values(values: &[f32]) -> Option<Self> {
        match values {
            [v] => Some(Self::uniform(*v)),
            [v, h] => Some(Self {
                top: *v,
                right: *h,
                bottom: *v,
                left: *h,
            }),
            [t, r, b, l] => Some(Self {
                top: *t,
                right: *r,
                bottom: *b,
                left: *l,
            }),
            _ => None,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl From<f32> for Padding {
    fn from(v: f32) -> Self {
        Self::uniform(v)
    }
}

impl From<[f32; 2]> for Padding {
    fn from([v, h]: [f32; 2]) -> Self {
        Self {
            top: v,
            right: h,
            bottom: v,
            left: h,
        }
    }
}

impl From<[f32; 4]> for Padding {
    fn from([t, r, b, l]: [f32; 4]) -> Self {
        Self {
            top: t,
            right: r,
            bottom: b,
            left: l,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_expansion() {
        assert_eq!(Padding::from_values(&[5.0]), Some(Padding::uniform(5.0)));
        assert_eq!(
            Padding::from_values(&[1.0, 2.0]),
            Some(Padding {
                top: 1.0,
                right: 2.0,
                bottom: 1.0,
                left: 2.0
            })
        );
        assert_eq!(
            Padding::from_values(&[1.0, 2.0, 3.0, 4.0]),
            Some(Padding {
                top: 1.0,
                right: 2.0,
                bottom: 3.0,
                left: 4.0
            })
        );
    }

    #[test]
    fn rejects_other_lengths() {
        assert_eq!(Padding::from_values(&[]), None);
        assert_eq!(Padding::from_values(&[1.0, 2.0, 3.0]), None);
        assert_eq!(Padding::from_values(&[1.0; 5]), None);
    }
}
