pub trait FloatExt: Sized {
    /// `self == other`
    fn eq(self, other: Self) -> bool;

    /// `self != other`
    fn not_eq(self, other: Self) -> bool;

    /// `self` clamped to `[0, 1]`, mapping NaN to `0`.
    fn clamp01(self) -> Self;
}

macro_rules! impl_float_ext {
    ( $ty:ty ) => {
        impl FloatExt for $ty {
            fn eq(self, other: Self) -> bool {
                (self - other).abs() < <$ty>::EPSILON
            }

            fn not_eq(self, other: Self) -> bool {
                (self - other).abs() >= <$ty>::EPSILON
            }

            fn clamp01(self) -> Self {
                if self.is_nan() {
                    0.0
                } else {
                    self.clamp(0.0, 1.0)
                }
            }
        }
    };
}

impl_float_ext!(f32);
impl_float_ext!(f64);
