/// Trait for mapping a value from one scale to another.
pub trait Scalable {
    /// Maps a value from one scale to another (linear, unclamped).
    ///
    /// # Parameters
    /// * `self`:  the value to map
    /// * `from_low`:  the low end of the originating range
    /// * `from_high`:  the high end of the originating range
    /// * `to_low`:  the low end of the target range
    /// * `to_high`:  the high end of the target range
    fn scale(self, from_low: Self, from_high: Self, to_low: Self, to_high: Self) -> Self;
}

macro_rules! impl_float_scalable {
    ($($float:ty),*) => {
        $(
            impl Scalable for $float {
                fn scale(self, from_low: Self, from_high: Self, to_low: Self, to_high: Self) -> Self {
                    (self - from_low) * (to_high - to_low) / (from_high - from_low) + to_low
                }
            }
        )*
    };
}

impl_float_scalable!(f32, f64);
