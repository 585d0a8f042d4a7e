use simple_easing::*;

/// Represents the set of preset easing functions.
///
/// An easing function maps a normalized progress (0.0 at the beginning, 1.0 at the end) to an
/// eased progress according to a curve. All presets satisfy `call(0.0) == 0.0` and
/// `call(1.0) == 1.0`; the `Back` and `Elastic` families overshoot in between.
///
/// See <https://easings.net> for a representation of easing methods.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Easing {
    /// <https://easings.net/#easeInBack>
    BackIn,
    /// <https://easings.net/#easeInOutBack>
    BackInOut,
    /// <https://easings.net/#easeOutBack>
    BackOut,
    /// <https://easings.net/#easeInBounce>
    BounceIn,
    /// <https://easings.net/#easeInOutBounce>
    BounceInOut,
    /// <https://easings.net/#easeOutBounce>
    BounceOut,
    /// <https://easings.net/#easeInCirc>
    CircIn,
    /// <https://easings.net/#easeInOutCirc>
    CircInOut,
    /// <https://easings.net/#easeOutCirc>
    CircOut,
    /// <https://easings.net/#easeInCubic>
    CubicIn,
    /// <https://easings.net/#easeInOutCubic>
    CubicInOut,
    /// <https://easings.net/#easeOutCubic>
    CubicOut,
    /// <https://easings.net/#easeInElastic>
    ElasticIn,
    /// <https://easings.net/#easeInOutElastic>
    ElasticInOut,
    /// <https://easings.net/#easeOutElastic>
    ElasticOut,
    /// <https://easings.net/#easeInExpo>
    ExpoIn,
    /// <https://easings.net/#easeInOutExpo>
    ExpoInOut,
    /// <https://easings.net/#easeOutExpo>
    ExpoOut,
    /// Applies no transformation (default).
    #[default]
    Linear,
    /// <https://easings.net/#easeInQuad>
    QuadIn,
    /// <https://easings.net/#easeInOutQuad>
    QuadInOut,
    /// <https://easings.net/#easeOutQuad>
    QuadOut,
    /// <https://easings.net/#easeInQuart>
    QuartIn,
    /// <https://easings.net/#easeInOutQuart>
    QuartInOut,
    /// <https://easings.net/#easeOutQuart>
    QuartOut,
    /// <https://easings.net/#easeInQuint>
    QuintIn,
    /// <https://easings.net/#easeInOutQuint>
    QuintInOut,
    /// <https://easings.net/#easeOutQuint>
    QuintOut,
    /// <https://easings.net/#easeInSine>
    SineIn,
    /// <https://easings.net/#easeInOutSine>
    SineInOut,
    /// <https://easings.net/#easeOutSine>
    SineOut,
}

impl Easing {
    /// Calls the easing function on a normalized progress.
    ///
    /// ```
    /// use tally::animations::Easing;
    /// assert_eq!(Easing::QuadOut.call(0.5), 0.75);
    /// ```
    pub fn call(&self, t: f32) -> f32 {
        match self {
            Easing::BackIn => back_in(t),
            Easing::BackInOut => back_in_out(t),
            Easing::BackOut => back_out(t),
            Easing::BounceIn => bounce_in(t),
            Easing::BounceInOut => bounce_in_out(t),
            Easing::BounceOut => bounce_out(t),
            Easing::CircIn => circ_in(t),
            Easing::CircInOut => circ_in_out(t),
            Easing::CircOut => circ_out(t),
            Easing::CubicIn => cubic_in(t),
            Easing::CubicInOut => cubic_in_out(t),
            Easing::CubicOut => cubic_out(t),
            Easing::ElasticIn => elastic_in(t),
            Easing::ElasticInOut => elastic_in_out(t),
            Easing::ElasticOut => elastic_out(t),
            Easing::ExpoIn => expo_in(t),
            Easing::ExpoInOut => expo_in_out(t),
            Easing::ExpoOut => expo_out(t),
            Easing::Linear => t,
            Easing::QuadIn => quad_in(t),
            Easing::QuadInOut => quad_in_out(t),
            Easing::QuadOut => quad_out(t),
            Easing::QuartIn => quart_in(t),
            Easing::QuartInOut => quart_in_out(t),
            Easing::QuartOut => quart_out(t),
            Easing::QuintIn => quint_in(t),
            Easing::QuintInOut => quint_in_out(t),
            Easing::QuintOut => quint_out(t),
            Easing::SineIn => sine_in(t),
            Easing::SineInOut => sine_in_out(t),
            Easing::SineOut => sine_out(t),
        }
    }

    /// Indicates whether the curve never goes backward (no overshoot, no bounce).
    pub fn is_monotonic(&self) -> bool {
        !matches!(
            self,
            Easing::BackIn
                | Easing::BackInOut
                | Easing::BackOut
                | Easing::BounceIn
                | Easing::BounceInOut
                | Easing::BounceOut
                | Easing::ElasticIn
                | Easing::ElasticInOut
                | Easing::ElasticOut
        )
    }
}

#[cfg(test)]
pub(crate) const ALL_EASINGS: [Easing; 31] = [
    Easing::BackIn,
    Easing::BackInOut,
    Easing::BackOut,
    Easing::BounceIn,
    Easing::BounceInOut,
    Easing::BounceOut,
    Easing::CircIn,
    Easing::CircInOut,
    Easing::CircOut,
    Easing::CubicIn,
    Easing::CubicInOut,
    Easing::CubicOut,
    Easing::ElasticIn,
    Easing::ElasticInOut,
    Easing::ElasticOut,
    Easing::ExpoIn,
    Easing::ExpoInOut,
    Easing::ExpoOut,
    Easing::Linear,
    Easing::QuadIn,
    Easing::QuadInOut,
    Easing::QuadOut,
    Easing::QuartIn,
    Easing::QuartInOut,
    Easing::QuartOut,
    Easing::QuintIn,
    Easing::QuintInOut,
    Easing::QuintOut,
    Easing::SineIn,
    Easing::SineInOut,
    Easing::SineOut,
];
