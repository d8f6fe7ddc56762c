//! Decorative background: floating shapes and pulsing blobs.
//!
//! Generation is a pure function of the random source, so a seeded
//! [`rand::rngs::SmallRng`] reproduces the exact same layout. The host turns
//! each spec into a `div` with [`ShapeSpec::class_name`] and
//! [`ShapeSpec::style_patch`] and appends it to the background container.
//!
//! Specs are write-once: nothing mutates them after generation, and calling
//! [`Decorations::generate`] again yields a second, independent set.

#[cfg(test)]
#[path = "background_test.rs"]
mod background_test;

use rand::Rng;

use crate::consts::{
    PARALLAX_RANGE_PX, PARALLAX_STRIDE, POSITION_PCT, PULSE_COUNT, PULSE_DELAY_S, PULSE_SIZE_PX, SHAPE_COUNT,
    SHAPE_DELAY_S, SHAPE_DURATION_S, SHAPE_SIZE_PX,
};
use crate::style::{StylePatch, pct, px, secs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Square,
    Circle,
    /// Drawn with borders in the stylesheet; never sized inline.
    Triangle,
    Diamond,
}

impl ShapeKind {
    pub const ALL: [Self; 4] = [Self::Square, Self::Circle, Self::Triangle, Self::Diamond];

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Diamond => "diamond",
        }
    }

    #[must_use]
    pub fn is_sized(self) -> bool {
        self != Self::Triangle
    }
}

/// Keyframe animation a floating shape runs. Names match the page stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatAnimation {
    FloatAround,
    FloatSlow,
    FloatFast,
}

impl FloatAnimation {
    pub const ALL: [Self; 3] = [Self::FloatAround, Self::FloatSlow, Self::FloatFast];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FloatAround => "floatAround",
            Self::FloatSlow => "floatSlow",
            Self::FloatFast => "floatFast",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    pub animation: FloatAnimation,
    /// Edge length in pixels; `None` for triangles.
    pub size: Option<f64>,
    /// Horizontal position in percent of the container.
    pub left: f64,
    /// Vertical position in percent of the container.
    pub top: f64,
    pub duration: f64,
    pub delay: f64,
}

impl ShapeSpec {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let kind = ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())];
        let animation = FloatAnimation::ALL[rng.random_range(0..FloatAnimation::ALL.len())];
        // Drawn for every kind; triangles discard it.
        let size = sample(rng, SHAPE_SIZE_PX);
        Self {
            kind,
            animation,
            size: kind.is_sized().then_some(size),
            left: sample(rng, POSITION_PCT),
            top: sample(rng, POSITION_PCT),
            duration: sample(rng, SHAPE_DURATION_S),
            delay: sample(rng, SHAPE_DELAY_S),
        }
    }

    #[must_use]
    pub fn class_name(&self) -> String {
        format!("floating-shape {}", self.kind.class())
    }

    #[must_use]
    pub fn style_patch(&self) -> StylePatch {
        let mut patch = StylePatch::new();
        if let Some(size) = self.size {
            patch = patch.set("width", px(size)).set("height", px(size));
        }
        patch
            .set("left", pct(self.left))
            .set("top", pct(self.top))
            .set(
                "animation",
                format!("{} {} ease-in-out infinite", self.animation.name(), secs(self.duration)),
            )
            .set("animation-delay", secs(self.delay))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PulseSpec {
    pub size: f64,
    pub left: f64,
    pub top: f64,
    pub delay: f64,
}

impl PulseSpec {
    pub const CLASS_NAME: &'static str = "pulse-element";

    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size: sample(rng, PULSE_SIZE_PX),
            left: sample(rng, POSITION_PCT),
            top: sample(rng, POSITION_PCT),
            delay: sample(rng, PULSE_DELAY_S),
        }
    }

    #[must_use]
    pub fn style_patch(&self) -> StylePatch {
        StylePatch::new()
            .set("width", px(self.size))
            .set("height", px(self.size))
            .set("left", pct(self.left))
            .set("top", pct(self.top))
            .set("animation-delay", secs(self.delay))
    }
}

/// One full set of decorative nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Decorations {
    pub shapes: Vec<ShapeSpec>,
    pub pulses: Vec<PulseSpec>,
}

impl Decorations {
    /// Draw [`SHAPE_COUNT`] shapes followed by [`PULSE_COUNT`] pulses.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let shapes = (0..SHAPE_COUNT).map(|_| ShapeSpec::generate(rng)).collect();
        let pulses = (0..PULSE_COUNT).map(|_| PulseSpec::generate(rng)).collect();
        Self { shapes, pulses }
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, (low, high): (f64, f64)) -> f64 {
    rng.random_range(low..=high)
}

/// Whether the shape at `index` follows the pointer.
#[must_use]
pub fn follows_pointer(index: usize) -> bool {
    index % PARALLAX_STRIDE == 0
}

/// Parallax offset for a pointer position given as fractions of the viewport.
///
/// Uses the standalone `translate` property so it composes with the keyframe
/// `transform` and replaces, rather than stacks on, the previous offset.
#[must_use]
pub fn parallax_patch(x_frac: f64, y_frac: f64) -> StylePatch {
    let dx = (x_frac - 0.5) * PARALLAX_RANGE_PX;
    let dy = (y_frac - 0.5) * PARALLAX_RANGE_PX;
    StylePatch::new().set("translate", format!("{} {}", px(dx), px(dy)))
}
