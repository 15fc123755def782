//! Gradient stop distribution.
//!
//! A gradient fill lists `n` colors. Hard distribution gives each color an
//! equal `1/n` band with duplicated stops at the boundaries, so bands meet
//! without blending. Soft distribution places one stop per color and lets
//! neighbours blend.

use resvg::tiny_skia::{Color, GradientStop, LinearGradient, Point, Shader, SpreadMode, Transform};

use crate::color::Rgba;
use crate::geometry::Axis;
use crate::theme::FillStyle;

/// How gradient colors are spread along the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopPolicy {
    /// Sharp transitions between equal-width bands.
    Hard,
    /// Smooth blending between neighbouring colors.
    Soft,
}

impl StopPolicy {
    pub fn stops(self, colors: &[Rgba]) -> Vec<(f32, Rgba)> {
        match self {
            StopPolicy::Hard => hard_stops(colors),
            StopPolicy::Soft => soft_stops(colors),
        }
    }
}

/// Stops at `0, 1/n, 1/n, 2/n, 2/n, …, 1`, color `i` at both ends of its band.
pub fn hard_stops(colors: &[Rgba]) -> Vec<(f32, Rgba)> {
    let n = colors.len();
    let band = 1.0 / n as f32;
    let mut stops = Vec::with_capacity(n * 2);
    for (i, &color) in colors.iter().enumerate() {
        stops.push((band * i as f32, color));
        let end = if i + 1 == n { 1.0 } else { band * (i + 1) as f32 };
        stops.push((end, color));
    }
    stops
}

/// Stops at `0, 1/n, …, (n-2)/n` for all but the last color, which sits at `1`.
pub fn soft_stops(colors: &[Rgba]) -> Vec<(f32, Rgba)> {
    let Some((&last, rest)) = colors.split_last() else {
        return Vec::new();
    };
    let band = 1.0 / colors.len() as f32;
    let mut stops: Vec<_> = rest
        .iter()
        .enumerate()
        .map(|(i, &color)| (band * i as f32, color))
        .collect();
    stops.push((1.0, last));
    stops
}

/// Builds a shader for `style`. Gradient coordinates are in design units and
/// follow the path transform at draw time.
pub fn shader(style: &FillStyle, axis: Axis, policy: StopPolicy) -> Shader<'static> {
    match style {
        FillStyle::Solid(color) | FillStyle::Gradient([color]) => {
            Shader::SolidColor(color.to_skia())
        }
        FillStyle::Gradient(colors) => {
            let stops = policy
                .stops(colors)
                .into_iter()
                .map(|(position, color)| GradientStop::new(position, color.to_skia()))
                .collect();
            LinearGradient::new(
                Point::from_xy(axis.x0, axis.y0),
                Point::from_xy(axis.x1, axis.y1),
                stops,
                SpreadMode::Pad,
                Transform::identity(),
            )
            .unwrap_or_else(|| {
                let fallback = colors.last().map_or(Color::TRANSPARENT, |c| c.to_skia());
                Shader::SolidColor(fallback)
            })
        }
    }
}
