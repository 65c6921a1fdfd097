//! # Plot Descriptors
//!
//! Everything a renderer needs to draw one diagram: the sampled series, the
//! zero baseline `([0, L], [0, 0])`, and a display style for each. The
//! engine does no drawing itself; `diag_gui` consumes [`DiagramPlot`].
//!
//! ## Example
//!
//! ```rust
//! use diag_core::calculations::Field;
//! use diag_core::context::{Beam, Context};
//! use diag_core::loads::LoadSet;
//! use diag_core::plot::{DiagramPlot, DiagramStyles, LineColor};
//!
//! let ctx = Context::new(Beam::new(5.0), LoadSet::new())?;
//! let plot = DiagramPlot::new(&ctx, Field::Shear, &DiagramStyles::default());
//!
//! assert_eq!(plot.style.title, "Shear force");
//! assert_eq!(plot.baseline_style.line_color, LineColor::Red);
//! assert_eq!(plot.baseline.positions, vec![0.0, 5.0]);
//! # Ok::<(), diag_core::errors::DiagError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{sample, Field, Series};
use crate::context::Context;

/// Named line colors understood by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineColor {
    #[default]
    Black,
    Red,
    Blue,
    Green,
    Orange,
    Gray,
}

impl LineColor {
    /// RGB components in `0.0..=1.0`
    pub fn rgb(&self) -> [f32; 3] {
        match self {
            LineColor::Black => [0.0, 0.0, 0.0],
            LineColor::Red => [0.8, 0.1, 0.1],
            LineColor::Blue => [0.2, 0.5, 0.8],
            LineColor::Green => [0.2, 0.7, 0.3],
            LineColor::Orange => [0.8, 0.4, 0.2],
            LineColor::Gray => [0.5, 0.5, 0.5],
        }
    }
}

/// Display options for one line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    /// Legend title; empty means untitled
    pub title: String,
    pub line_width: f32,
    pub line_color: LineColor,
}

impl PlotStyle {
    pub fn new(title: impl Into<String>, line_width: f32, line_color: LineColor) -> Self {
        PlotStyle {
            title: title.into(),
            line_width,
            line_color,
        }
    }

    /// Thin red untitled line for the zero reference
    pub fn baseline() -> Self {
        PlotStyle::new("", 1.2, LineColor::Red)
    }

    /// Thick black line titled with the field name
    pub fn diagram(field: Field) -> Self {
        PlotStyle::new(field.display_name(), 3.0, LineColor::Black)
    }
}

/// Styles for all diagrams of an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramStyles {
    pub baseline: PlotStyle,
    pub axial: PlotStyle,
    pub shear: PlotStyle,
    pub moment: PlotStyle,
}

impl Default for DiagramStyles {
    fn default() -> Self {
        DiagramStyles {
            baseline: PlotStyle::baseline(),
            axial: PlotStyle::diagram(Field::Axial),
            shear: PlotStyle::diagram(Field::Shear),
            moment: PlotStyle::diagram(Field::Moment),
        }
    }
}

impl DiagramStyles {
    pub fn for_field(&self, field: Field) -> &PlotStyle {
        match field {
            Field::Axial => &self.axial,
            Field::Shear => &self.shear,
            Field::Moment => &self.moment,
        }
    }
}

/// A diagram ready to render: the field series over a zero baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramPlot {
    pub field: Field,
    pub beam_length: f64,
    pub baseline: Series,
    pub diagram: Series,
    pub baseline_style: PlotStyle,
    pub style: PlotStyle,
}

impl DiagramPlot {
    /// Sample `field` from `ctx` and attach styles
    pub fn new(ctx: &Context, field: Field, styles: &DiagramStyles) -> Self {
        Self::from_series(ctx.beam().length, field, sample(ctx, field), styles)
    }

    /// Wrap an already sampled series
    pub fn from_series(beam_length: f64, field: Field, diagram: Series, styles: &DiagramStyles) -> Self {
        DiagramPlot {
            field,
            beam_length,
            baseline: Series::baseline(beam_length),
            diagram,
            baseline_style: styles.baseline.clone(),
            style: styles.for_field(field).clone(),
        }
    }

    /// `(min, max)` over both the diagram and the baseline, for axis scaling
    pub fn value_range(&self) -> (f64, f64) {
        self.diagram
            .values
            .iter()
            .chain(self.baseline.values.iter())
            .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(*v), hi.max(*v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Beam;
    use crate::loads::{LoadSet, PointLoad};

    #[test]
    fn test_default_styles() {
        let styles = DiagramStyles::default();
        assert_eq!(styles.axial.title, "Normal force");
        assert_eq!(styles.moment.line_width, 3.0);
        assert_eq!(styles.for_field(Field::Shear).line_color, LineColor::Black);
        assert!(styles.baseline.title.is_empty());
    }

    #[test]
    fn test_line_color_serialization() {
        let json = serde_json::to_string(&LineColor::Orange).unwrap();
        assert_eq!(json, "\"orange\"");
        let color: LineColor = serde_json::from_str("\"gray\"").unwrap();
        assert_eq!(color, LineColor::Gray);
    }

    #[test]
    fn test_plot_value_range_includes_zero() {
        let loads = LoadSet::new().with_vertical_load(PointLoad::new(-8.0, 1.0));
        let ctx = Context::with_step(Beam::new(2.0), loads, 0.5).unwrap();
        let plot = DiagramPlot::new(&ctx, Field::Shear, &DiagramStyles::default());

        assert_eq!(plot.value_range(), (-8.0, 0.0));
        assert_eq!(plot.baseline.len(), 2);
        assert_eq!(plot.beam_length, 2.0);
    }
}
