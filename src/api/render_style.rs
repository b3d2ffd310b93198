use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::render::{Color, LineStrokeStyle};

/// Palette and geometry for one plot look.
///
/// Every visual constant the frame builder uses lives here so alternate
/// looks are a value, not a second renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotTheme {
    pub background_color: Color,

    pub grid_line_color: Color,
    pub grid_line_width: f64,

    pub axis_line_color: Color,
    pub axis_line_width: f64,

    pub tick_mark_color: Color,
    pub tick_mark_width: f64,
    pub tick_length_px: f64,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    /// Distance from the x-axis line to the top of x labels.
    pub x_label_offset_px: f64,
    /// Distance from the y-axis line to the right edge of y labels.
    pub y_label_offset_px: f64,
    /// Offset of the shared origin label down and left of the origin.
    pub origin_label_offset_px: f64,

    pub curve_color: Color,
    pub curve_width: f64,

    pub symmetry_axis_color: Color,
    pub symmetry_axis_width: f64,
    pub symmetry_axis_dash_px: f64,
    pub symmetry_axis_gap_px: f64,

    pub vertex_color: Color,
    pub vertex_radius: f64,
    pub y_intercept_color: Color,
    pub y_intercept_radius: f64,
    pub root_color: Color,
    pub root_radius: f64,
    pub point_outline_color: Color,
    pub point_outline_width: f64,
}

impl Default for PlotTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl PlotTheme {
    /// Slate background with cyan curve.
    #[must_use]
    pub fn dark() -> Self {
        let background = Color::from_hex(0x1f2937);
        let axis = Color::from_hex(0x9ca3af);
        Self {
            background_color: background,
            grid_line_color: Color::rgba(1.0, 1.0, 1.0, 0.08),
            grid_line_width: 1.0,
            axis_line_color: axis,
            axis_line_width: 1.5,
            tick_mark_color: axis,
            tick_mark_width: 1.5,
            tick_length_px: 5.0,
            axis_label_color: Color::from_hex(0xd1d5db),
            axis_label_font_size_px: 11.0,
            x_label_offset_px: 8.0,
            y_label_offset_px: 8.0,
            origin_label_offset_px: 6.0,
            curve_color: Color::from_hex(0x38bdf8),
            curve_width: 3.0,
            symmetry_axis_color: Color::rgba(1.0, 1.0, 1.0, 0.3),
            symmetry_axis_width: 1.0,
            symmetry_axis_dash_px: 5.0,
            symmetry_axis_gap_px: 5.0,
            vertex_color: Color::from_hex(0xfacc15),
            vertex_radius: 6.0,
            y_intercept_color: Color::from_hex(0xa78bfa),
            y_intercept_radius: 4.0,
            root_color: Color::from_hex(0x4ade80),
            root_radius: 5.0,
            point_outline_color: background,
            point_outline_width: 1.0,
        }
    }

    /// White background variant with darker strokes.
    #[must_use]
    pub fn light() -> Self {
        let background = Color::rgb(1.0, 1.0, 1.0);
        let axis = Color::from_hex(0x4b5563);
        Self {
            background_color: background,
            grid_line_color: Color::rgba(0.0, 0.0, 0.0, 0.08),
            axis_line_color: axis,
            tick_mark_color: axis,
            axis_label_color: Color::from_hex(0x374151),
            curve_color: Color::from_hex(0x0284c7),
            symmetry_axis_color: Color::rgba(0.0, 0.0, 0.0, 0.3),
            vertex_color: Color::from_hex(0xca8a04),
            y_intercept_color: Color::from_hex(0x7c3aed),
            root_color: Color::from_hex(0x16a34a),
            point_outline_color: background,
            ..Self::dark()
        }
    }

    #[must_use]
    pub fn symmetry_axis_stroke(self) -> LineStrokeStyle {
        LineStrokeStyle::Dashed {
            dash_px: self.symmetry_axis_dash_px,
            gap_px: self.symmetry_axis_gap_px,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        for color in [
            self.background_color,
            self.grid_line_color,
            self.axis_line_color,
            self.tick_mark_color,
            self.axis_label_color,
            self.curve_color,
            self.symmetry_axis_color,
            self.vertex_color,
            self.y_intercept_color,
            self.root_color,
            self.point_outline_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("grid_line_width", self.grid_line_width),
            ("axis_line_width", self.axis_line_width),
            ("tick_mark_width", self.tick_mark_width),
            ("tick_length_px", self.tick_length_px),
            ("axis_label_font_size_px", self.axis_label_font_size_px),
            ("curve_width", self.curve_width),
            ("symmetry_axis_width", self.symmetry_axis_width),
            ("vertex_radius", self.vertex_radius),
            ("y_intercept_radius", self.y_intercept_radius),
            ("root_radius", self.root_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "theme `{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("x_label_offset_px", self.x_label_offset_px),
            ("y_label_offset_px", self.y_label_offset_px),
            ("origin_label_offset_px", self.origin_label_offset_px),
            ("point_outline_width", self.point_outline_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "theme `{name}` must be finite and >= 0"
                )));
            }
        }

        self.symmetry_axis_stroke().validate()
    }
}
