use tracing::trace;

use crate::core::{
    CanvasSize, Coefficients, DerivedStats, SamplerConfig, ScreenPoint, Viewport,
    ViewportTransform, WorldPoint, axis_ticks, is_origin_tick, nice_step, sample_curve,
};
use crate::error::PlotResult;
use crate::render::{
    AnnotationKind, CanvasLayerKind, CirclePrimitive, Color, LinePrimitive, PointAnnotation,
    PolylinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive, TextVAlign,
};

use super::PlotTheme;
use super::axis_label_format::format_axis_value;

/// Everything one frame depends on. The builder reads nothing else.
#[derive(Debug, Clone, Copy)]
pub struct FrameInputs<'a> {
    pub coefficients: Coefficients,
    pub stats: &'a DerivedStats,
    pub viewport: Viewport,
    pub canvas: CanvasSize,
    pub theme: &'a PlotTheme,
    pub sampler: SamplerConfig,
}

/// Materializes the draw commands for one frame.
///
/// Layer order is background, grid (when enabled), axes, ticks and labels,
/// curve, dashed symmetry axis, then annotated points.
pub fn build_render_frame(inputs: FrameInputs<'_>) -> PlotResult<RenderFrame> {
    let transform = inputs.viewport.transform(inputs.canvas)?;
    let x_step = nice_step(inputs.viewport.x_span())?;
    let y_step = nice_step(inputs.viewport.y_span())?;
    let x_ticks = axis_ticks(inputs.viewport.x_min(), inputs.viewport.x_max(), x_step);
    let y_ticks = axis_ticks(inputs.viewport.y_min(), inputs.viewport.y_max(), y_step);

    let mut frame = RenderFrame::new(inputs.canvas);
    push_background(&mut frame, inputs.theme);
    if inputs.viewport.grid_enabled() {
        push_grid(&mut frame, transform, inputs.theme, &x_ticks, &y_ticks);
    }
    let origin = transform.world_to_screen(WorldPoint::new(0.0, 0.0));
    push_axes(&mut frame, origin, inputs.theme);
    push_tick_labels(
        &mut frame,
        transform,
        origin,
        inputs.theme,
        (&x_ticks, x_step),
        (&y_ticks, y_step),
    );
    push_curve(&mut frame, &inputs)?;
    push_symmetry_axis(&mut frame, transform, inputs.theme, inputs.stats.axis_of_symmetry);
    push_annotations(&mut frame, transform, inputs.theme, inputs.stats);

    trace!(
        x_step,
        y_step,
        lines = frame.line_count(),
        texts = frame.text_count(),
        annotations = frame.annotations.len(),
        "built plot frame"
    );
    Ok(frame)
}

fn push_background(frame: &mut RenderFrame, theme: &PlotTheme) {
    let canvas = frame.canvas;
    frame.push_rect(
        CanvasLayerKind::Background,
        RectPrimitive::new(0.0, 0.0, canvas.width, canvas.height, theme.background_color),
    );
}

fn push_grid(
    frame: &mut RenderFrame,
    transform: ViewportTransform,
    theme: &PlotTheme,
    x_ticks: &[f64],
    y_ticks: &[f64],
) {
    let canvas = frame.canvas;
    for &x in x_ticks {
        let screen_x = transform.x_to_screen(x);
        frame.push_line(
            CanvasLayerKind::Grid,
            LinePrimitive::new(
                screen_x,
                0.0,
                screen_x,
                canvas.height,
                theme.grid_line_width,
                theme.grid_line_color,
            ),
        );
    }
    for &y in y_ticks {
        let screen_y = transform.y_to_screen(y);
        frame.push_line(
            CanvasLayerKind::Grid,
            LinePrimitive::new(
                0.0,
                screen_y,
                canvas.width,
                screen_y,
                theme.grid_line_width,
                theme.grid_line_color,
            ),
        );
    }
}

// The projected origin may sit far outside the canvas; the lines are still
// placed correctly because the transform is affine beyond [0, 1].
fn push_axes(frame: &mut RenderFrame, origin: ScreenPoint, theme: &PlotTheme) {
    let canvas = frame.canvas;
    frame.push_line(
        CanvasLayerKind::Axes,
        LinePrimitive::new(
            0.0,
            origin.y,
            canvas.width,
            origin.y,
            theme.axis_line_width,
            theme.axis_line_color,
        ),
    );
    frame.push_line(
        CanvasLayerKind::Axes,
        LinePrimitive::new(
            origin.x,
            0.0,
            origin.x,
            canvas.height,
            theme.axis_line_width,
            theme.axis_line_color,
        ),
    );
}

fn push_tick_labels(
    frame: &mut RenderFrame,
    transform: ViewportTransform,
    origin: ScreenPoint,
    theme: &PlotTheme,
    (x_ticks, x_step): (&[f64], f64),
    (y_ticks, y_step): (&[f64], f64),
) {
    for &x in x_ticks.iter().filter(|x| !is_origin_tick(**x, x_step)) {
        let screen_x = transform.x_to_screen(x);
        frame.push_line(
            CanvasLayerKind::AxisLabels,
            LinePrimitive::new(
                screen_x,
                origin.y,
                screen_x,
                origin.y + theme.tick_length_px,
                theme.tick_mark_width,
                theme.tick_mark_color,
            ),
        );
        frame.push_text(
            CanvasLayerKind::AxisLabels,
            TextPrimitive::new(
                format_axis_value(x),
                screen_x,
                origin.y + theme.x_label_offset_px,
                theme.axis_label_font_size_px,
                theme.axis_label_color,
                TextHAlign::Center,
                TextVAlign::Top,
            ),
        );
    }

    for &y in y_ticks.iter().filter(|y| !is_origin_tick(**y, y_step)) {
        let screen_y = transform.y_to_screen(y);
        frame.push_line(
            CanvasLayerKind::AxisLabels,
            LinePrimitive::new(
                origin.x,
                screen_y,
                origin.x - theme.tick_length_px,
                screen_y,
                theme.tick_mark_width,
                theme.tick_mark_color,
            ),
        );
        frame.push_text(
            CanvasLayerKind::AxisLabels,
            TextPrimitive::new(
                format_axis_value(y),
                origin.x - theme.y_label_offset_px,
                screen_y,
                theme.axis_label_font_size_px,
                theme.axis_label_color,
                TextHAlign::Right,
                TextVAlign::Middle,
            ),
        );
    }

    frame.push_text(
        CanvasLayerKind::AxisLabels,
        TextPrimitive::new(
            "0",
            origin.x - theme.origin_label_offset_px,
            origin.y + theme.origin_label_offset_px,
            theme.axis_label_font_size_px,
            theme.axis_label_color,
            TextHAlign::Right,
            TextVAlign::Top,
        ),
    );
}

fn push_curve(frame: &mut RenderFrame, inputs: &FrameInputs<'_>) -> PlotResult<()> {
    let segments = sample_curve(
        inputs.coefficients,
        inputs.viewport,
        inputs.canvas,
        inputs.sampler,
    )?;
    for points in segments {
        frame.push_polyline(
            CanvasLayerKind::Curve,
            PolylinePrimitive::new(points, inputs.theme.curve_width, inputs.theme.curve_color),
        );
    }
    Ok(())
}

fn push_symmetry_axis(
    frame: &mut RenderFrame,
    transform: ViewportTransform,
    theme: &PlotTheme,
    axis_of_symmetry: f64,
) {
    let screen_x = transform.x_to_screen(axis_of_symmetry);
    if !screen_x.is_finite() {
        trace!(axis_of_symmetry, "skipping unprojectable symmetry axis");
        return;
    }
    frame.push_line(
        CanvasLayerKind::SymmetryAxis,
        LinePrimitive::new(
            screen_x,
            0.0,
            screen_x,
            frame.canvas.height,
            theme.symmetry_axis_width,
            theme.symmetry_axis_color,
        )
        .with_stroke_style(theme.symmetry_axis_stroke()),
    );
}

fn push_annotations(
    frame: &mut RenderFrame,
    transform: ViewportTransform,
    theme: &PlotTheme,
    stats: &DerivedStats,
) {
    let mut push_point = |kind: AnnotationKind, world: WorldPoint, color: Color, radius: f64| {
        let screen = transform.world_to_screen(world);
        if !screen.x.is_finite() || !screen.y.is_finite() {
            trace!(?kind, x = world.x, y = world.y, "skipping unprojectable annotation");
            return;
        }
        frame.push_annotation(
            PointAnnotation {
                kind,
                world,
                screen,
            },
            CirclePrimitive::new(screen.x, screen.y, radius, color)
                .with_outline(theme.point_outline_color, theme.point_outline_width),
        );
    };

    push_point(
        AnnotationKind::Vertex,
        WorldPoint::new(stats.vertex.h, stats.vertex.k),
        theme.vertex_color,
        theme.vertex_radius,
    );
    push_point(
        AnnotationKind::YIntercept,
        WorldPoint::new(0.0, stats.y_intercept),
        theme.y_intercept_color,
        theme.y_intercept_radius,
    );
    for &root in stats.roots.iter().flatten() {
        push_point(
            AnnotationKind::Root,
            WorldPoint::new(root, 0.0),
            theme.root_color,
            theme.root_radius,
        );
    }
}
