mod axis_label_format;
mod engine;
mod engine_config;
mod engine_snapshot;
mod interaction_controller;
mod narration;
mod quiz;
#[cfg(feature = "cairo-backend")]
mod render_cairo_coordinator;
mod render_frame_builder;
mod render_style;

pub use axis_label_format::format_axis_value;
pub use engine::{FrameStatus, PlotEngine, ViewportChange};
pub use engine_config::PlotEngineConfig;
pub use engine_snapshot::{PLOT_SNAPSHOT_JSON_SCHEMA_V1, PlotSnapshot, PlotSnapshotJsonContractV1};
pub use narration::{
    FEEDBACK_FALLBACK_MESSAGE, NarrationStatus, explanation_script, feedback_prompt,
};
pub use quiz::{QUIZ_TOLERANCE, QuizChallenge, QuizState};
pub use render_frame_builder::{FrameInputs, build_render_frame};
pub use render_style::PlotTheme;
