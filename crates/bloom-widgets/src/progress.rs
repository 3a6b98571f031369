//! Progress indicator state.
//!
//! Resolves the numbers a renderer needs: metrics for the chosen size, bar
//! colour for the status, the info label and the circle's dash geometry.

use std::f64::consts::PI;
use std::fmt;

use bloom_core::{ProgressConfig, SizeMetrics};
use serde::{Deserialize, Serialize};

const EXCEPTION_COLOR: &str = "#ff4d4f";
const SUCCESS_COLOR: &str = "#52c41a";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressKind {
    #[default]
    Line,
    Circle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressSize {
    #[default]
    Default,
    Small,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStatus {
    #[default]
    Normal,
    Exception,
    Active,
    Success,
}

/// Dash geometry of a circular progress stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleGeometry {
    pub radius: f64,
    pub perimeter: f64,
    /// Length of the drawn part of the stroke.
    pub dash: f64,
}

type InfoFormat = Box<dyn Fn(f64, Option<f64>) -> String>;

/// A progress bar or circle.
pub struct ProgressState {
    kind: ProgressKind,
    size: ProgressSize,
    status: ProgressStatus,
    percent: f64,
    success_percent: Option<f64>,
    show_info: bool,
    stroke_color: String,
    metrics: SizeMetrics,
    format: Option<InfoFormat>,
}

impl ProgressState {
    /// Create a line progress using configured defaults.
    ///
    /// Percent is clamped to `0..=100`.
    pub fn new(percent: f64, config: &ProgressConfig) -> Self {
        Self {
            kind: ProgressKind::Line,
            size: ProgressSize::Default,
            status: ProgressStatus::Normal,
            percent: clamp_percent(percent),
            success_percent: None,
            show_info: true,
            stroke_color: config.stroke_color.clone(),
            metrics: config.default_size,
            format: None,
        }
    }

    pub fn with_kind(mut self, kind: ProgressKind) -> Self {
        self.kind = kind;
        self
    }

    /// Switch size. Replaces all metrics with that size's defaults.
    pub fn with_size(mut self, size: ProgressSize, config: &ProgressConfig) -> Self {
        self.size = size;
        self.metrics = match size {
            ProgressSize::Default => config.default_size,
            ProgressSize::Small => config.small_size,
        };
        self
    }

    pub fn with_status(mut self, status: ProgressStatus) -> Self {
        self.status = status;
        self
    }

    /// Overlay a success segment.
    pub fn with_success_percent(mut self, percent: f64) -> Self {
        self.success_percent = Some(clamp_percent(percent));
        self
    }

    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = color.into();
        self
    }

    pub fn with_stroke_width(mut self, width: u32) -> Self {
        self.metrics.stroke_width = width;
        self
    }

    pub fn with_line_length(mut self, length: u32) -> Self {
        self.metrics.line_length = length;
        self
    }

    pub fn with_border_radius(mut self, radius: u32) -> Self {
        self.metrics.border_radius = radius;
        self
    }

    pub fn hide_info(mut self) -> Self {
        self.show_info = false;
        self
    }

    /// Replace the info label. Receives the percent and success percent.
    pub fn with_format(mut self, format: impl Fn(f64, Option<f64>) -> String + 'static) -> Self {
        self.format = Some(Box::new(format));
        self
    }

    pub fn kind(&self) -> ProgressKind {
        self.kind
    }

    pub fn size(&self) -> ProgressSize {
        self.size
    }

    pub fn status(&self) -> ProgressStatus {
        self.status
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn metrics(&self) -> SizeMetrics {
        self.metrics
    }

    /// Success segment percent, if it should be drawn.
    pub fn success_percent(&self) -> Option<f64> {
        self.success_percent.filter(|p| *p > 0.0)
    }

    /// Bar colour. Exception and success statuses override the configured one.
    pub fn stroke_color(&self) -> &str {
        match self.status {
            ProgressStatus::Exception => EXCEPTION_COLOR,
            ProgressStatus::Success => SUCCESS_COLOR,
            ProgressStatus::Normal | ProgressStatus::Active => &self.stroke_color,
        }
    }

    /// Label next to the bar, or `None` when info is hidden.
    pub fn info_text(&self) -> Option<String> {
        if !self.show_info {
            return None;
        }
        if let Some(format) = &self.format {
            return Some(format(self.percent, self.success_percent));
        }
        Some(match self.status {
            ProgressStatus::Exception => "✕".to_string(),
            ProgressStatus::Success => "✓".to_string(),
            ProgressStatus::Normal | ProgressStatus::Active => format!("{}%", self.percent),
        })
    }

    /// Stroke geometry when drawn as a circle.
    pub fn circle_geometry(&self) -> CircleGeometry {
        let radius =
            f64::from(self.metrics.line_length) / 2.0 - f64::from(self.metrics.stroke_width);
        let perimeter = 2.0 * PI * radius;
        CircleGeometry {
            radius,
            perimeter,
            dash: perimeter * self.percent / 100.0,
        }
    }
}

impl fmt::Debug for ProgressState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressState")
            .field("kind", &self.kind)
            .field("size", &self.size)
            .field("status", &self.status)
            .field("percent", &self.percent)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProgressConfig {
        ProgressConfig::default()
    }

    #[test]
    fn test_defaults() {
        let progress = ProgressState::new(30.0, &config());
        assert_eq!(progress.kind(), ProgressKind::Line);
        assert_eq!(progress.size(), ProgressSize::Default);
        assert_eq!(progress.metrics().line_length, 200);
        assert_eq!(progress.stroke_color(), "#1890ff");
        assert_eq!(progress.info_text().as_deref(), Some("30%"));
    }

    #[test]
    fn test_small_size_with_override() {
        let progress = ProgressState::new(10.0, &config())
            .with_size(ProgressSize::Small, &config())
            .with_stroke_width(4);
        let metrics = progress.metrics();
        assert_eq!(metrics.stroke_width, 4);
        assert_eq!(metrics.line_length, 150);
        assert_eq!(metrics.border_radius, 10);
    }

    #[test]
    fn test_status_colors_and_text() {
        let failed = ProgressState::new(50.0, &config()).with_status(ProgressStatus::Exception);
        assert_eq!(failed.stroke_color(), "#ff4d4f");
        assert_eq!(failed.info_text().as_deref(), Some("✕"));

        let done = ProgressState::new(100.0, &config()).with_status(ProgressStatus::Success);
        assert_eq!(done.stroke_color(), "#52c41a");
        assert_eq!(done.info_text().as_deref(), Some("✓"));

        let active = ProgressState::new(40.0, &config())
            .with_status(ProgressStatus::Active)
            .with_stroke_color("#000000");
        assert_eq!(active.stroke_color(), "#000000");
    }

    #[test]
    fn test_custom_format() {
        let progress =
            ProgressState::new(50.0, &config()).with_format(|percent, _| format!("{} Days", percent));
        assert_eq!(progress.info_text().as_deref(), Some("50 Days"));
    }

    #[test]
    fn test_hidden_info() {
        let progress = ProgressState::new(50.0, &config()).hide_info();
        assert_eq!(progress.info_text(), None);
    }

    #[test]
    fn test_percent_is_clamped() {
        assert_eq!(ProgressState::new(140.0, &config()).percent(), 100.0);
        assert_eq!(ProgressState::new(-5.0, &config()).percent(), 0.0);
        assert_eq!(ProgressState::new(f64::NAN, &config()).percent(), 0.0);
    }

    #[test]
    fn test_success_segment() {
        let progress = ProgressState::new(80.0, &config()).with_success_percent(30.0);
        assert_eq!(progress.success_percent(), Some(30.0));

        let zero = ProgressState::new(80.0, &config()).with_success_percent(0.0);
        assert_eq!(zero.success_percent(), None);
    }

    #[test]
    fn test_circle_geometry() {
        let progress = ProgressState::new(75.0, &config()).with_kind(ProgressKind::Circle);
        let geometry = progress.circle_geometry();
        assert_eq!(geometry.radius, 90.0);
        assert!((geometry.perimeter - 180.0 * PI).abs() < 1e-9);
        assert!((geometry.dash - geometry.perimeter * 0.75).abs() < 1e-9);
    }
}
