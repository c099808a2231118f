//! Tunable constants for every behavior.
//!
//! Defaults reproduce the stock page; a YAML document can override any subset:
//!
//! ```yaml
//! nav:
//!   threshold_px: 120
//! dots:
//!   density_divisor: 24000
//! ```

use serde::Deserialize;
use crate::error::EffectsError;

/// Closed numeric range used for randomized particle attributes
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selectors: Vec<String>,
    /// Visible fraction required before an element is revealed
    pub threshold: f64,
    /// Seconds of transition delay per preceding sibling
    pub stagger_step_s: f64,
    pub hidden_class: String,
    pub revealed_class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: [
                "section",
                ".stat-item",
                ".course-card",
                ".service-card",
                ".team-card",
                ".feature-item",
                ".process-step",
                ".info-card",
                ".partner-chip",
                ".homeschool-banner",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            threshold: 0.12,
            stagger_step_s: 0.07,
            hidden_class: "reveal".to_string(),
            revealed_class: "revealed".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    pub selectors: Vec<String>,
    pub perspective_px: f64,
    /// Rotation reached when the pointer sits on a card corner
    pub max_rotation_deg: f64,
    pub lift_px: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            selectors: [".course-card", ".service-card", ".team-card", ".info-card"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            perspective_px: 600.0,
            max_rotation_deg: 6.0,
            lift_px: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub selector: String,
    pub threshold: f64,
    pub pad_width: usize,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            selector: ".stat-num".to_string(),
            threshold: 0.5,
            pad_width: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub selector: String,
    pub scrolled_class: String,
    pub threshold_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            selector: "nav".to_string(),
            scrolled_class: "nav-scrolled".to_string(),
            threshold_px: 80.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    pub region_selector: String,
    pub layer_class: String,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            region_selector: ".hero".to_string(),
            layer_class: "hero-glow".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub selector: String,
    pub interval_ms: u32,
    /// Lets the headline's entrance animation finish first
    pub start_delay_ms: u32,
    pub cursor_removal_delay_ms: u32,
    pub cursor_style: String,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            selector: ".hero h1 em".to_string(),
            interval_ms: 45,
            start_delay_ms: 700,
            cursor_removal_delay_ms: 600,
            cursor_style: "2px solid var(--accent)".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DotsConfig {
    pub section_id: String,
    pub canvas_class: String,
    /// Square pixels of canvas per dot
    pub density_divisor: f64,
    pub radius: Span,
    pub velocity: Span,
    pub opacity: Span,
    pub color: [u8; 3],
}

impl Default for DotsConfig {
    fn default() -> Self {
        Self {
            section_id: "why".to_string(),
            canvas_class: "dot-canvas".to_string(),
            density_divisor: 18000.0,
            radius: Span::new(1.0, 3.0),
            velocity: Span::new(-0.15, 0.15),
            opacity: Span::new(0.04, 0.22),
            color: [26, 107, 255],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    pub bar_class: String,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            bar_class: "scroll-progress".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub nav_selector: String,
    pub links_selector: String,
    pub burger_class: String,
    pub open_class: String,
    pub active_class: String,
    pub aria_label: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            nav_selector: "nav".to_string(),
            links_selector: ".nav-links".to_string(),
            burger_class: "nav-burger".to_string(),
            open_class: "nav-open".to_string(),
            active_class: "burger-active".to_string(),
            aria_label: "Toggle menu".to_string(),
        }
    }
}

/// Complete configuration for all nine behaviors
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub reveal: RevealConfig,
    pub tilt: TiltConfig,
    pub counter: CounterConfig,
    pub nav: NavConfig,
    pub glow: GlowConfig,
    pub typing: TypingConfig,
    pub dots: DotsConfig,
    pub progress: ProgressConfig,
    pub menu: MenuConfig,
}

impl EffectsConfig {
    /// Parse from YAML, filling omitted keys with defaults, then validate
    pub fn from_yaml(yaml: &str) -> Result<Self, EffectsError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: EffectsConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EffectsError> {
        check_fraction("reveal.threshold", self.reveal.threshold)?;
        check_fraction("counter.threshold", self.counter.threshold)?;
        check_non_negative("reveal.stagger_step_s", self.reveal.stagger_step_s)?;
        check_non_negative("nav.threshold_px", self.nav.threshold_px)?;
        check_non_negative("tilt.max_rotation_deg", self.tilt.max_rotation_deg)?;
        check_non_negative("tilt.lift_px", self.tilt.lift_px)?;

        if self.counter.pad_width == 0 {
            return Err(invalid("counter.pad_width", "must be at least 1"));
        }
        if self.typing.interval_ms == 0 {
            return Err(invalid("typing.interval_ms", "must be positive"));
        }
        if !(self.dots.density_divisor > 0.0) {
            return Err(invalid("dots.density_divisor", "must be positive"));
        }

        check_span("dots.radius", self.dots.radius)?;
        check_span("dots.velocity", self.dots.velocity)?;
        check_span("dots.opacity", self.dots.opacity)?;
        if self.dots.radius.min < 0.0 {
            return Err(invalid("dots.radius", "must not be negative"));
        }
        if self.dots.opacity.min < 0.0 || self.dots.opacity.max > 1.0 {
            return Err(invalid("dots.opacity", "must lie within [0, 1]"));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> EffectsError {
    EffectsError::InvalidConfig {
        field,
        reason: reason.to_string(),
    }
}

fn check_fraction(field: &'static str, value: f64) -> Result<(), EffectsError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, "must lie within [0, 1]"))
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), EffectsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be a finite, non-negative number"))
    }
}

fn check_span(field: &'static str, span: Span) -> Result<(), EffectsError> {
    if span.min.is_finite() && span.max.is_finite() && span.min <= span.max {
        Ok(())
    } else {
        Err(invalid(field, "min must not exceed max"))
    }
}
