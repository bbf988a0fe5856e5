use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::*;
use crate::types::Rgba;

/// Complete runtime configuration. Every field has a default, so a config
/// file only needs the values it overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub field: FieldConfig,
    pub glow: GlowConfig,
    pub typewriter: TypewriterConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub contact: ContactConfig,
}

impl FolioConfig {
    /// Parse a JSON document
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Invalid config: {e}"))
    }

    /// Read and parse a JSON config file
    pub fn load(path: &Path) -> Result<Self, String> {
        let text = fs::read_to_string(path).map_err(|e| format!("Failed to read config: {e}"))?;
        Self::from_json(&text)
    }
}

/// Particle field parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub particle_count: usize,
    /// Pairs closer than this are connected
    pub connection_distance: f32,
    /// Per-axis velocity bound
    pub max_speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub fill: Rgba,
    /// Connection colour; alpha is replaced per line by the distance falloff
    pub stroke: Rgba,
    pub stroke_width: f32,
    /// Fixed seed for reproducible layouts, `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            connection_distance: CONNECTION_DISTANCE,
            max_speed: MAX_SPEED,
            radius_min: RADIUS_MIN,
            radius_max: RADIUS_MAX,
            fill: Rgba::ACCENT.with_alpha(0.5),
            stroke: Rgba::ACCENT,
            stroke_width: STROKE_WIDTH,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    pub easing: f32,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            easing: GLOW_EASING,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub words: Vec<String>,
    pub type_delay_ms: u64,
    pub delete_delay_ms: u64,
    /// Pause once a word is fully typed
    pub hold_ms: u64,
    /// Pause after a word is fully erased
    pub next_word_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            words: [
                "Machine Learning",
                "Deep Learning",
                "Computer Vision",
                "Natural Language Processing",
                "Data Science",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            type_delay_ms: TYPE_DELAY_MS,
            delete_delay_ms: DELETE_DELAY_MS,
            hold_ms: WORD_HOLD_MS,
            next_word_ms: NEXT_WORD_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub scrolled_threshold: f32,
    pub section_offset: f32,
    pub anchor_offset: f32,
    pub back_to_top_threshold: f32,
    pub mobile_breakpoint: f32,
    pub resize_debounce_ms: u64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: NAV_SCROLLED_THRESHOLD,
            section_offset: SECTION_ACTIVATION_OFFSET,
            anchor_offset: ANCHOR_SCROLL_OFFSET,
            back_to_top_threshold: BACK_TO_TOP_THRESHOLD,
            mobile_breakpoint: MOBILE_BREAKPOINT,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f32,
    pub root_margin_bottom: f32,
    pub stagger_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin_bottom: REVEAL_ROOT_MARGIN_BOTTOM,
            stagger_ms: REVEAL_STAGGER_MS,
        }
    }
}

/// Email relay identifiers and form copy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub service_id: String,
    pub template_id: String,
    /// Recipient name passed to the template
    pub to_name: String,
    /// Shown when the relay gives no reason for a failure
    pub fallback_address: String,
    pub status_hide_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            service_id: "service_71jbyvm".into(),
            template_id: "template_s6s6yro".into(),
            to_name: "Thiyanesh".into(),
            fallback_address: "thiyanesh7777@gmail.com".into(),
            status_hide_ms: STATUS_HIDE_MS,
        }
    }
}
