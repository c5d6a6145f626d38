//! Configuration for a graphwalk session.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use graphwalk_core::Algorithm;

use crate::error::{Error, Result};

/// Session configuration.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Minimum delay between automatic steps.
    #[serde(with = "duration_ms", default = "default_step_delay")]
    pub step_delay: Duration,

    /// Lower bound for `step_delay`.
    #[serde(with = "duration_ms", default = "default_min_step_delay")]
    pub min_step_delay: Duration,

    /// Upper bound for `step_delay`.
    #[serde(with = "duration_ms", default = "default_max_step_delay")]
    pub max_step_delay: Duration,

    /// Pick radius around a node centre, in world units.
    #[serde(default = "default_node_pick_tolerance")]
    pub node_pick_tolerance: f64,

    /// Pick distance from an edge segment, in world units.
    #[serde(default = "default_edge_pick_tolerance")]
    pub edge_pick_tolerance: f64,

    /// Algorithm selected when a session starts.
    #[serde(default)]
    pub algorithm: Algorithm,

    #[serde(default)]
    pub sample: SampleConfig,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            step_delay: default_step_delay(),
            min_step_delay: default_min_step_delay(),
            max_step_delay: default_max_step_delay(),
            node_pick_tolerance: default_node_pick_tolerance(),
            edge_pick_tolerance: default_edge_pick_tolerance(),
            algorithm: Algorithm::default(),
            sample: SampleConfig::default(),
        }
    }
}

impl WalkConfig {
    /// Set the step delay.
    #[must_use]
    pub const fn step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Set the starting algorithm.
    #[must_use]
    pub const fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Clamp `delay` into the configured bounds.
    #[must_use]
    pub fn clamp_delay(&self, delay: Duration) -> Duration {
        delay.clamp(
            self.min_step_delay,
            self.max_step_delay.max(self.min_step_delay),
        )
    }

    /// Apply overrides from environment variables.
    ///
    /// Recognises `GRAPHWALK_STEP_DELAY_MS`, `GRAPHWALK_ALGORITHM` and
    /// `GRAPHWALK_SAMPLE_SEED`. Unparseable values are logged and ignored.
    #[must_use]
    pub fn with_env(mut self) -> Self {
        if let Ok(raw) = std::env::var("GRAPHWALK_STEP_DELAY_MS") {
            match raw.parse::<u64>() {
                Ok(ms) => self.step_delay = Duration::from_millis(ms),
                Err(e) => warn!(value = %raw, "ignoring GRAPHWALK_STEP_DELAY_MS: {e}"),
            }
        }

        if let Ok(raw) = std::env::var("GRAPHWALK_ALGORITHM") {
            match raw.parse() {
                Ok(algorithm) => self.algorithm = algorithm,
                Err(e) => warn!("ignoring GRAPHWALK_ALGORITHM: {e}"),
            }
        }

        if let Ok(raw) = std::env::var("GRAPHWALK_SAMPLE_SEED") {
            match raw.parse::<u64>() {
                Ok(seed) => self.sample.seed = Some(seed),
                Err(e) => warn!(value = %raw, "ignoring GRAPHWALK_SAMPLE_SEED: {e}"),
            }
        }

        self
    }

    /// Load configuration from the environment on top of the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Load configuration from a file.
    ///
    /// `.json` files are parsed as JSON, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let parse_failed = |reason: String| Error::ConfigParseFailed {
            path: path.to_path_buf(),
            reason,
        };

        if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content).map_err(|e| parse_failed(e.to_string()))
        } else {
            toml::from_str(&content).map_err(|e| parse_failed(e.to_string()))
        }
    }
}

/// Parameters for generated sample graphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleConfig {
    #[serde(default = "default_sample_nodes")]
    pub nodes: usize,

    /// Largest graph that may be sampled or built from an edge list.
    #[serde(default = "default_max_nodes")]
    pub max_nodes: usize,

    /// Probability that any given pair of nodes is connected.
    #[serde(default = "default_sample_density")]
    pub density: f64,

    /// Fixed seed for reproducible samples.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default = "default_canvas_width")]
    pub width: f64,

    #[serde(default = "default_canvas_height")]
    pub height: f64,

    /// Margin kept free along every canvas edge.
    #[serde(default = "default_canvas_padding")]
    pub padding: f64,
}

impl SampleConfig {
    /// Reject a node count above `max_nodes`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyNodes`] when `requested` exceeds the limit.
    pub fn check_node_count(&self, requested: u64) -> Result<()> {
        let limit = u64::try_from(self.max_nodes).unwrap_or(u64::MAX);
        if requested > limit {
            return Err(Error::TooManyNodes {
                requested,
                limit: self.max_nodes,
            });
        }
        Ok(())
    }

    /// Width and height of the canvas inside the padding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSample`] unless both spans are finite and
    /// positive.
    pub fn padded_span(&self) -> Result<(f64, f64)> {
        let span_x = 2.0f64.mul_add(-self.padding, self.width);
        let span_y = 2.0f64.mul_add(-self.padding, self.height);
        let usable = |span: f64| span.is_finite() && span > 0.0;
        if usable(span_x) && usable(span_y) {
            Ok((span_x, span_y))
        } else {
            Err(Error::invalid_sample(format!(
                "canvas {}x{} with padding {} leaves no finite room",
                self.width, self.height, self.padding
            )))
        }
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            nodes: default_sample_nodes(),
            max_nodes: default_max_nodes(),
            density: default_sample_density(),
            seed: None,
            width: default_canvas_width(),
            height: default_canvas_height(),
            padding: default_canvas_padding(),
        }
    }
}

const fn default_step_delay() -> Duration {
    Duration::from_millis(600)
}

const fn default_min_step_delay() -> Duration {
    Duration::from_millis(50)
}

const fn default_max_step_delay() -> Duration {
    Duration::from_millis(2000)
}

const fn default_node_pick_tolerance() -> f64 {
    20.0
}

const fn default_edge_pick_tolerance() -> f64 {
    6.0
}

const fn default_sample_nodes() -> usize {
    8
}

const fn default_max_nodes() -> usize {
    500
}

const fn default_sample_density() -> f64 {
    0.3
}

const fn default_canvas_width() -> f64 {
    960.0
}

const fn default_canvas_height() -> f64 {
    640.0
}

const fn default_canvas_padding() -> f64 {
    60.0
}

/// Serialization helper for Duration as milliseconds.
mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ms = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(ms))
    }
}
