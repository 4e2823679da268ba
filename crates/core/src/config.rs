//! Configuration for the virtual memory simulator.
//!
//! This module defines the parameters of a single simulation run. It provides:
//! 1. **Defaults:** Baseline page geometry and policy.
//! 2. **Structures:** The run configuration (frame count, policy, offset width, trace path).
//! 3. **Enums:** The page replacement policy selection.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built directly by the CLI.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::{SimError, SimResult};

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants::DEFAULT_OFFSET_BITS;

    /// Offset width used when none is configured (4 KiB pages).
    pub const OFFSET_BITS: u32 = DEFAULT_OFFSET_BITS;

    /// Frame count used when none is configured.
    pub const FRAMES: usize = 8;
}

/// Page replacement policy.
///
/// Selects the algorithm used to pick a victim frame when a page fault occurs and every
/// frame is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum EvictionPolicy {
    /// Belady's optimal policy.
    ///
    /// Evicts the page used furthest in the future (or never again). Requires a full
    /// upfront pass over the trace.
    Opt,
    /// Least Recently Used policy.
    ///
    /// Evicts the page whose last access is oldest.
    #[default]
    Lru,
    /// Second chance (clock) policy.
    ///
    /// Round-robin over the frames, skipping once any frame touched since its last scan.
    Second,
}

impl EvictionPolicy {
    /// All supported policies, in report order.
    pub const ALL: [Self; 3] = [Self::Opt, Self::Lru, Self::Second];

    /// Returns the lowercase policy name accepted on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Opt => "opt",
            Self::Lru => "lru",
            Self::Second => "second",
        }
    }

    /// Returns `true` if the policy needs the future-access index built before replay.
    pub const fn requires_future_index(self) -> bool {
        matches!(self, Self::Opt)
    }
}

impl FromStr for EvictionPolicy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "opt" => Ok(Self::Opt),
            "lru" => Ok(Self::Lru),
            "second" | "second_chance" | "clock" => Ok(Self::Second),
            _ => Err(SimError::InvalidPolicy(s.to_string())),
        }
    }
}

impl TryFrom<String> for EvictionPolicy {
    type Error = SimError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters of a single simulation run.
///
/// # Examples
///
/// ```
/// use vmsim_core::config::{Config, EvictionPolicy};
///
/// let json = r#"{ "frames": 16, "policy": "second", "trace_file": "gcc.trace" }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.frames, 16);
/// assert_eq!(config.policy, EvictionPolicy::Second);
/// assert_eq!(config.offset_bits, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawConfig")]
pub struct Config {
    /// Number of physical frames. Fixed for the run.
    pub frames: usize,

    /// Replacement policy.
    pub policy: EvictionPolicy,

    /// Page size exponent: addresses are shifted right by this many bits.
    pub offset_bits: u32,

    /// Path to the trace file, if the run loads its own trace.
    pub trace_file: Option<PathBuf>,
}

/// On-disk form of [`Config`]. The policy stays a plain name until [`EvictionPolicy::from_str`]
/// resolves it, so an unknown name surfaces as [`SimError::InvalidPolicy`].
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default = "Config::default_frames")]
    frames: usize,
    #[serde(default)]
    policy: Option<String>,
    #[serde(default = "Config::default_offset_bits")]
    offset_bits: u32,
    #[serde(default)]
    trace_file: Option<PathBuf>,
}

impl TryFrom<RawConfig> for Config {
    type Error = SimError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let policy = raw
            .policy
            .as_deref()
            .map(str::parse::<EvictionPolicy>)
            .transpose()?
            .unwrap_or_default();
        Ok(Self {
            frames: raw.frames,
            policy,
            offset_bits: raw.offset_bits,
            trace_file: raw.trace_file,
        })
    }
}

impl Config {
    /// Creates a configuration with the default offset width and no trace path.
    pub const fn new(frames: usize, policy: EvictionPolicy) -> Self {
        Self {
            frames,
            policy,
            offset_bits: defaults::OFFSET_BITS,
            trace_file: None,
        }
    }

    /// Returns the default frame count.
    const fn default_frames() -> usize {
        defaults::FRAMES
    }

    /// Returns the default offset width.
    const fn default_offset_bits() -> u32 {
        defaults::OFFSET_BITS
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Json`] for malformed JSON, [`SimError::InvalidPolicy`] for an
    /// unknown policy name, and [`SimError::InvalidConfig`] for out-of-range values.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let raw: RawConfig = serde_json::from_str(json)?;
        let config = Self::try_from(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read, otherwise as [`Config::from_json`].
    pub fn from_json_file(path: &Path) -> SimResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Checks that the frame count is positive and the offset width fits a 64-bit address.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] describing the first invalid field.
    pub fn validate(&self) -> SimResult<()> {
        validate_geometry(self.frames, self.offset_bits)
    }

    /// Page size in bytes implied by the offset width, or `None` if the width does not fit a
    /// 64-bit address.
    pub const fn page_size(&self) -> Option<u64> {
        1_u64.checked_shl(self.offset_bits)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(defaults::FRAMES, EvictionPolicy::default())
    }
}

/// Checks a frame count and offset width.
///
/// # Errors
///
/// Returns [`SimError::InvalidConfig`] for a zero frame count or an offset width of 64 or more.
pub(crate) fn validate_geometry(frames: usize, offset_bits: u32) -> SimResult<()> {
    if frames == 0 {
        return Err(SimError::InvalidConfig(
            "frame count must be a positive integer".to_string(),
        ));
    }
    if offset_bits >= crate::common::MAX_OFFSET_BITS {
        return Err(SimError::InvalidConfig(format!(
            "offset width {offset_bits} must be below {}",
            crate::common::MAX_OFFSET_BITS
        )));
    }
    Ok(())
}
