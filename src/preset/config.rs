use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::assets::images::ImageSlots;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{ReelError, ReelResult};

/// The two named hero reel compositions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetKind {
    /// Screenshots over an expanding white panel.
    #[default]
    HeroReel,
    /// Same choreography with a static mock UI revealed inside the panel.
    HeroReelMockUi,
}

impl PresetKind {
    /// Every preset, in declaration order.
    pub const ALL: [Self; 2] = [Self::HeroReel, Self::HeroReelMockUi];

    /// Stable snake_case name used in job files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::HeroReel => "hero_reel",
            Self::HeroReelMockUi => "hero_reel_mock_ui",
        }
    }
}

impl fmt::Display for PresetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PresetKind {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s.trim())
            .ok_or_else(|| {
                ReelError::validation(format!(
                    "unknown preset '{s}' (expected hero_reel or hero_reel_mock_ui)"
                ))
            })
    }
}

/// Output video parameters a preset is evaluated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Output canvas.
    pub canvas: Canvas,
    /// Output frame rate.
    pub fps: Fps,
}

impl VideoConfig {
    /// Validated config.
    pub fn new(width: u32, height: u32, fps: Fps) -> ReelResult<Self> {
        let cfg = Self {
            canvas: Canvas::new(width, height)?,
            fps,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check canvas and fps, e.g. after deserializing.
    pub fn validate(&self) -> ReelResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;
        self.fps.validate()
    }
}

/// JSON job file: which preset to evaluate, at what size, with which images.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReelJob {
    /// Preset to evaluate.
    #[serde(default)]
    pub preset: PresetKind,
    /// Output canvas.
    pub canvas: Canvas,
    /// Output frame rate; 30 fps when omitted.
    #[serde(default)]
    pub fps: Fps,
    /// Up to three positional image handles; `null` leaves a slot empty.
    #[serde(default)]
    pub images: Vec<Option<String>>,
}

impl ReelJob {
    /// Parse a job from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let job: Self = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse job JSON: {e}")))?;
        job.validate()?;
        Ok(job)
    }

    /// Parse a job from a JSON file on disk and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open job JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate canvas, fps and image count.
    pub fn validate(&self) -> ReelResult<()> {
        self.video_config()?;
        self.image_slots()?;
        Ok(())
    }

    /// Validated video config.
    pub fn video_config(&self) -> ReelResult<VideoConfig> {
        VideoConfig::new(self.canvas.width, self.canvas.height, self.fps)
    }

    /// Images as positional slots.
    pub fn image_slots(&self) -> ReelResult<ImageSlots> {
        ImageSlots::from_list(self.images.iter().cloned())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preset/config.rs"]
mod tests;
