use crate::slider::geometry::Padding;
use derive_more::{Display, From, Into};
use directories::ProjectDirs;
use palette::Srgba;
use palette::rgb::channels::Argb;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString, FromRepr};
use thiserror::Error;

pub const DEFAULT_START_ANGLE: f64 = 90.0;
pub const DEFAULT_END_ANGLE: f64 = 60.0;
pub const DEFAULT_THUMB_SIZE: f64 = 50.0;
pub const DEFAULT_BORDER_THICKNESS: f64 = 20.0;
pub const DEFAULT_ARC_DASH_SIZE: f64 = 60.0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid line cap id: {0}")]
    InvalidLineCap(i64),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Failed to load thumb image: {0}")]
    Image(#[from] glib::Error),
}

/// Packed ARGB color. Zero doubles as "unset" for the arc color.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    From,
    Into,
    SerializeDisplay,
    DeserializeFromStr,
)]
#[display("#{_0:08X}")]
pub struct Color(u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const GRAY: Color = Color(0xFF88_8888);
    pub const RED: Color = Color(0xFFFF_0000);

    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    pub fn argb(&self) -> u32 {
        self.0
    }

    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }

    pub fn to_srgba(self) -> Srgba<f64> {
        let packed: Srgba<u8> = Srgba::from_u32::<Argb>(self.0);
        packed.into_format()
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    /// Accepts `#RRGGBB` (opaque), `#AARRGGBB` or a plain decimal ARGB value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ConfigError::InvalidColor(s.to_string());

        match trimmed.strip_prefix('#') {
            Some(hex) if hex.len() == 6 => u32::from_str_radix(hex, 16)
                .map(|rgb| Color(0xFF00_0000 | rgb))
                .map_err(|_| invalid()),
            Some(hex) if hex.len() == 8 => u32::from_str_radix(hex, 16)
                .map(Color)
                .map_err(|_| invalid()),
            Some(_) => Err(invalid()),
            None => trimmed
                .parse::<i64>()
                .ok()
                .and_then(|v| u32::try_from(v).ok())
                .map(Color)
                .ok_or_else(invalid),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    FromRepr,
    StrumDisplay,
)]
#[repr(u8)]
#[strum(ascii_case_insensitive)]
pub enum LineCap {
    #[default]
    #[strum(to_string = "butt", serialize = "0")]
    Butt = 0,
    #[strum(to_string = "round", serialize = "1")]
    Round = 1,
    #[strum(to_string = "square", serialize = "2")]
    Square = 2,
}

impl LineCap {
    /// Unknown ids are a configuration bug and are rejected outright.
    pub fn from_id(id: i64) -> Result<Self, ConfigError> {
        u8::try_from(id)
            .ok()
            .and_then(Self::from_repr)
            .ok_or(ConfigError::InvalidLineCap(id))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SliderConfig {
    /// Drawing degrees, clockwise from 3 o'clock.
    pub start_angle: f64,
    pub end_angle: f64,
    pub thumb_size: f64,
    pub start_thumb_size: Option<f64>,
    pub end_thumb_size: Option<f64>,
    pub start_thumb_color: Color,
    pub end_thumb_color: Color,
    pub border_thickness: f64,
    /// Stroke width of the selection arc.
    pub arc_dash_size: f64,
    pub arc_color: Color,
    pub border_color: Color,
    pub start_thumb_image: Option<PathBuf>,
    pub end_thumb_image: Option<PathBuf>,
    pub line_cap: LineCap,
    pub padding: Padding,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            start_angle: DEFAULT_START_ANGLE,
            end_angle: DEFAULT_END_ANGLE,
            thumb_size: DEFAULT_THUMB_SIZE,
            start_thumb_size: None,
            end_thumb_size: None,
            start_thumb_color: Color::GRAY,
            end_thumb_color: Color::GRAY,
            border_thickness: DEFAULT_BORDER_THICKNESS,
            arc_dash_size: DEFAULT_ARC_DASH_SIZE,
            arc_color: Color::TRANSPARENT,
            border_color: Color::RED,
            start_thumb_image: None,
            end_thumb_image: None,
            line_cap: LineCap::Butt,
            padding: Padding::default(),
        }
    }
}

impl SliderConfig {
    pub fn resolved_start_thumb_size(&self) -> f64 {
        self.start_thumb_size.unwrap_or(self.thumb_size)
    }

    pub fn resolved_end_thumb_size(&self) -> f64 {
        self.end_thumb_size.unwrap_or(self.thumb_size)
    }
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "ringrange", "ringrange")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config(path: &Path) -> Result<SliderConfig, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("RINGRANGE")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Missing files fall back to defaults; malformed ones are reported.
pub fn load_or_default(path: Option<&Path>) -> Result<SliderConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => get_config_path()?,
    };

    if !path.exists() {
        log::info!(
            "No config at {}, using default slider settings",
            path.display()
        );
    }

    load_config(&path)
}

pub fn write_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
