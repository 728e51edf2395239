//! Command line configuration for the `rastrs` binary.

use std::path::PathBuf;

use thiserror::Error;

use crate::engine::RenderMode;

pub const DEFAULT_WIDTH: u32 = 2048;
pub const DEFAULT_HEIGHT: u32 = 2048;
pub const DEFAULT_OUTPUT: &str = "image.bmp";

pub const USAGE: &str = "\
usage: rastrs <model.obj> [options]

options:
  -w, --wireframe    draw triangle outlines only
      --outline      draw filled triangles with a dark outline
      --size WxH     output size in pixels (default 2048x2048)
      --out PATH     output image, format from extension (default image.bmp)
      --seed N       seed for face colors (default 0)
      --console      also print the image to the terminal";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown option {0}")]
    UnknownFlag(String),

    #[error("no model path given")]
    MissingModel,
}

/// Everything a render run needs to know.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub model: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub mode: RenderMode,
    pub seed: u64,
    pub console: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            model: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mode: RenderMode::Filled,
            seed: 0,
            console: false,
        }
    }
}

impl RenderConfig {
    /// Parse arguments, not including the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut model = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-w" | "--wireframe" => config.mode = RenderMode::Wireframe,
                "--outline" => config.mode = RenderMode::FilledWireframe,
                "--console" => config.console = true,
                "--size" => {
                    let value = next_value(&mut args, &arg)?;
                    let (width, height) =
                        parse_size(&value).ok_or_else(|| invalid(&arg, &value))?;
                    config.width = width;
                    config.height = height;
                }
                "--out" => config.output = PathBuf::from(next_value(&mut args, &arg)?),
                "--seed" => {
                    let value = next_value(&mut args, &arg)?;
                    config.seed = value.parse().map_err(|_| invalid(&arg, &value))?;
                }
                flag if flag.starts_with('-') => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()));
                }
                path if model.is_none() => model = Some(PathBuf::from(path)),
                extra => return Err(ConfigError::UnknownFlag(extra.to_string())),
            }
        }

        config.model = model.ok_or(ConfigError::MissingModel)?;
        Ok(config)
    }
}

fn next_value<I>(args: &mut I, flag: &str) -> Result<String, ConfigError>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

fn invalid(flag: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    }
}

/// `WxH` with both sides non-zero.
fn parse_size(value: &str) -> Option<(u32, u32)> {
    let (w, h) = value.split_once(['x', 'X'])?;
    let width = w.parse::<u32>().ok().filter(|&w| w > 0)?;
    let height = h.parse::<u32>().ok().filter(|&h| h > 0)?;
    Some((width, height))
}
