use failure::{ensure, Error};

use serde_derive::Deserialize;

use std::fs::File;
use std::io::Read;

use crate::time::TICKS_PER_QUARTER;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Timeline {
  pub ticks_per_quarter: u32,
}

impl Timeline {
  pub fn ticks_per_whole(&self) -> u32 {
    self.ticks_per_quarter * 4
  }
}

impl Default for Timeline {
  fn default() -> Timeline {
    Timeline {
      ticks_per_quarter: TICKS_PER_QUARTER,
    }
  }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SongDefaults {
  pub name: String,
}

impl Default for SongDefaults {
  fn default() -> SongDefaults {
    SongDefaults {
      name: "untitled".to_string(),
    }
  }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
  pub timeline: Timeline,
  pub song: SongDefaults,
}

impl Default for Config {
  fn default() -> Config {
    Config {
      timeline: Timeline::default(),
      song: SongDefaults::default(),
    }
  }
}

impl Config {
  pub fn from_file<'a, T>(path: T) -> Result<Config, Error>
  where
    T: Into<&'a str>,
  {
    let mut content = String::new();
    let path_str = path.into();
    let mut file = File::open(path_str)?;
    file.read_to_string(&mut content)?;
    Config::from_str(content.as_str())
  }

  pub fn from_str<'a, T>(content: T) -> Result<Config, Error>
  where
    T: Into<&'a str>,
  {
    let config: Config = toml::from_str(content.into())?;
    ensure!(
      config.timeline.ticks_per_quarter > 0,
      "timeline.ticks_per_quarter must be positive"
    );
    Ok(config)
  }
}
