use serde_derive::{Deserialize, Serialize};

use crate::keys::Key;
use crate::time::Tick;

/// A note on the piano roll. Plain value record; the end position is
/// computed on demand instead of being cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
  pub start: Tick,
  pub length: Tick,
  pub key: Key,
  pub velocity: u8,
}

impl Note {
  pub fn new(start: Tick, length: Tick, key: Key, velocity: u8) -> Note {
    Note {
      start,
      length,
      key,
      velocity,
    }
  }

  pub fn end(&self) -> Tick {
    self.start + self.length
  }
}
