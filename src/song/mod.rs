pub mod instrument;
pub mod note;
pub mod track;

pub use self::instrument::{Instrument, Waveform};
pub use self::note::Note;
pub use self::track::{Track, TrackId};

use crate::config::Config;
use crate::time::{SignatureMap, TempoMap};

/// The editing session: one tempo map, one signature map and the tracks.
///
/// Both maps start from their single default breakpoint (120 qpm at
/// tick 0, 4/4 at bar 0) on every load; they are not part of the state
/// the surrounding application persists.
pub struct Song {
  name: String,

  tempo_map: TempoMap,
  signature_map: SignatureMap,

  tracks: Vec<Track>,
}

impl Song {
  pub fn new(config: &Config) -> Song {
    Song {
      name: config.song.name.clone(),

      tempo_map: TempoMap::new(config.timeline.ticks_per_quarter),
      signature_map: SignatureMap::new(config.timeline.ticks_per_whole()),

      tracks: Vec::new(),
    }
  }

  pub fn name(&self) -> &str {
    self.name.as_str()
  }

  pub fn set_name<T>(&mut self, name: T)
  where
    T: Into<String>,
  {
    self.name = name.into();
  }

  pub fn tempo_map(&self) -> &TempoMap {
    &self.tempo_map
  }

  pub fn tempo_map_mut(&mut self) -> &mut TempoMap {
    &mut self.tempo_map
  }

  pub fn signature_map(&self) -> &SignatureMap {
    &self.signature_map
  }

  pub fn signature_map_mut(&mut self) -> &mut SignatureMap {
    &mut self.signature_map
  }

  pub fn add_track(&mut self, track: Track) -> TrackId {
    let id = track.id();
    self.tracks.push(track);
    id
  }

  pub fn remove_track(&mut self, id: TrackId) -> bool {
    match self.tracks.iter().position(|track| track.id() == id) {
      Some(index) => {
        self.tracks.remove(index);
        true
      }
      None => false,
    }
  }

  pub fn tracks(&self) -> &[Track] {
    &self.tracks
  }

  pub fn track_mut(&mut self, id: TrackId) -> Option<&mut Track> {
    self.tracks.iter_mut().find(|track| track.id() == id)
  }
}
