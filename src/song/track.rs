use uuid::Uuid;

use crate::bisect::bisect_index;
use crate::song::instrument::Instrument;
use crate::song::note::Note;
use crate::time::Tick;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct TrackId(Uuid);

impl TrackId {
  pub fn new() -> TrackId {
    TrackId(Uuid::new_v4())
  }
}

/// A track holding its instrument and a note list kept sorted by start
/// tick. Notes starting at the same tick keep their insertion order.
pub struct Track {
  id: TrackId,
  name: String,
  instrument: Instrument,
  notes: Vec<Note>,
}

impl Track {
  pub fn new<T>(name: T) -> Track
  where
    T: Into<String>,
  {
    Track {
      id: TrackId::new(),
      name: name.into(),
      instrument: Instrument::default(),
      notes: Vec::new(),
    }
  }

  pub fn id(&self) -> TrackId {
    self.id
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

  pub fn instrument(&self) -> &Instrument {
    &self.instrument
  }

  pub fn instrument_mut(&mut self) -> &mut Instrument {
    &mut self.instrument
  }

  pub fn add_note(&mut self, note: Note) {
    let index = bisect_index(&self.notes, |other| other.start <= note.start);
    match index {
      Some(index) => self.notes.insert(index + 1, note),
      None => self.notes.insert(0, note),
    }
  }

  /// Remove the first note equal to `note`, when present.
  pub fn remove_note(&mut self, note: &Note) -> bool {
    match self.notes.iter().position(|other| other == note) {
      Some(index) => {
        self.notes.remove(index);
        true
      }
      None => false,
    }
  }

  pub fn notes(&self) -> &[Note] {
    &self.notes
  }

  /// Notes sounding anywhere within the tick range `start..end`.
  pub fn notes_in_range<'a>(&'a self, start: Tick, end: Tick) -> impl Iterator<Item = &'a Note> {
    self
      .notes
      .iter()
      .filter(move |note| note.start < end && note.end() > start)
  }
}
