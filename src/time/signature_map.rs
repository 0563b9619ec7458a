use std::fmt;

use log::debug;

use crate::time::breakpoints::{Breakpoint, BreakpointList};
use crate::time::{Bar, Tick, TICKS_PER_WHOLE};

pub const DEFAULT_NUM_BEATS: u32 = 4;
pub const DEFAULT_NOTE_VALUE: u32 = 4;

const MAX_NUM_BEATS: i32 = 16;
const VALID_NOTE_VALUES: [i32; 5] = [1, 2, 4, 8, 16];

/// A time-signature change: authored `bar`, `num_beats` (numerator) and
/// `note_value` (denominator), plus the cached start `tick` of the bar and
/// the tick rates ruling until the next change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSignature {
  bar: Bar,
  num_beats: u32,
  note_value: u32,
  tick: Tick,
  ticks_per_click: u64,
  ticks_per_bar: u64,
}

impl TimeSignature {
  fn new(bar: Bar, num_beats: u32, note_value: u32, tick: Tick, ticks_per_whole: u32) -> TimeSignature {
    let ticks_per_click = u64::from(ticks_per_whole / note_value);
    TimeSignature {
      bar,
      num_beats,
      note_value,
      tick,
      ticks_per_click,
      ticks_per_bar: ticks_per_click * u64::from(num_beats),
    }
  }

  pub fn bar(&self) -> Bar {
    self.bar
  }

  pub fn num_beats(&self) -> u32 {
    self.num_beats
  }

  pub fn note_value(&self) -> u32 {
    self.note_value
  }

  pub fn tick(&self) -> Tick {
    self.tick
  }

  pub fn ticks_per_click(&self) -> u64 {
    self.ticks_per_click
  }

  pub fn ticks_per_bar(&self) -> u64 {
    self.ticks_per_bar
  }
}

impl fmt::Display for TimeSignature {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}/{}", self.num_beats, self.note_value)
  }
}

impl Breakpoint for TimeSignature {
  type Key = Bar;

  fn key(&self) -> Bar {
    self.bar
  }

  fn carry_derived(&mut self, previous: &TimeSignature) {
    self.tick = previous.tick;
  }

  fn chain_from(&mut self, previous: &TimeSignature) {
    let bars = self.bar - previous.bar;
    self.tick = previous.tick + bars * previous.ticks_per_bar;
  }
}

/// The musical position of a tick under its ruling time signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarPosition {
  pub bar: Bar,
  pub click: u64,
  pub sixteenth: u64,
  pub tick: u64,
}

impl fmt::Display for BarPosition {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    // bar, click and sixteenth are shown starting from 1
    write!(
      f,
      "{:05}:{:02}:{:02}:{:03}",
      self.bar + 1,
      self.click + 1,
      self.sixteenth + 1,
      self.tick
    )
  }
}

/// Sorted time-signature changes converting between the bar axis and the
/// tick axis. The origin 4/4 signature at bar 0 is permanent.
pub struct SignatureMap {
  signatures: BreakpointList<TimeSignature>,
  ticks_per_whole: u32,
}

impl SignatureMap {
  pub fn new(ticks_per_whole: u32) -> SignatureMap {
    // at least one tick per sixteenth keeps every cached rate positive
    assert!(ticks_per_whole >= 16);
    let origin = TimeSignature::new(0, DEFAULT_NUM_BEATS, DEFAULT_NOTE_VALUE, 0, ticks_per_whole);
    SignatureMap {
      signatures: BreakpointList::with_origin(origin),
      ticks_per_whole,
    }
  }

  /// Set the time signature ruling from `bar` on. Out-of-domain input is
  /// ignored: the bar must be non-negative, the numerator within 1..=16
  /// and the denominator a power of two up to 16. A signature at an
  /// already occupied bar replaces it, keeping its start tick.
  /// Returns whether the map changed.
  pub fn set_signature(&mut self, bar: i64, num_beats: i32, note_value: i32) -> bool {
    if bar < 0 || num_beats < 1 || num_beats > MAX_NUM_BEATS || !VALID_NOTE_VALUES.contains(&note_value) {
      debug!(
        "ignoring signature change at bar {} with {}/{}",
        bar, num_beats, note_value
      );
      return false;
    }

    let signature = TimeSignature::new(
      bar as Bar,
      num_beats as u32,
      note_value as u32,
      0,
      self.ticks_per_whole,
    );
    self.signatures.upsert(signature)
  }

  /// Remove the signature change at exactly `bar`. The origin signature
  /// at bar 0 stays put, and a bar holding no change is ignored.
  pub fn unset_signature(&mut self, bar: i64) -> bool {
    if bar <= 0 {
      debug!("ignoring removal of signature change at bar {}", bar);
      return false;
    }

    self.signatures.remove(bar as Bar)
  }

  /// The signature ruling a bar.
  pub fn at_bar(&self, bar: Bar) -> &TimeSignature {
    self.signatures.last_by(|signature| signature.bar <= bar)
  }

  /// The signature ruling a tick position.
  pub fn at_tick(&self, tick: Tick) -> &TimeSignature {
    self.signatures.last_by(|signature| signature.tick <= tick)
  }

  /// The musical position of a tick: bar, click within the bar, sixteenth
  /// within the click, and the tick remainder.
  pub fn position_at(&self, tick: Tick) -> BarPosition {
    let signature = self.at_tick(tick);
    let ticks_per_sixteenth = u64::from(self.ticks_per_whole / 16);

    let ticks = tick - signature.tick;
    let bars = ticks / signature.ticks_per_bar;
    let remainder = ticks % signature.ticks_per_bar;
    let clicks = remainder / signature.ticks_per_click;
    let remainder = remainder % signature.ticks_per_click;

    BarPosition {
      bar: signature.bar + bars,
      click: clicks,
      sixteenth: remainder / ticks_per_sixteenth,
      tick: remainder % ticks_per_sixteenth,
    }
  }

  /// The ordered signature changes, read-only.
  pub fn signatures(&self) -> &[TimeSignature] {
    self.signatures.items()
  }

  pub fn revision(&self) -> u64 {
    self.signatures.revision()
  }
}

impl Default for SignatureMap {
  fn default() -> SignatureMap {
    SignatureMap::new(TICKS_PER_WHOLE)
  }
}

#[cfg(test)]
mod test {

  use super::SignatureMap;

  fn assert_consistent(map: &SignatureMap) {
    let signatures = map.signatures();
    assert_eq!(signatures[0].bar(), 0);
    for index in 1..signatures.len() {
      let previous = &signatures[index - 1];
      let current = &signatures[index];
      assert!(previous.bar() < current.bar());
      let bars = current.bar() - previous.bar();
      assert_eq!(current.tick(), previous.tick() + bars * previous.ticks_per_bar());
    }
  }

  #[test]
  pub fn default_scenario() {
    let map = SignatureMap::default();
    let origin = &map.signatures()[0];
    assert_eq!(origin.ticks_per_click(), 480);
    assert_eq!(origin.ticks_per_bar(), 1920);
  }

  #[test]
  pub fn insertion_scenario() {
    let mut map = SignatureMap::default();
    assert!(map.set_signature(4, 3, 8));

    let signatures = map.signatures();
    assert_eq!(signatures.len(), 2);
    assert_eq!(signatures[1].tick(), 7680);
    assert_eq!(signatures[1].ticks_per_click(), 240);
    assert_eq!(signatures[1].ticks_per_bar(), 720);
  }

  #[test]
  pub fn removal_reverts() {
    let mut map = SignatureMap::default();
    map.set_signature(4, 3, 8);
    map.set_signature(8, 6, 8);
    assert!(map.unset_signature(4));

    let signatures = map.signatures();
    assert_eq!(signatures.len(), 2);
    // bar 8 now chains directly from the 4/4 origin
    assert_eq!(signatures[1].tick(), 8 * 1920);
    assert_consistent(&map);
  }

  #[test]
  pub fn replace_keeps_tick() {
    let mut map = SignatureMap::default();
    map.set_signature(4, 3, 8);
    map.set_signature(4, 7, 16);

    let signatures = map.signatures();
    assert_eq!(signatures.len(), 2);
    assert_eq!(signatures[1].num_beats(), 7);
    assert_eq!(signatures[1].tick(), 7680);
    assert_consistent(&map);
  }

  #[test]
  pub fn identical_signature_is_no_op() {
    let mut map = SignatureMap::default();
    map.set_signature(4, 3, 8);
    let revision = map.revision();

    assert!(!map.set_signature(4, 3, 8));
    assert_eq!(map.signatures().len(), 2);
    assert_eq!(map.revision(), revision);
  }

  #[test]
  pub fn rejected_input() {
    let mut map = SignatureMap::default();
    let revision = map.revision();

    assert!(!map.set_signature(-1, 4, 4));
    assert!(!map.set_signature(2, 0, 4));
    assert!(!map.set_signature(2, 17, 4));
    assert!(!map.set_signature(2, 4, 3));
    assert!(!map.set_signature(2, 4, 32));
    assert!(!map.unset_signature(0));
    assert!(!map.unset_signature(-2));
    assert!(!map.unset_signature(5));

    assert_eq!(map.signatures().len(), 1);
    assert_eq!(map.revision(), revision);
  }

  #[test]
  pub fn mid_list_insert_recomputes_forward() {
    let mut map = SignatureMap::default();
    map.set_signature(8, 4, 4);
    map.set_signature(4, 3, 8);

    let signatures = map.signatures();
    assert_eq!(signatures.len(), 3);
    // bars 4..8 under 3/8 take 4 * 720 ticks
    assert_eq!(signatures[2].tick(), 7680 + 4 * 720);
    assert_consistent(&map);
  }

  #[test]
  pub fn queries_by_bar_and_tick() {
    let mut map = SignatureMap::default();
    map.set_signature(4, 3, 8);

    assert_eq!(map.at_bar(3).bar(), 0);
    assert_eq!(map.at_bar(4).bar(), 4);
    assert_eq!(map.at_bar(100).bar(), 4);

    assert_eq!(map.at_tick(7679).bar(), 0);
    assert_eq!(map.at_tick(7680).bar(), 4);
  }

  #[test]
  pub fn position_within_origin_signature() {
    let map = SignatureMap::default();
    // bar 2, click 1, sixteenth 2, 30 ticks
    let tick = 2 * 1920 + 480 + 2 * 120 + 30;
    let position = map.position_at(tick);
    assert_eq!(position.bar, 2);
    assert_eq!(position.click, 1);
    assert_eq!(position.sixteenth, 2);
    assert_eq!(position.tick, 30);
    assert_eq!(format!("{}", position), "00003:02:03:030");
  }

  #[test]
  pub fn position_after_signature_change() {
    let mut map = SignatureMap::default();
    map.set_signature(4, 3, 8);

    // one bar and one click past the change
    let position = map.position_at(7680 + 720 + 240);
    assert_eq!(position.bar, 5);
    assert_eq!(position.click, 1);
    assert_eq!(position.sixteenth, 0);
    assert_eq!(position.tick, 0);
  }

  #[test]
  #[should_panic]
  pub fn rejects_degenerate_resolution() {
    SignatureMap::new(8);
  }

  #[test]
  pub fn minimal_resolution_positions() {
    let mut map = SignatureMap::new(16);
    assert!(map.set_signature(1, 4, 16));

    let signatures = map.signatures();
    assert_eq!(signatures[1].tick(), 16);
    assert_eq!(signatures[1].ticks_per_click(), 1);
    assert_eq!(signatures[1].ticks_per_bar(), 4);

    // one bar and one single-tick click past the change
    let position = map.position_at(16 + 4 + 1);
    assert_eq!(position.bar, 2);
    assert_eq!(position.click, 1);
    assert_eq!(position.sixteenth, 0);
    assert_eq!(position.tick, 0);
  }

  #[test]
  pub fn signature_display() {
    let map = SignatureMap::default();
    assert_eq!(format!("{}", map.at_bar(0)), "4/4");
  }
}
