use log::debug;

use crate::time::breakpoints::{Breakpoint, BreakpointList};
use crate::time::{Seconds, Tick, SECONDS_PER_MINUTE, TICKS_PER_QUARTER};

pub const DEFAULT_QPM: u32 = 120;

/// A tempo change: authored `tick` and `qpm`, plus the cached absolute
/// `time` of the change and the tick rate ruling until the next change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempoChange {
  tick: Tick,
  qpm: u32,
  time: Seconds,
  ticks_per_second: f64,
}

impl TempoChange {
  fn new(tick: Tick, qpm: u32, time: Seconds, qpm_to_tps: f64) -> TempoChange {
    TempoChange {
      tick,
      qpm,
      time,
      ticks_per_second: f64::from(qpm) * qpm_to_tps,
    }
  }

  pub fn tick(&self) -> Tick {
    self.tick
  }

  pub fn qpm(&self) -> u32 {
    self.qpm
  }

  pub fn time(&self) -> Seconds {
    self.time
  }

  pub fn ticks_per_second(&self) -> f64 {
    self.ticks_per_second
  }
}

impl Breakpoint for TempoChange {
  type Key = Tick;

  fn key(&self) -> Tick {
    self.tick
  }

  fn carry_derived(&mut self, previous: &TempoChange) {
    self.time = previous.time;
  }

  fn chain_from(&mut self, previous: &TempoChange) {
    let ticks = self.tick - previous.tick;
    self.time = previous.time + ticks as f64 / previous.ticks_per_second;
  }
}

/// Sorted tempo changes converting between the tick axis and seconds.
///
/// The origin change at tick 0 is permanent, so every lookup by
/// `tick <= query` or `time <= query` finds a ruling change.
pub struct TempoMap {
  changes: BreakpointList<TempoChange>,
  // the factor converting quarters per minute to ticks per second
  qpm_to_tps: f64,
}

impl TempoMap {
  pub fn new(ticks_per_quarter: u32) -> TempoMap {
    assert!(ticks_per_quarter > 0);
    let qpm_to_tps = f64::from(ticks_per_quarter) / f64::from(SECONDS_PER_MINUTE);
    let origin = TempoChange::new(0, DEFAULT_QPM, 0.0, qpm_to_tps);
    TempoMap {
      changes: BreakpointList::with_origin(origin),
      qpm_to_tps,
    }
  }

  /// Set the tempo ruling from `tick` on. Out-of-domain input is ignored:
  /// the tick must be non-negative and the tempo positive. A change at an
  /// already occupied tick replaces it, keeping its absolute time.
  /// Returns whether the map changed.
  pub fn set_tempo(&mut self, tick: i64, qpm: i32) -> bool {
    if tick < 0 || qpm <= 0 {
      debug!("ignoring tempo change at tick {} with qpm {}", tick, qpm);
      return false;
    }

    let change = TempoChange::new(tick as Tick, qpm as u32, 0.0, self.qpm_to_tps);
    self.changes.upsert(change)
  }

  /// Remove the tempo change at exactly `tick`. The origin change at
  /// tick 0 stays put, and a tick holding no change is ignored.
  pub fn unset_tempo(&mut self, tick: i64) -> bool {
    if tick <= 0 {
      debug!("ignoring removal of tempo change at tick {}", tick);
      return false;
    }

    self.changes.remove(tick as Tick)
  }

  /// Absolute time in seconds of a tick position.
  pub fn tick_to_time(&self, tick: Tick) -> Seconds {
    let change = self.changes.last_by(|change| change.tick <= tick);
    let ticks = tick - change.tick;
    change.time + ticks as f64 / change.ticks_per_second
  }

  /// Tick position at an absolute time, rounded to the nearest tick
  /// (half away from zero). Times before the origin clamp to tick 0.
  pub fn time_to_tick(&self, time: Seconds) -> Tick {
    let time = time.max(0.0); // also maps NaN to the origin
    let change = self.changes.last_by(|change| change.time <= time);
    let ticks = (time - change.time) * change.ticks_per_second;
    (change.tick as f64 + ticks).round() as Tick
  }

  /// The ordered tempo changes, read-only.
  pub fn changes(&self) -> &[TempoChange] {
    self.changes.items()
  }

  pub fn revision(&self) -> u64 {
    self.changes.revision()
  }
}

impl Default for TempoMap {
  fn default() -> TempoMap {
    TempoMap::new(TICKS_PER_QUARTER)
  }
}
