pub mod breakpoints;
pub mod signature_map;
pub mod tempo_map;

pub use self::signature_map::{BarPosition, SignatureMap, TimeSignature};
pub use self::tempo_map::{TempoChange, TempoMap};

pub type Tick = u64;
pub type Bar = u64;
pub type Seconds = f64;

// default MIDI resolution
pub const TICKS_PER_QUARTER: u32 = 480;
pub const TICKS_PER_WHOLE: u32 = TICKS_PER_QUARTER * 4;
pub const TICKS_PER_SIXTEENTH: u32 = TICKS_PER_QUARTER / 4;

pub const SECONDS_PER_MINUTE: u32 = 60;
