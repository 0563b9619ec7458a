use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
  #[serde(rename = "sine")]
  Sine,
  #[serde(rename = "square")]
  Square,
  #[serde(rename = "25% square")]
  PulseQuarter,
  #[serde(rename = "triangle")]
  Triangle,
  #[serde(rename = "sawtooth")]
  Sawtooth,
  #[serde(rename = "noise")]
  Noise,
}

/// Oscillator settings with an ADSR envelope. Times are in seconds,
/// sustain and volume are gains within 0..=1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Instrument {
  pub waveform: Waveform,
  pub attack: f64,
  pub decay: f64,
  pub sustain: f64,
  pub release: f64,
  pub volume: f64,
}

impl Default for Instrument {
  fn default() -> Instrument {
    Instrument {
      waveform: Waveform::Sine,
      attack: 0.01,
      decay: 0.0,
      sustain: 1.0,
      release: 0.25,
      volume: 0.25,
    }
  }
}

#[cfg(test)]
mod test {

  use super::{Instrument, Waveform};

  #[test]
  pub fn default_instrument() {
    let instrument = Instrument::default();
    assert_eq!(instrument.waveform, Waveform::Sine);
    assert_eq!(instrument.attack, 0.01);
    assert_eq!(instrument.release, 0.25);
    assert_eq!(instrument.volume, 0.25);
  }
}
