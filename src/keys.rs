//! The 128 MIDI keys with their note names and equal-temperament
//! frequencies (A = 440 Hz at key 57).

pub type Key = u8;

pub const TOTAL_KEYS: Key = 128;

const NAMES: [&str; 12] = [
  "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

// octave shown for key 0 (lowest C)
const OCTAVE_OFFSET: i32 = -2;

pub fn key_to_name(key: Key) -> String {
  let remain = key % 12;
  let octave = i32::from(key / 12) + OCTAVE_OFFSET;
  format!("{}{}", NAMES[remain as usize], octave)
}

pub fn name_to_key(name: &str) -> Option<Key> {
  // longest pitch-class prefix first, so "C#" is not read as "C"
  let (index, prefix) = NAMES
    .iter()
    .enumerate()
    .filter(|(_, prefix)| name.starts_with(*prefix))
    .max_by_key(|(_, prefix)| prefix.len())?;

  let octave: i32 = name[prefix.len()..].parse().ok()?;
  let key = (octave - OCTAVE_OFFSET) * 12 + index as i32;
  if key >= 0 && key < i32::from(TOTAL_KEYS) {
    Some(key as Key)
  } else {
    None
  }
}

pub fn key_to_freq(key: Key) -> f64 {
  440.0 * 2.0f64.powf((f64::from(key) - 57.0) / 12.0)
}
