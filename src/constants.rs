/// Panel layout and knob tuning constants.
///
/// Model limits (selection size, intensity bounds) live with the model; these
/// cover the DOM surface and how the knobs respond to the pointer.
// Host element; falls back to <body> when missing
pub const MOUNT_ELEMENT_ID: &str = "emotion-mixer";
pub const TITLE: &str = "EMOTION MIXER 3000";

// Knobs rendered for each selected emotion
pub const KNOB_MIN: i32 = 0;
pub const KNOB_MAX: i32 = 10;
pub const KNOB_STEP: i32 = 1;
pub const KNOB_SENSITIVITY: f64 = 0.5; // half speed: 200px of travel sweeps the range

// Random-pick buttons, one per count
pub const RANDOM_COUNTS: [usize; 3] = [1, 2, 3];

// Button opacity when no more emotions can be picked
pub const DIMMED_OPACITY: &str = "0.5";

pub const LOG_LEVEL: log::Level = log::Level::Info;
