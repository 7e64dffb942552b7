pub mod catalog;
pub mod code;
pub mod mixer;

pub use catalog::EmotionId;
pub use mixer::{random_label, MixerState, Toggle, MAX_SELECTED};
