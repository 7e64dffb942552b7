// In-memory state of the mixer panel.
//
// Each selected emotion is a [`Channel`] carrying its own intensity, so the
// selection and its intensities are one list and can never disagree.

use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;
use thiserror::Error;

use super::catalog::EmotionId;
use super::code::generate_code;

pub const MAX_SELECTED: usize = 3;
pub const DEFAULT_INTENSITY: u8 = 5;
pub const MAX_INTENSITY: u8 = 10;
/// Status line text while the panel is powered off.
pub const OFFLINE: &str = "OFFLINE";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Channel {
    pub emotion: EmotionId,
    pub intensity: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Deselected,
    /// Selection was already full.
    Ignored,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MixerError {
    #[error("random pick count must be between 1 and 3, got {0}")]
    InvalidRandomCount(usize),
    #[error("{0} is not selected")]
    NotSelected(EmotionId),
}

#[derive(Clone, Debug, Default)]
pub struct MixerState {
    power: bool,
    channels: SmallVec<[Channel; MAX_SELECTED]>,
    last_random: Option<usize>,
}

impl MixerState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn power(&self) -> bool {
        self.power
    }

    pub fn toggle_power(&mut self) -> bool {
        self.power = !self.power;
        self.power
    }

    /// Selected channels in selection order.
    #[inline]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.channels.len() >= MAX_SELECTED
    }

    pub fn is_selected(&self, emotion: EmotionId) -> bool {
        self.channels.iter().any(|c| c.emotion == emotion)
    }

    pub fn intensity(&self, emotion: EmotionId) -> Option<u8> {
        self.channels
            .iter()
            .find(|c| c.emotion == emotion)
            .map(|c| c.intensity)
    }

    /// Unselected buttons are dimmed once no more can be picked.
    pub fn is_dimmed(&self, emotion: EmotionId) -> bool {
        self.is_full() && !self.is_selected(emotion)
    }

    pub fn last_random(&self) -> Option<usize> {
        self.last_random
    }

    pub fn toggle(&mut self, emotion: EmotionId) -> Toggle {
        if let Some(idx) = self.channels.iter().position(|c| c.emotion == emotion) {
            self.channels.remove(idx);
            Toggle::Deselected
        } else if self.is_full() {
            Toggle::Ignored
        } else {
            self.channels.push(Channel {
                emotion,
                intensity: DEFAULT_INTENSITY,
            });
            Toggle::Selected
        }
    }

    /// Store a new intensity, saturating into `0..=MAX_INTENSITY`.
    pub fn set_intensity(&mut self, emotion: EmotionId, value: i32) -> Result<u8, MixerError> {
        let channel = self
            .channels
            .iter_mut()
            .find(|c| c.emotion == emotion)
            .ok_or(MixerError::NotSelected(emotion))?;
        channel.intensity = value.clamp(0, MAX_INTENSITY as i32) as u8;
        Ok(channel.intensity)
    }

    /// Replace the selection with `count` distinct emotions at random intensities.
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<&[Channel], MixerError> {
        if !(1..=MAX_SELECTED).contains(&count) {
            return Err(MixerError::InvalidRandomCount(count));
        }
        self.last_random = Some(count);
        self.channels.clear();
        let picked: SmallVec<[EmotionId; MAX_SELECTED]> =
            EmotionId::ALL.choose_multiple(rng, count).copied().collect();
        for emotion in picked {
            let intensity = rng.gen_range(0..=MAX_INTENSITY);
            self.channels.push(Channel { emotion, intensity });
        }
        Ok(&self.channels)
    }

    pub fn code(&self) -> String {
        generate_code(self.channels.iter().map(|c| (c.emotion, c.intensity)))
    }

    pub fn status_line(&self) -> String {
        if self.power {
            self.code()
        } else {
            OFFLINE.to_string()
        }
    }
}

pub fn random_label(count: usize) -> String {
    if count == 1 {
        format!("{} emocja", count)
    } else {
        format!("{} emocje", count)
    }
}
