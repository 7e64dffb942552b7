// Status code generation.
//
// A code summarizes a selection as `CSE-[codes]-[tiers]-001`, e.g.
// `CSE-[AG.FR.JO]-[M.L.H]-001`. Entries are ordered by emotion code so the
// same set always yields the same string, whatever order it was picked in.

use smallvec::SmallVec;

use super::catalog::EmotionId;

pub const CODE_PREFIX: &str = "CSE";
pub const CODE_SEQUENCE: &str = "001";
pub const CODE_SEPARATOR: &str = ".";
/// Shown in place of a code when nothing is selected.
pub const NO_INPUT: &str = "NO INPUT";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntensityTier {
    Low,
    Medium,
    High,
}

impl IntensityTier {
    #[inline]
    pub fn from_intensity(intensity: u8) -> Self {
        match intensity {
            0..=3 => IntensityTier::Low,
            4..=7 => IntensityTier::Medium,
            _ => IntensityTier::High,
        }
    }

    #[inline]
    pub fn letter(self) -> char {
        match self {
            IntensityTier::Low => 'L',
            IntensityTier::Medium => 'M',
            IntensityTier::High => 'H',
        }
    }
}

pub fn generate_code<I>(entries: I) -> String
where
    I: IntoIterator<Item = (EmotionId, u8)>,
{
    let mut sorted: SmallVec<[(EmotionId, u8); 3]> = entries.into_iter().collect();
    if sorted.is_empty() {
        return NO_INPUT.to_string();
    }
    sorted.sort_by(|a, b| a.0.code().cmp(b.0.code()));

    let codes: SmallVec<[&str; 3]> = sorted.iter().map(|(e, _)| e.code()).collect();
    let tiers: SmallVec<[String; 3]> = sorted
        .iter()
        .map(|(_, i)| IntensityTier::from_intensity(*i).letter().to_string())
        .collect();

    format!(
        "{}-[{}]-[{}]-{}",
        CODE_PREFIX,
        codes.join(CODE_SEPARATOR),
        tiers.join(CODE_SEPARATOR),
        CODE_SEQUENCE
    )
}
