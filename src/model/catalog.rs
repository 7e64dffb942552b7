// The fixed emotion palette offered by the mixer.
//
// The catalog is static: eight entries, defined once, never mutated. Every
// other part of the mixer refers to an entry through its [`EmotionId`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmotionId {
    Joy,
    Trust,
    Fear,
    Surprise,
    Sadness,
    Disgust,
    Anger,
    Anticipation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Emotion {
    pub id: EmotionId,
    pub name: &'static str,
    pub local_name: &'static str,
    /// Two-letter code, unique across the catalog.
    pub code: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown emotion code {0:?}")]
    UnknownCode(String),
}

// Order matches the declaration order of `EmotionId`.
pub static EMOTIONS: [Emotion; 8] = [
    Emotion {
        id: EmotionId::Joy,
        name: "Joy",
        local_name: "Radość",
        code: "JO",
        color: "#FFD700",
    },
    Emotion {
        id: EmotionId::Trust,
        name: "Trust",
        local_name: "Zaufanie",
        code: "TR",
        color: "#4CAF50",
    },
    Emotion {
        id: EmotionId::Fear,
        name: "Fear",
        local_name: "Strach",
        code: "FR",
        color: "#9C27B0",
    },
    Emotion {
        id: EmotionId::Surprise,
        name: "Surprise",
        local_name: "Zaskoczenie",
        code: "SU",
        color: "#FF9800",
    },
    Emotion {
        id: EmotionId::Sadness,
        name: "Sadness",
        local_name: "Smutek",
        code: "SA",
        color: "#2196F3",
    },
    Emotion {
        id: EmotionId::Disgust,
        name: "Disgust",
        local_name: "Odraza",
        code: "DI",
        color: "#795548",
    },
    Emotion {
        id: EmotionId::Anger,
        name: "Anger",
        local_name: "Gniew",
        code: "AG",
        color: "#F44336",
    },
    Emotion {
        id: EmotionId::Anticipation,
        name: "Anticipation",
        local_name: "Oczekiwanie",
        code: "AN",
        color: "#3F51B5",
    },
];

impl EmotionId {
    pub const ALL: [EmotionId; 8] = [
        EmotionId::Joy,
        EmotionId::Trust,
        EmotionId::Fear,
        EmotionId::Surprise,
        EmotionId::Sadness,
        EmotionId::Disgust,
        EmotionId::Anger,
        EmotionId::Anticipation,
    ];

    #[inline]
    pub fn info(self) -> &'static Emotion {
        &EMOTIONS[self as usize]
    }

    #[inline]
    pub fn code(self) -> &'static str {
        self.info().code
    }

    /// Look an emotion up by its two-letter code, ignoring ASCII case.
    pub fn from_code(code: &str) -> Result<Self, CatalogError> {
        let code = code.trim();
        EMOTIONS
            .iter()
            .find(|e| e.code.eq_ignore_ascii_case(code))
            .map(|e| e.id)
            .ok_or_else(|| CatalogError::UnknownCode(code.to_string()))
    }
}

impl FromStr for EmotionId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for EmotionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.info().name, self.code())
    }
}
