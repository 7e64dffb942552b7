// Host-side tests for the status code generator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod model {
    pub mod catalog {
        include!("../src/model/catalog.rs");
    }
    pub mod code {
        include!("../src/model/code.rs");
    }
}

use model::catalog::EmotionId;
use model::code::*;

#[test]
fn empty_selection_yields_no_input() {
    assert_eq!(generate_code(Vec::<(EmotionId, u8)>::new()), NO_INPUT);
    assert_eq!(generate_code(std::iter::empty::<(EmotionId, u8)>()), "NO INPUT");
}

#[test]
fn mixed_selection_matches_reference_example() {
    let code = generate_code([
        (EmotionId::Fear, 2),
        (EmotionId::Joy, 9),
        (EmotionId::Anger, 5),
    ]);
    assert_eq!(code, "CSE-[AG.FR.JO]-[M.L.H]-001");
}

#[test]
fn single_emotion_has_no_separator() {
    assert_eq!(
        generate_code([(EmotionId::Trust, 0)]),
        "CSE-[TR]-[L]-001"
    );
    assert_eq!(
        generate_code([(EmotionId::Surprise, 10)]),
        "CSE-[SU]-[H]-001"
    );
}

#[test]
fn code_is_independent_of_selection_order() {
    let picks = [
        (EmotionId::Sadness, 7),
        (EmotionId::Anticipation, 3),
        (EmotionId::Disgust, 8),
    ];
    let expected = "CSE-[AN.DI.SA]-[L.H.M]-001";
    // every ordering of the three picks
    let orders = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
    for order in orders {
        let entries: Vec<_> = order.iter().map(|&i| picks[i]).collect();
        assert_eq!(generate_code(entries), expected, "order {:?}", order);
    }
}

#[test]
fn anger_sorts_before_anticipation() {
    // AG < AN even though Anticipation comes later in the catalog
    let code = generate_code([(EmotionId::Anticipation, 5), (EmotionId::Anger, 5)]);
    assert_eq!(code, "CSE-[AG.AN]-[M.M]-001");
}

#[test]
fn tiers_partition_the_intensity_range() {
    for i in 0..=10u8 {
        let tier = IntensityTier::from_intensity(i);
        assert_eq!(tier == IntensityTier::Low, i <= 3, "intensity {i}");
        assert_eq!(tier == IntensityTier::Medium, (4..=7).contains(&i), "intensity {i}");
        assert_eq!(tier == IntensityTier::High, i >= 8, "intensity {i}");
    }
}

#[test]
fn tier_boundaries_and_letters() {
    assert_eq!(IntensityTier::from_intensity(3).letter(), 'L');
    assert_eq!(IntensityTier::from_intensity(4).letter(), 'M');
    assert_eq!(IntensityTier::from_intensity(7).letter(), 'M');
    assert_eq!(IntensityTier::from_intensity(8).letter(), 'H');
}
