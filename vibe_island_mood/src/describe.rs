// Description synthesis: fixed sentence tables for tier and weather.
//
// `describe()` joins one tier sentence and one weather sentence.
// `summarize()` additionally appends interpretation notes. Both are pure
// lookups with no randomness, so the same (tier, weather, notes) always
// yields the same text.

use crate::types::{HouseTier, Weather};

pub fn tier_sentence(tier: HouseTier) -> &'static str {
    match tier {
        HouseTier::Shack => "Stacked shacks, gritty but alive.",
        HouseTier::Home => "Cozy stable home, mail on the porch.",
        HouseTier::Villa => "Soft-life villa, pool shimmering.",
    }
}

pub fn weather_sentence(weather: Weather) -> &'static str {
    match weather {
        Weather::Sunny => "Sun-washed horizon.",
        Weather::Cloudy => "Muted clouds drifting.",
        Weather::Rain => "Gentle rain tapping.",
        Weather::Storm => "Thunder stalking the skyline.",
        Weather::Snow => "Soft snow hushes everything.",
        Weather::Night => "Night neon hum.",
    }
}

/// Tier sentence followed by weather sentence.
pub fn describe(tier: HouseTier, weather: Weather) -> String {
    format!("{} {}", tier_sentence(tier), weather_sentence(weather))
}

/// `describe()` plus the notes, space-joined, in the order given.
pub fn summarize<S: AsRef<str>>(tier: HouseTier, weather: Weather, notes: &[S]) -> String {
    let mut out = describe(tier, weather);
    for note in notes {
        out.push(' ');
        out.push_str(note.as_ref());
    }
    out
}
