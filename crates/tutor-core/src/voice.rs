//! Text sanitization for speech synthesis.

/// Code-point ranges a synthesizer cannot pronounce.
const PICTOGRAPH_RANGES: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F), // emoticons
    (0x1F300, 0x1F5FF), // misc symbols and pictographs
    (0x1F680, 0x1F6FF), // transport and map
    (0x1F1E0, 0x1F1FF), // regional indicators
    (0x2600, 0x26FF),   // misc symbols
    (0x2700, 0x27BF),   // dingbats
];

/// Strip pictographic code points from `text` before vocalizing.
/// Synthesis engines would otherwise read nothing useful for them.
pub fn strip_pictographs(text: &str) -> String {
    text.chars()
        .filter(|c| {
            let cp = *c as u32;
            !PICTOGRAPH_RANGES
                .iter()
                .any(|&(lo, hi)| cp >= lo && cp <= hi)
        })
        .collect()
}
