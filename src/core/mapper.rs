use crate::domain::model::{RgbSample, SelectedPalette};
use crate::domain::palette::CHAKRA_PALETTE;
use crate::utils::error::{AuraError, Result};

/// Probe step for generating candidate catalog indices. Together with the
/// weighted channel sum below this forms the dispersion function the whole
/// visual identity depends on, so the arithmetic must stay exactly as-is.
const PROBE_STEP: usize = 17;

/// Fallback seed offsets into the raw photo bytes.
const SEED_OFFSETS: [usize; 2] = [100, 200];

/// Deterministically maps extracted colors to 2 or 3 catalog entries.
///
/// hash = Σ(r + 2g + 3b) over the samples; entry count = 2 + hash mod 2;
/// candidates are (hash + i·17) mod 7 with forward linear probing when a
/// candidate repeats. Same samples always yield the same selection.
pub fn select_palette(samples: &[RgbSample]) -> Result<SelectedPalette> {
    if samples.is_empty() {
        return Err(AuraError::ContractViolation {
            message: "cannot select a palette from zero color samples".to_string(),
        });
    }

    let hash: usize = samples
        .iter()
        .map(|s| s.r as usize + 2 * s.g as usize + 3 * s.b as usize)
        .sum();

    let count = 2 + hash % 2;
    let mut indices: Vec<usize> = Vec::with_capacity(count);
    for i in 0..count {
        let mut index = (hash + i * PROBE_STEP) % CHAKRA_PALETTE.len();
        while indices.contains(&index) {
            index = (index + 1) % CHAKRA_PALETTE.len();
        }
        indices.push(index);
    }

    SelectedPalette::new(indices.iter().map(|&i| &CHAKRA_PALETTE[i]).collect())
}

/// Fallback used when the photo never decoded: derives a 2-entry selection
/// from the raw encoded bytes. Offsets past the end of short inputs are
/// clamped to the last byte (an empty input contributes 0), so the function
/// is total over any byte string.
pub fn select_palette_from_seed(bytes: &[u8]) -> Result<SelectedPalette> {
    let byte_at = |offset: usize| -> usize {
        bytes
            .get(offset)
            .or_else(|| bytes.last())
            .copied()
            .unwrap_or(0) as usize
    };

    let seed = bytes.len() + byte_at(SEED_OFFSETS[0]) + byte_at(SEED_OFFSETS[1]);
    let index1 = seed % CHAKRA_PALETTE.len();
    let mut index2 = (seed * 7) % CHAKRA_PALETTE.len();
    if index2 == index1 {
        index2 = (index2 + 1) % CHAKRA_PALETTE.len();
    }

    SelectedPalette::new(vec![&CHAKRA_PALETTE[index1], &CHAKRA_PALETTE[index2]])
}
