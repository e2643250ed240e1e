use crate::domain::palette::PaletteEntry;
use crate::utils::error::{AuraError, Result};
use chrono::{DateTime, Utc};
use image::RgbaImage;
use serde::Serialize;

/// A quantized color bucket found while sampling a photo region. Channel
/// values are always multiples of the quantization bucket width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RgbSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub count: u32,
}

/// Ordered selection of 1-3 distinct catalog entries; the first entry is the
/// dominant ("primary") one.
#[derive(Debug, Clone, Serialize)]
pub struct SelectedPalette(Vec<&'static PaletteEntry>);

impl SelectedPalette {
    pub fn new(entries: Vec<&'static PaletteEntry>) -> Result<Self> {
        if entries.is_empty() || entries.len() > 3 {
            return Err(AuraError::ContractViolation {
                message: format!(
                    "palette selection must hold 1-3 entries, got {}",
                    entries.len()
                ),
            });
        }
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.name == entry.name) {
                return Err(AuraError::ContractViolation {
                    message: format!("duplicate palette entry: {}", entry.name),
                });
            }
        }
        Ok(Self(entries))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false // the constructor rejects empty selections
    }

    pub fn primary(&self) -> &'static PaletteEntry {
        self.0[0]
    }

    /// Second entry, or the primary again for single-entry selections.
    pub fn secondary(&self) -> &'static PaletteEntry {
        self.0.get(1).copied().unwrap_or(self.0[0])
    }

    pub fn last(&self) -> &'static PaletteEntry {
        self.0[self.0.len() - 1]
    }

    pub fn get(&self, index: usize) -> Option<&'static PaletteEntry> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static PaletteEntry> + '_ {
        self.0.iter().copied()
    }
}

/// Result of analyzing one photo. Immutable after creation; owned by the
/// caller.
#[derive(Debug, Clone, Serialize)]
pub struct AuraAnalysis {
    pub selection: SelectedPalette,
    pub reading: String,
    pub timestamp: DateTime<Utc>,
}

impl AuraAnalysis {
    pub fn new(selection: SelectedPalette, reading: String) -> Result<Self> {
        if reading.trim().is_empty() {
            return Err(AuraError::ContractViolation {
                message: "aura reading must not be empty".to_string(),
            });
        }
        Ok(Self {
            selection,
            reading,
            timestamp: Utc::now(),
        })
    }
}

/// A source photo: the raw encoded bytes plus the decoded pixel buffer.
/// `image` is `None` when decoding failed; the raw bytes still seed the
/// fallback mapper in that case.
#[derive(Debug, Clone)]
pub struct Photo {
    pub bytes: Vec<u8>,
    pub image: Option<RgbaImage>,
}

/// Output of the transform stage, handed to the load stage.
#[derive(Debug, Clone)]
pub struct AuraResult {
    pub photo: Photo,
    pub analysis: AuraAnalysis,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::palette::CHAKRA_PALETTE;

    #[test]
    fn test_selection_rejects_empty_and_oversized() {
        assert!(SelectedPalette::new(vec![]).is_err());
        let four = vec![
            &CHAKRA_PALETTE[0],
            &CHAKRA_PALETTE[1],
            &CHAKRA_PALETTE[2],
            &CHAKRA_PALETTE[3],
        ];
        assert!(SelectedPalette::new(four).is_err());
    }

    #[test]
    fn test_selection_rejects_duplicates() {
        let dup = vec![&CHAKRA_PALETTE[2], &CHAKRA_PALETTE[2]];
        assert!(SelectedPalette::new(dup).is_err());
    }

    #[test]
    fn test_secondary_falls_back_to_primary() {
        let single = SelectedPalette::new(vec![&CHAKRA_PALETTE[4]]).unwrap();
        assert_eq!(single.secondary().name, "Blue");
        let dual =
            SelectedPalette::new(vec![&CHAKRA_PALETTE[4], &CHAKRA_PALETTE[6]]).unwrap();
        assert_eq!(dual.secondary().name, "Violet");
    }

    #[test]
    fn test_analysis_rejects_blank_reading() {
        let selection = SelectedPalette::new(vec![&CHAKRA_PALETTE[0]]).unwrap();
        assert!(AuraAnalysis::new(selection, "  ".to_string()).is_err());
    }
}
