use crate::core::{
    extract::extract_dominant_colors,
    mapper::{select_palette, select_palette_from_seed},
    overlay::{composite_overlay, encode_jpeg},
    reading::synthesize_reading,
};
use crate::domain::model::{AuraAnalysis, AuraResult, Photo, SelectedPalette};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{AuraError, Result};
use image::imageops;
use image::RgbaImage;

pub const AURA_IMAGE_FILE: &str = "aura.jpg";
pub const READING_FILE: &str = "reading.txt";
pub const ANALYSIS_FILE: &str = "analysis.json";

/// Runs one photo through analysis and rendering: read + decode, extract
/// dominant colors from the face region, map them onto the chakra catalog,
/// synthesize the reading, then composite and write the aura image.
pub struct SnapshotPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SnapshotPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Centered square region of side min(w, h)/3, where the subject's face
    /// is assumed to be.
    fn center_region(image: &RgbaImage) -> Result<RgbaImage> {
        let (width, height) = image.dimensions();
        let side = width.min(height) / 3;
        if side == 0 {
            return Err(AuraError::PixelData {
                message: format!("image too small to sample: {width}x{height}"),
            });
        }

        let x = width / 2 - side / 2;
        let y = height / 2 - side / 2;
        Ok(imageops::crop_imm(image, x, y, side, side).to_image())
    }

    fn select_from_pixels(&self, photo: &Photo) -> Result<SelectedPalette> {
        let image = photo.image.as_ref().ok_or_else(|| AuraError::PixelData {
            message: "photo has no decoded pixel data".to_string(),
        })?;

        let region = Self::center_region(image)?;
        let samples = extract_dominant_colors(region.as_raw())?;
        tracing::debug!(buckets = samples.len(), "extracted dominant colors");
        select_palette(&samples)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SnapshotPipeline<S, C> {
    async fn extract(&self) -> Result<Photo> {
        let bytes = self.storage.read_file(self.config.input_path()).await?;
        tracing::debug!(size = bytes.len(), "read photo bytes");

        let image = match image::load_from_memory(&bytes) {
            Ok(decoded) => Some(decoded.to_rgba8()),
            Err(e) => {
                tracing::warn!("photo decode failed, analysis will use the seed fallback: {e}");
                None
            }
        };

        Ok(Photo { bytes, image })
    }

    async fn transform(&self, photo: Photo) -> Result<AuraResult> {
        let selection = match self.select_from_pixels(&photo) {
            Ok(selection) => selection,
            Err(e) if e.is_decode() => {
                tracing::warn!("falling back to seed-based palette selection: {e}");
                select_palette_from_seed(&photo.bytes)?
            }
            Err(e) => return Err(e),
        };

        let names: Vec<&str> = selection.iter().map(|e| e.name).collect();
        tracing::info!(colors = ?names, "selected aura palette");

        let reading = synthesize_reading(&selection);
        let analysis = AuraAnalysis::new(selection, reading)?;

        Ok(AuraResult { photo, analysis })
    }

    async fn load(&self, result: AuraResult) -> Result<String> {
        // Textual outputs first: they are valid even when the photo never
        // decoded and the overlay below cannot run.
        self.storage
            .write_file(READING_FILE, result.analysis.reading.as_bytes())
            .await?;
        let record = serde_json::to_vec_pretty(&result.analysis)?;
        self.storage.write_file(ANALYSIS_FILE, &record).await?;

        let image = result
            .photo
            .image
            .as_ref()
            .ok_or_else(|| AuraError::PixelData {
                message: "cannot render an aura overlay without decoded pixels".to_string(),
            })?;

        let canvas = composite_overlay(image, &result.analysis.selection)?;
        let jpeg = encode_jpeg(&canvas, self.config.jpeg_quality())?;
        self.storage.write_file(AURA_IMAGE_FILE, &jpeg).await?;

        Ok(format!(
            "{}/{}",
            self.config.output_path().trim_end_matches('/'),
            AURA_IMAGE_FILE
        ))
    }
}
