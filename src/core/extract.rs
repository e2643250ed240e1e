use crate::domain::model::RgbSample;
use crate::utils::error::{AuraError, Result};
use std::collections::HashMap;

/// Channel quantization step. Every returned sample has r, g and b floored
/// to a multiple of this.
pub const BUCKET_WIDTH: u8 = 32;

/// Only every Nth pixel is sampled, which bounds cost on large photos
/// without changing which buckets dominate.
pub const PIXEL_STRIDE: usize = 10;

/// At most this many ranked samples are returned.
pub const MAX_DOMINANT: usize = 5;

fn quantize(value: u8) -> u8 {
    (value / BUCKET_WIDTH) * BUCKET_WIDTH
}

/// Reduces a raw RGBA pixel region to its most frequent quantized colors,
/// most frequent first. The caller is expected to pass a square-ish region
/// centered on the subject (the pipeline crops the photo center first).
///
/// Ties are broken by scan order: the bucket encountered first wins. The
/// sort below is stable, so keeping buckets in first-seen order is enough.
pub fn extract_dominant_colors(rgba: &[u8]) -> Result<Vec<RgbSample>> {
    if rgba.is_empty() {
        return Err(AuraError::PixelData {
            message: "empty pixel region".to_string(),
        });
    }
    if rgba.len() % 4 != 0 {
        return Err(AuraError::PixelData {
            message: format!("RGBA buffer length {} is not a multiple of 4", rgba.len()),
        });
    }

    let mut index: HashMap<(u8, u8, u8), usize> = HashMap::new();
    let mut buckets: Vec<RgbSample> = Vec::new();

    for px in rgba.chunks_exact(4).step_by(PIXEL_STRIDE) {
        let key = (quantize(px[0]), quantize(px[1]), quantize(px[2]));
        match index.get(&key) {
            Some(&i) => buckets[i].count += 1,
            None => {
                index.insert(key, buckets.len());
                buckets.push(RgbSample {
                    r: key.0,
                    g: key.1,
                    b: key.2,
                    count: 1,
                });
            }
        }
    }

    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets.truncate(MAX_DOMINANT);
    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(r: u8, g: u8, b: u8, pixels: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            out.extend_from_slice(&[r, g, b, 255]);
        }
        out
    }

    #[test]
    fn test_quantize_floors_to_bucket() {
        assert_eq!(quantize(0), 0);
        assert_eq!(quantize(31), 0);
        assert_eq!(quantize(32), 32);
        assert_eq!(quantize(255), 224);
    }

    #[test]
    fn test_ranked_by_frequency() {
        // Segment lengths are multiples of the stride so sampled counts keep
        // the same ordering as pixel counts.
        let mut data = solid(200, 10, 10, 100);
        data.extend(solid(10, 200, 10, 50));
        data.extend(solid(10, 10, 200, 20));

        let samples = extract_dominant_colors(&data).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!((samples[0].r, samples[0].g, samples[0].b), (192, 0, 0));
        assert_eq!((samples[1].r, samples[1].g, samples[1].b), (0, 192, 0));
        assert_eq!((samples[2].r, samples[2].g, samples[2].b), (0, 0, 192));
        assert!(samples[0].count > samples[1].count);
    }

    #[test]
    fn test_tie_broken_by_scan_order() {
        let mut data = solid(200, 10, 10, 30);
        data.extend(solid(10, 200, 10, 30));
        let samples = extract_dominant_colors(&data).unwrap();
        assert_eq!(samples[0].count, samples[1].count);
        assert_eq!((samples[0].r, samples[0].g, samples[0].b), (192, 0, 0));
    }

    #[test]
    fn test_empty_region_is_decode_kind() {
        let err = extract_dominant_colors(&[]).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_misaligned_buffer_is_decode_kind() {
        let err = extract_dominant_colors(&[1, 2, 3]).unwrap_err();
        assert!(err.is_decode());
    }
}
