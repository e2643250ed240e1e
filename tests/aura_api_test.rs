// Library-level checks of the analysis chain, independent of the engine.

use aura_lens::core::extract::{extract_dominant_colors, BUCKET_WIDTH};
use aura_lens::core::mapper::{select_palette, select_palette_from_seed};
use aura_lens::core::overlay::composite_overlay;
use aura_lens::core::reading::synthesize_reading;
use image::{Rgba, RgbaImage};

fn noisy_region(pixels: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(pixels * 4);
    for i in 0..pixels {
        // Deterministic pseudo-noise, enough to spread across buckets.
        let v = (i as u32).wrapping_mul(2654435761);
        out.extend_from_slice(&[(v >> 8) as u8, (v >> 16) as u8, (v >> 24) as u8, 255]);
    }
    out
}

#[test]
fn test_extracted_channels_are_bucket_multiples() {
    let samples = extract_dominant_colors(&noisy_region(4000)).unwrap();
    assert!(!samples.is_empty() && samples.len() <= 5);
    for s in &samples {
        assert_eq!(s.r % BUCKET_WIDTH, 0);
        assert_eq!(s.g % BUCKET_WIDTH, 0);
        assert_eq!(s.b % BUCKET_WIDTH, 0);
        assert!(s.count >= 1);
    }
}

#[test]
fn test_extraction_is_pure() {
    let region = noisy_region(2500);
    let first = extract_dominant_colors(&region).unwrap();
    let second = extract_dominant_colors(&region).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_full_chain_from_pixels_to_overlay() {
    let region = noisy_region(3000);
    let samples = extract_dominant_colors(&region).unwrap();
    let selection = select_palette(&samples).unwrap();
    assert!(selection.len() == 2 || selection.len() == 3);

    let reading = synthesize_reading(&selection);
    assert!(!reading.is_empty());
    assert!(!reading.contains('{'));

    let photo = RgbaImage::from_pixel(80, 60, Rgba([90, 80, 70, 255]));
    let canvas = composite_overlay(&photo, &selection).unwrap();
    assert_eq!(canvas.dimensions(), photo.dimensions());
}

#[test]
fn test_seed_path_and_pixel_path_are_independent() {
    // The two mapper paths both produce valid selections from the same
    // underlying photo bytes.
    let bytes = noisy_region(1000);
    let seeded = select_palette_from_seed(&bytes).unwrap();
    assert_eq!(seeded.len(), 2);

    let samples = extract_dominant_colors(&bytes).unwrap();
    let extracted = select_palette(&samples).unwrap();
    assert!(extracted.len() == 2 || extracted.len() == 3);
}
