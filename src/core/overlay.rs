use crate::domain::model::SelectedPalette;
use crate::utils::error::{AuraError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};
use std::f32::consts::PI;

/// Pixel-combination rule used when layering a gradient over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    Screen,
    Multiply,
    SourceOver,
}

impl BlendMode {
    /// Blend a single channel pair, both in 0..=1.
    fn blend(self, dst: f32, src: f32) -> f32 {
        match self {
            BlendMode::Screen => 1.0 - (1.0 - dst) * (1.0 - src),
            BlendMode::Multiply => dst * src,
            BlendMode::SourceOver => src,
        }
    }
}

/// One gradient color stop: offset within 0..=1, color and opacity.
#[derive(Debug, Clone, Copy)]
struct ColorStop {
    offset: f32,
    rgb: [u8; 3],
    alpha: f32,
}

impl ColorStop {
    fn new(offset: f32, rgb: [u8; 3], alpha_byte: u8) -> Self {
        Self {
            offset,
            rgb,
            alpha: alpha_byte as f32 / 255.0,
        }
    }

    /// Fully transparent stop; interpolates without pulling colors toward
    /// black thanks to the premultiplied lerp in `sample_stops`.
    fn transparent(offset: f32) -> Self {
        Self {
            offset,
            rgb: [0, 0, 0],
            alpha: 0.0,
        }
    }
}

/// Radial gradient spec. Radii are absolute pixels; callers derive them as
/// fractions of max(width, height) so the effect is resolution-independent.
#[derive(Debug, Clone)]
struct RadialGradient {
    cx: f32,
    cy: f32,
    inner: f32,
    outer: f32,
    stops: Vec<ColorStop>,
}

/// Interpolates the stop list at position `t` in 0..=1, in premultiplied
/// space (canvas gradient semantics). Returns non-premultiplied rgb in
/// 0..=1 plus alpha.
fn sample_stops(stops: &[ColorStop], t: f32) -> ([f32; 3], f32) {
    let first = &stops[0];
    if t <= first.offset {
        return (
            [
                first.rgb[0] as f32 / 255.0,
                first.rgb[1] as f32 / 255.0,
                first.rgb[2] as f32 / 255.0,
            ],
            first.alpha,
        );
    }

    for pair in stops.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            let f = if span > 0.0 { (t - a.offset) / span } else { 1.0 };

            let mut premul = [0.0f32; 3];
            for (i, channel) in premul.iter_mut().enumerate() {
                let ca = a.rgb[i] as f32 / 255.0 * a.alpha;
                let cb = b.rgb[i] as f32 / 255.0 * b.alpha;
                *channel = ca + (cb - ca) * f;
            }
            let alpha = a.alpha + (b.alpha - a.alpha) * f;
            if alpha <= 0.0 {
                return ([0.0; 3], 0.0);
            }
            return (premul.map(|c| c / alpha), alpha);
        }
    }

    let last = &stops[stops.len() - 1];
    (
        [
            last.rgb[0] as f32 / 255.0,
            last.rgb[1] as f32 / 255.0,
            last.rgb[2] as f32 / 255.0,
        ],
        last.alpha,
    )
}

/// Composites one radial gradient pass over the whole canvas. The canvas is
/// opaque, so the result stays opaque: out = (1-a)*dst + a*blend(dst, src).
fn fill_radial(canvas: &mut RgbaImage, gradient: &RadialGradient, mode: BlendMode) {
    let range = (gradient.outer - gradient.inner).max(f32::EPSILON);

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let dx = x as f32 - gradient.cx;
        let dy = y as f32 - gradient.cy;
        let distance = (dx * dx + dy * dy).sqrt();
        let t = ((distance - gradient.inner) / range).clamp(0.0, 1.0);

        let (src, alpha) = sample_stops(&gradient.stops, t);
        if alpha <= 0.0 {
            continue;
        }

        for i in 0..3 {
            let dst = pixel.0[i] as f32 / 255.0;
            let blended = mode.blend(dst, src[i]);
            let out = dst * (1.0 - alpha) + blended * alpha;
            pixel.0[i] = (out.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
    }
}

/// Ring colors cycle through the selection round-robin.
fn ring_color_index(ring: usize, selection_len: usize) -> usize {
    ring % selection_len
}

/// Number of concentric aura rings.
const RING_COUNT: usize = 5;

/// Draws the layered aura glow over a copy of the photo. The focal point
/// sits above the geometric center (head-and-shoulders framing) and every
/// radius is a fraction of max(width, height). Output dimensions always
/// equal input dimensions; on failure nothing is returned (no partial
/// canvas escapes).
pub fn composite_overlay(photo: &RgbaImage, selection: &SelectedPalette) -> Result<RgbaImage> {
    let (width, height) = photo.dimensions();
    if width == 0 || height == 0 {
        return Err(AuraError::PixelData {
            message: "cannot composite over a zero-sized image".to_string(),
        });
    }

    let w = width as f32;
    let h = height as f32;
    let cx = w / 2.0;
    let cy = h * 0.4;
    let max_radius = w.max(h) * 0.9;

    let mut canvas = photo.clone();
    let n = selection.len();

    // Layer 1: soft color wash, one offset radial per entry.
    for (i, entry) in selection.iter().enumerate() {
        let angle = (i as f32 / n as f32) * PI * 2.0;
        let offset_x = angle.cos() * (w * 0.2);
        let offset_y = angle.sin() * (h * 0.15);

        let wash = RadialGradient {
            cx: cx + offset_x,
            cy: cy + offset_y,
            inner: max_radius * 0.2,
            outer: max_radius,
            stops: vec![
                ColorStop::new(0.0, entry.rgb, 0x00),
                ColorStop::new(0.2, entry.rgb, 0x30),
                ColorStop::new(0.4, entry.rgb, 0x50),
                ColorStop::new(0.6, entry.rgb, 0x40),
                ColorStop::new(0.8, entry.rgb, 0x25),
                ColorStop::new(1.0, entry.rgb, 0x10),
            ],
        };
        fill_radial(&mut canvas, &wash, BlendMode::Screen);
    }

    // Layer 2: concentric rings, transparent at both edges, peaking at the
    // ring's own radius, entries cycled round-robin.
    for i in 0..RING_COUNT {
        let ring_radius = max_radius * (0.25 + i as f32 * 0.15);
        let entry = selection
            .get(ring_color_index(i, n))
            .unwrap_or_else(|| selection.primary());

        let ring = RadialGradient {
            cx,
            cy,
            inner: ring_radius - max_radius * 0.08,
            outer: ring_radius + max_radius * 0.08,
            stops: vec![
                ColorStop::new(0.0, entry.rgb, 0x00),
                ColorStop::new(0.3, entry.rgb, 0x35),
                ColorStop::new(0.5, entry.rgb, 0x55),
                ColorStop::new(0.7, entry.rgb, 0x35),
                ColorStop::new(1.0, entry.rgb, 0x00),
            ],
        };
        fill_radial(&mut canvas, &ring, BlendMode::Screen);
    }

    // Layer 3: bright rim toward the image edge, alternating the primary
    // and secondary entries.
    let primary = selection.primary().rgb;
    let secondary = selection.secondary().rgb;
    let edge = RadialGradient {
        cx,
        cy,
        inner: max_radius * 0.3,
        outer: max_radius * 1.1,
        stops: vec![
            ColorStop::transparent(0.0),
            ColorStop::new(0.4, primary, 0x20),
            ColorStop::new(0.6, secondary, 0x40),
            ColorStop::new(0.8, primary, 0x60),
            ColorStop::new(1.0, secondary, 0x80),
        ],
    };
    fill_radial(&mut canvas, &edge, BlendMode::Screen);

    // Layer 4a: crown glow at the top, colored by the last entry.
    let crown_color = selection.last().rgb;
    let crown = RadialGradient {
        cx,
        cy: h * 0.1,
        inner: 0.0,
        outer: max_radius * 0.6,
        stops: vec![
            ColorStop::new(0.0, crown_color, 0x50),
            ColorStop::new(0.3, crown_color, 0x35),
            ColorStop::new(0.6, crown_color, 0x15),
            ColorStop::new(1.0, crown_color, 0x00),
        ],
    };
    fill_radial(&mut canvas, &crown, BlendMode::Screen);

    // Layer 4b: side glows for depth.
    for (side_index, side) in [-1.0f32, 1.0].into_iter().enumerate() {
        let entry = selection
            .get(side_index % n)
            .unwrap_or_else(|| selection.primary());

        let side_glow = RadialGradient {
            cx: cx + side * w * 0.4,
            cy,
            inner: 0.0,
            outer: max_radius * 0.7,
            stops: vec![
                ColorStop::new(0.0, entry.rgb, 0x60),
                ColorStop::new(0.2, entry.rgb, 0x45),
                ColorStop::new(0.5, entry.rgb, 0x25),
                ColorStop::new(1.0, entry.rgb, 0x00),
            ],
        };
        fill_radial(&mut canvas, &side_glow, BlendMode::Screen);
    }

    // Layer 5: subtle darkening vignette.
    let vignette = RadialGradient {
        cx,
        cy,
        inner: max_radius * 0.4,
        outer: max_radius * 1.3,
        stops: vec![
            ColorStop::transparent(0.0),
            ColorStop {
                offset: 0.8,
                rgb: [0, 0, 0],
                alpha: 0.05,
            },
            ColorStop {
                offset: 1.0,
                rgb: [0, 0, 0],
                alpha: 0.15,
            },
        ],
    };
    fill_radial(&mut canvas, &vignette, BlendMode::Multiply);

    Ok(canvas)
}

/// Re-encodes the composited canvas as JPEG at the given quality factor.
pub fn encode_jpeg(canvas: &RgbaImage, quality: u8) -> Result<Vec<u8>> {
    let rgb = DynamicImage::ImageRgba8(canvas.clone()).to_rgb8();
    let mut out = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut out, quality);
    encoder.encode_image(&rgb)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::palette::CHAKRA_PALETTE;

    fn selection(indices: &[usize]) -> SelectedPalette {
        SelectedPalette::new(indices.iter().map(|&i| &CHAKRA_PALETTE[i]).collect()).unwrap()
    }

    #[test]
    fn test_ring_round_robin_order() {
        let order: Vec<usize> = (0..RING_COUNT).map(|i| ring_color_index(i, 3)).collect();
        assert_eq!(order, vec![0, 1, 2, 0, 1]);

        let dual: Vec<usize> = (0..RING_COUNT).map(|i| ring_color_index(i, 2)).collect();
        assert_eq!(dual, vec![0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_screen_lightens_multiply_darkens() {
        let dst = 0.5;
        assert!(BlendMode::Screen.blend(dst, 0.5) > dst);
        assert!(BlendMode::Multiply.blend(dst, 0.5) < dst);
        assert_eq!(BlendMode::SourceOver.blend(dst, 0.25), 0.25);
    }

    #[test]
    fn test_screen_on_black_passes_source_through() {
        let src = 0.7;
        assert!((BlendMode::Screen.blend(0.0, src) - src).abs() < 1e-6);
    }

    #[test]
    fn test_transparent_stop_does_not_darken_midpoint() {
        // Premultiplied interpolation: halfway between transparent and an
        // opaque color, the color must stay that color at half opacity.
        let stops = [
            ColorStop::transparent(0.0),
            ColorStop::new(1.0, [200, 100, 50], 0xff),
        ];
        let (rgb, alpha) = sample_stops(&stops, 0.5);
        assert!((alpha - 0.5).abs() < 1e-6);
        assert!((rgb[0] - 200.0 / 255.0).abs() < 1e-4);
        assert!((rgb[1] - 100.0 / 255.0).abs() < 1e-4);
    }

    #[test]
    fn test_stop_sampling_clamps_outside_range() {
        let stops = [
            ColorStop::new(0.2, [10, 10, 10], 0x40),
            ColorStop::new(0.8, [250, 250, 250], 0x80),
        ];
        let (_, below) = sample_stops(&stops, 0.0);
        let (_, above) = sample_stops(&stops, 1.0);
        assert!((below - 0x40 as f32 / 255.0).abs() < 1e-6);
        assert!((above - 0x80 as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_output_dimensions_match_input() {
        let photo = RgbaImage::from_pixel(64, 48, image::Rgba([120, 90, 60, 255]));
        let result = composite_overlay(&photo, &selection(&[0, 4])).unwrap();
        assert_eq!(result.dimensions(), (64, 48));
    }

    #[test]
    fn test_all_black_single_entry_still_glows() {
        let photo = RgbaImage::from_pixel(100, 100, image::Rgba([0, 0, 0, 255]));
        let result = composite_overlay(&photo, &selection(&[6])).unwrap();
        assert_eq!(result.dimensions(), (100, 100));

        // Screen blending over black must have added light somewhere.
        let lit = result.pixels().any(|p| p.0[0] > 0 || p.0[1] > 0 || p.0[2] > 0);
        assert!(lit, "overlay left an all-black canvas untouched");
    }

    #[test]
    fn test_zero_sized_image_is_decode_kind() {
        let photo = RgbaImage::new(0, 0);
        let err = composite_overlay(&photo, &selection(&[0])).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_source_pixels_never_replaced_wholesale() {
        // The overlay tints the photo; a mid-gray source must stay within
        // a plausible lit range, not jump to pure palette color.
        let photo = RgbaImage::from_pixel(40, 40, image::Rgba([128, 128, 128, 255]));
        let result = composite_overlay(&photo, &selection(&[0, 3, 5])).unwrap();
        for p in result.pixels() {
            assert!(p.0[0] >= 100, "screen blending should never darken below source");
        }
    }

    #[test]
    fn test_jpeg_encoding_round_trips_dimensions() {
        let photo = RgbaImage::from_pixel(32, 24, image::Rgba([10, 200, 30, 255]));
        let jpeg = encode_jpeg(&photo, 90).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(decoded.width(), 32);
        assert_eq!(decoded.height(), 24);
    }
}
