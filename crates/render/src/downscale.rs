//! Block-mean downscaling of raster frames.

use image::{ImageBuffer, Pixel};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DownscaleError {
    #[error("downscale factor must be at least 1")]
    ZeroFactor,
    #[error("{width}x{height} frame is not divisible by factor {factor}")]
    Indivisible { width: u32, height: u32, factor: u32 },
}

/// Downscaled frame with interleaved `f32` channels, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub channels: usize,
    pub data: Vec<f32>,
}

impl Frame {
    /// Value of channel `c` at `(x, y)`, `None` outside the frame.
    #[must_use]
    pub fn get(&self, x: u32, y: u32, c: usize) -> Option<f32> {
        if x >= self.width || y >= self.height || c >= self.channels {
            return None;
        }
        self.data
            .get((y as usize * self.width as usize + x as usize) * self.channels + c)
            .copied()
    }
}

/// Average every `factor`×`factor` block of `frame` into one pixel.
///
/// With `normalized` the averages are divided by 255 so 8-bit input maps onto
/// `[0, 1]`.
///
/// # Errors
///
/// Returns [`DownscaleError`] if `factor` is zero or does not divide both
/// frame dimensions.
#[allow(clippy::cast_precision_loss)]
pub fn downscale<P>(
    frame: &ImageBuffer<P, Vec<u8>>,
    factor: u32,
    normalized: bool,
) -> Result<Frame, DownscaleError>
where
    P: Pixel<Subpixel = u8>,
{
    if factor == 0 {
        return Err(DownscaleError::ZeroFactor);
    }
    let (width, height) = frame.dimensions();
    if width % factor != 0 || height % factor != 0 {
        return Err(DownscaleError::Indivisible { width, height, factor });
    }

    let channels = usize::from(P::CHANNEL_COUNT);
    let (out_width, out_height) = (width / factor, height / factor);
    let mut data = vec![0.0_f32; out_width as usize * out_height as usize * channels];

    for (x, y, pixel) in frame.enumerate_pixels() {
        let base = ((y / factor) as usize * out_width as usize + (x / factor) as usize) * channels;
        for (c, value) in pixel.channels().iter().enumerate() {
            data[base + c] += f32::from(*value);
        }
    }

    let block = (factor * factor) as f32;
    let divisor = if normalized { block * 255.0 } else { block };
    for value in &mut data {
        *value /= divisor;
    }

    Ok(Frame { width: out_width, height: out_height, channels, data })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn averages_blocks() {
        let img = GrayImage::from_fn(4, 2, |x, _| Luma([if x < 2 { 10 } else { 30 }]));
        let frame = downscale(&img, 2, false).unwrap();
        assert_eq!((frame.width, frame.height, frame.channels), (2, 1, 1));
        assert_eq!(frame.data, vec![10.0, 30.0]);
    }

    #[test]
    fn normalizes_rgb() {
        let img = RgbImage::from_pixel(2, 2, Rgb([255, 0, 51]));
        let frame = downscale(&img, 2, true).unwrap();
        assert_eq!(frame.channels, 3);
        assert_eq!(frame.get(0, 0, 0), Some(1.0));
        assert_eq!(frame.get(0, 0, 1), Some(0.0));
        assert!((frame.get(0, 0, 2).unwrap() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_lookups_are_none() {
        let img = GrayImage::from_fn(4, 4, |x, y| Luma([u8::try_from(x + 4 * y).unwrap()]));
        let frame = downscale(&img, 2, false).unwrap();
        assert_eq!(frame.get(1, 1, 0), Some(12.5));
        assert_eq!(frame.get(2, 0, 0), None);
        assert_eq!(frame.get(0, 2, 0), None);
        assert_eq!(frame.get(0, 0, 1), None);
    }

    #[test]
    fn rejects_bad_factors() {
        let img = GrayImage::new(6, 4);
        assert_eq!(downscale(&img, 0, false).unwrap_err(), DownscaleError::ZeroFactor);
        assert_eq!(
            downscale(&img, 4, false).unwrap_err(),
            DownscaleError::Indivisible { width: 6, height: 4, factor: 4 }
        );
        assert!(downscale(&img, 2, false).is_ok());
    }
}
