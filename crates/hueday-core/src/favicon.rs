//! Solid-color favicon rendering.

use crate::color::HexColor;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Edge length of the generated icon, in pixels.
pub const FAVICON_SIZE: u32 = 64;

#[derive(Debug, Error)]
pub enum FaviconError {
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// A rendered square icon.
#[derive(Debug, Clone)]
pub struct Favicon {
    pub color: HexColor,
    pub size: u32,
    /// Raw RGBA pixels, row-major.
    pub rgba: Vec<u8>,
    /// PNG-encoded pixels.
    pub png: Vec<u8>,
}

impl Favicon {
    /// Render a [`FAVICON_SIZE`] square filled with `color`.
    pub fn render(color: HexColor) -> Result<Self, FaviconError> {
        Self::render_sized(color, FAVICON_SIZE)
    }

    pub fn render_sized(color: HexColor, size: u32) -> Result<Self, FaviconError> {
        let rgba = rasterize(color, size);
        let png = encode_png(&rgba, size, size)?;
        Ok(Self { color, size, rgba, png })
    }

    /// `data:image/png;base64,...` URI for the PNG.
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}

/// Solid `size` x `size` RGBA raster.
pub fn rasterize(color: HexColor, size: u32) -> Vec<u8> {
    let pixel = color.to_rgba();
    let count = (size * size) as usize;
    let mut rgba = Vec::with_capacity(count * 4);
    for _ in 0..count {
        rgba.extend_from_slice(&pixel);
    }
    rgba
}

/// Encode RGBA pixel data to PNG bytes.
pub fn encode_png(rgba_data: &[u8], width: u32, height: u32) -> Result<Vec<u8>, FaviconError> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .map_err(|e| FaviconError::Encode(format!("header: {:?}", e)))?;
        writer
            .write_image_data(rgba_data)
            .map_err(|e| FaviconError::Encode(format!("data: {:?}", e)))?;
    }
    Ok(png_data)
}

/// Installs an icon for the current color somewhere visible.
///
/// Best effort: implementations swallow their own failures.
pub trait FaviconPainter {
    fn paint(&mut self, color: &HexColor);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(png_bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
        let decoder = png::Decoder::new(png_bytes);
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn test_rasterize_fills_every_pixel() {
        let color = HexColor::new(10, 20, 30);
        let rgba = rasterize(color, 4);
        assert_eq!(rgba.len(), 4 * 4 * 4);
        assert!(rgba.chunks(4).all(|px| px == [10, 20, 30, 255]));
    }

    #[test]
    fn test_render_png_round_trip() {
        let color = HexColor::parse("#ff7f50").unwrap();
        let icon = Favicon::render(color).unwrap();
        assert_eq!(icon.size, 64);

        let (info, pixels) = decode(&icon.png);
        assert_eq!((info.width, info.height), (64, 64));
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert!(pixels.chunks(4).all(|px| px == [0xff, 0x7f, 0x50, 0xff]));
    }

    #[test]
    fn test_data_uri() {
        let icon = Favicon::render(HexColor::BLACK).unwrap();
        let uri = icon.data_uri();
        let encoded = uri.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), icon.png);
    }

    #[test]
    fn test_encode_rejects_short_buffer() {
        assert!(matches!(encode_png(&[0, 0, 0], 2, 2), Err(FaviconError::Encode(_))));
    }
}
