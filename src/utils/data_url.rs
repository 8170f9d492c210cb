use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::RgbImage;

const BASE64_MARKER: &str = "base64,";

/// Decodes the payload of a browser data URL such as `data:image/png;base64,...`.
///
/// The payload starts after the first `base64,` marker, or after the first
/// comma when the marker is missing.
pub fn decode_data_url(data_url: &str) -> anyhow::Result<Vec<u8>> {
    let payload = match data_url.find(BASE64_MARKER) {
        Some(idx) => &data_url[idx + BASE64_MARKER.len()..],
        None => data_url
            .split_once(',')
            .map(|(_, payload)| payload)
            .ok_or_else(|| anyhow::anyhow!("not a data URL"))?,
    };

    Ok(STANDARD.decode(payload.trim())?)
}

pub fn decode_rgb_image(bytes: &[u8]) -> anyhow::Result<RgbImage> {
    Ok(image::load_from_memory(bytes)?.to_rgb8())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{ImageOutputFormat, Rgb};
    use std::io::Cursor;

    /// A tiny PNG wrapped in a data URL, as a browser canvas would send it.
    pub(crate) fn png_data_url() -> String {
        let img = RgbImage::from_pixel(4, 4, Rgb([200, 10, 10]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageOutputFormat::Png).unwrap();
        format!("data:image/png;base64,{}", STANDARD.encode(buf.into_inner()))
    }

    #[test]
    fn strips_the_data_url_header() {
        let bytes = decode_data_url("data:text/plain;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn falls_back_to_first_comma() {
        let bytes = decode_data_url("data:,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn rejects_strings_without_payload() {
        assert!(decode_data_url("aGVsbG8=").is_err());
    }

    #[test]
    fn rejects_malformed_base64() {
        assert!(decode_data_url("data:image/png;base64,@@not base64@@").is_err());
    }

    #[test]
    fn decodes_png_into_rgb() {
        let bytes = decode_data_url(&png_data_url()).unwrap();
        let img = decode_rgb_image(&bytes).unwrap();
        assert_eq!(img.dimensions(), (4, 4));
        assert_eq!(img.get_pixel(0, 0), &Rgb([200, 10, 10]));
    }

    #[test]
    fn garbage_bytes_are_not_an_image() {
        assert!(decode_rgb_image(b"definitely not a png").is_err());
    }
}
