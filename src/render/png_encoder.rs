//! PNG output using the `png` crate.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::RenderError;
use crate::render::Framebuffer;

/// Write a framebuffer to a PNG file, attaching `(keyword, text)` pairs as text chunks.
pub(crate) fn write_png(
    fb: &Framebuffer,
    path: &Path,
    text: &[(&str, String)],
) -> Result<(), RenderError> {
    let file = File::create(path)?;
    encode(fb, BufWriter::new(file), text)
}

fn encode<W: Write>(fb: &Framebuffer, out: W, text: &[(&str, String)]) -> Result<(), RenderError> {
    let mut encoder = png::Encoder::new(out, fb.width(), fb.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    for (keyword, value) in text {
        // tEXt only carries Latin-1; anything else goes out as UTF-8 iTXt
        if is_latin1(value) {
            encoder.add_text_chunk((*keyword).to_string(), value.clone())?;
        } else {
            encoder.add_itxt_chunk((*keyword).to_string(), value.clone())?;
        }
    }

    let mut writer = encoder.write_header()?;
    writer.write_image_data(fb.pixels())?;
    writer.finish()?;
    Ok(())
}

fn is_latin1(text: &str) -> bool {
    text.chars().all(|c| u32::from(c) <= 0xFF)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Rgba;

    fn to_png_bytes(fb: &Framebuffer, text: &[(&str, String)]) -> Vec<u8> {
        let mut buffer = Vec::new();
        encode(fb, &mut buffer, text).unwrap();
        buffer
    }

    #[test]
    fn png_bytes_have_magic_header() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::BLACK);

        let bytes = to_png_bytes(&fb, &[]);
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn text_chunks_are_readable() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.clear(Rgba::WHITE);
        let bytes = to_png_bytes(&fb, &[("Title", "Plot 1A".to_string())]);

        let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
        let reader = decoder.read_info().unwrap();
        let chunks = &reader.info().uncompressed_latin1_text;
        assert!(
            chunks
                .iter()
                .any(|c| c.keyword == "Title" && c.text == "Plot 1A")
        );
    }

    #[test]
    fn non_latin1_text_goes_to_itxt() {
        let fb = Framebuffer::new(4, 4).unwrap();
        let bytes = to_png_bytes(
            &fb,
            &[
                ("Title", "Plot 1\u{3b1}".to_string()),
                ("XLabel", "X-axis \u{e9}".to_string()),
            ],
        );

        let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert!(
            info.utf8_text
                .iter()
                .any(|c| c.keyword == "Title" && c.get_text().unwrap() == "Plot 1\u{3b1}")
        );
        assert!(
            info.uncompressed_latin1_text
                .iter()
                .any(|c| c.keyword == "XLabel" && c.text == "X-axis \u{e9}")
        );
    }

    #[test]
    fn latin1_detection() {
        assert!(is_latin1("Data for 2B"));
        assert!(is_latin1("caf\u{e9}"));
        assert!(!is_latin1("\u{3b1}"));
    }

    #[test]
    fn write_png_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let fb = Framebuffer::new(3, 2).unwrap();
        write_png(&fb, &path, &[]).unwrap();

        let decoder = png::Decoder::new(File::open(&path).unwrap());
        let reader = decoder.read_info().unwrap();
        assert_eq!(reader.info().width, 3);
        assert_eq!(reader.info().height, 2);
    }
}
