use crate::color::pack_rgb565a8;
use image::RgbaImage;
use std::io::{self, Write};

/// Serializes the pixel grid as a C header: include guard, size constants,
/// then the RGB565A8 bytes with one line per image row.
pub fn write_header<W: Write>(out: &mut W, img: &RgbaImage) -> io::Result<()> {
    writeln!(out, "#ifndef IMAGE_H")?;
    writeln!(out, "#define IMAGE_H")?;
    writeln!(out)?;
    writeln!(out, "#include <stdint.h>")?;
    writeln!(out)?;
    writeln!(out, "static const uint32_t image_width = {};", img.width())?;
    writeln!(out, "static const uint32_t image_height = {};", img.height())?;
    writeln!(out, "static const uint8_t image_data[] = {{")?;
    for row in img.rows() {
        let line = row
            .flat_map(pack_rgb565a8)
            .map(|byte| format!("0x{:02X},", byte))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{line}")?;
    }
    writeln!(out, "}};")?;
    writeln!(out)?;
    writeln!(out, "#endif // IMAGE_H")?;
    Ok(())
}
