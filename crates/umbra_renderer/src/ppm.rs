//! Plain-text PPM (P3) image output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::color::unpack_rgb;
use crate::PixelBuffer;

/// Write `buffer` as an ASCII PPM: header, then one `R G B` line per pixel
/// in row-major order starting at the top-left.
pub fn write_ppm<W: Write>(writer: &mut W, buffer: &PixelBuffer) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
    writeln!(writer, "255")?;

    for &pixel in buffer.pixels() {
        let [r, g, b] = unpack_rgb(pixel);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    Ok(())
}

/// Save `buffer` to a PPM file, replacing any existing file.
pub fn save_ppm(path: impl AsRef<Path>, buffer: &PixelBuffer) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(&mut writer, buffer)?;
    writer.flush()
}
