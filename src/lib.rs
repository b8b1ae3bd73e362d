mod color;
mod decoder;
mod header;

pub use crate::decoder::{FileImageDecoder, ImageDecoder};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Decode(#[from] image::ImageError),
    #[error("failed to write header: {0}")]
    Io(#[from] std::io::Error),
}

/// Decodes `file` and writes it to `out_file` as a C header holding the
/// image dimensions and its RGB565A8 pixel bytes. Any existing file at
/// `out_file` is overwritten.
pub fn convert(file: &Path, out_file: &Path) -> Result<(), ConvertError> {
    let img = FileImageDecoder.decode(file)?;
    info!("Opened image {}", file.display());

    let mut out = BufWriter::new(File::create(out_file)?);
    header::write_header(&mut out, &img)?;
    out.flush()?;
    info!("Header written. Done");
    Ok(())
}
