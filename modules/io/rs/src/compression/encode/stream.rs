use super::config::Config;
use eyre::{OptionExt, Result};
use noodles::bgzf;
use std::io::Write;

pub enum Stream<W: Write> {
    Raw(W),
    Gzip(flate2::write::GzEncoder<W>),
    Bgzf(bgzf::io::Writer<W>),
}

impl<W: Write> Stream<W> {
    pub fn new(inner: W, config: &Config) -> Result<Self> {
        match config {
            Config::Uncompressed => Ok(Stream::Raw(inner)),
            Config::Gzip(params) => {
                let encoder = flate2::write::GzEncoder::new(
                    inner,
                    flate2::Compression::new(*params.level() as u32),
                );
                Ok(Stream::Gzip(encoder))
            }
            Config::Bgzf(params) => {
                let level = bgzf::io::writer::CompressionLevel::new(*params.deflate().level())
                    .ok_or_eyre("Invalid BGZF compression level")?;
                let writer = bgzf::io::writer::Builder::default()
                    .set_compression_level(level)
                    .build_from_writer(inner);
                Ok(Stream::Bgzf(writer))
            }
        }
    }

    /// Write the compression trailer (if any), flush everything and return the inner writer.
    pub fn finish(self) -> Result<W> {
        let mut inner = match self {
            Stream::Raw(writer) => writer,
            Stream::Gzip(encoder) => encoder.finish()?,
            Stream::Bgzf(writer) => writer.finish()?,
        };
        inner.flush()?;
        Ok(inner)
    }
}

impl<W: Write> Write for Stream<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Stream::Raw(w) => w.write(buf),
            Stream::Gzip(w) => w.write(buf),
            Stream::Bgzf(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Stream::Raw(w) => w.flush(),
            Stream::Gzip(w) => w.flush(),
            Stream::Bgzf(w) => w.flush(),
        }
    }
}
