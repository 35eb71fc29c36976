use super::config::Config;
use eyre::Result;
use noodles::bgzf;
use std::io::Read;

pub enum Stream<R: Read> {
    Raw(R),
    Gzip(flate2::read::MultiGzDecoder<R>),
    Bgzf(bgzf::io::Reader<R>),
}

impl<R: Read> Stream<R> {
    pub fn new(inner: R, config: &Config) -> Result<Self> {
        let stream = match config {
            Config::Uncompressed => Stream::Raw(inner),
            Config::Gzip => Stream::Gzip(flate2::read::MultiGzDecoder::new(inner)),
            Config::Bgzf => Stream::Bgzf(bgzf::io::Reader::new(inner)),
        };
        Ok(stream)
    }
}

impl<R: Read> Read for Stream<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Stream::Raw(r) => r.read(buf),
            Stream::Gzip(r) => r.read(buf),
            Stream::Bgzf(r) => r.read(buf),
        }
    }
}
