use compara_io_rs::compression::encode;
use compara_io_rs::maf;
use eyre::{Result, WrapErr};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub type MafWriter<'a> = maf::Writer<encode::Stream<BufWriter<&'a mut File>>>;

/// Write a MAF file through a temporary file in the destination directory. The output appears
/// only once `write` succeeded and is left untouched otherwise. Compression follows the output
/// extension.
pub fn write_maf_atomically<T>(
    output: &Path,
    scoring: &str,
    write: impl FnOnce(&mut MafWriter) -> Result<T>,
) -> Result<T> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = tempfile::Builder::new()
        .prefix(".compara-")
        .suffix(".maf.tmp")
        .tempfile_in(dir)
        .wrap_err_with(|| format!("Failed to create a temporary file in {}", dir.display()))?;

    let config = encode::Config::infer_from_path(output);
    let result = {
        let stream = encode::Stream::new(BufWriter::new(temp.as_file_mut()), &config)?;
        let mut writer = maf::Writer::new(stream, scoring)?;
        let result = write(&mut writer)?;
        writer.finish()?;
        result
    };

    temp.persist(output)
        .wrap_err_with(|| format!("Failed to move the MAF file to {}", output.display()))?;
    Ok(result)
}
