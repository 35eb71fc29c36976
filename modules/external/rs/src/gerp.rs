//! GERP++ conservation scoring.

use crate::process;
use crate::Tool;
use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

define_tool!(
    /// `gerpcol`: per-column rejected substitution scores.
    Gerpcol => "gerpcol"
);

define_tool!(
    /// `gerpelem`: constrained elements from per-column scores.
    Gerpelem => "gerpelem"
);

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(path.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}

impl Gerpcol {
    /// Score every column of the alignment. Returns the path of the `<msa>.rates` file.
    pub fn score(&self, msa: &Path, tree: &Path) -> Result<PathBuf> {
        let mut command = self.command();
        command.arg("-t").arg(tree).arg("-f").arg(msa);
        process::run(command)?;

        let rates = with_suffix(msa, ".rates");
        ensure!(rates.is_file(), "gerpcol didn't produce {}", rates.display());
        Ok(rates)
    }
}

impl Gerpelem {
    /// Call constrained elements. Returns the path of the `<rates>.elems` file.
    pub fn elements(&self, rates: &Path, depth_threshold: Option<f64>) -> Result<PathBuf> {
        let mut command = self.command();
        command.arg("-f").arg(rates);
        if let Some(depth) = depth_threshold {
            command.arg("-d").arg(depth.to_string());
        }
        process::run(command)?;

        let elements = with_suffix(rates, ".elems");
        ensure!(
            elements.is_file(),
            "gerpelem didn't produce {}",
            elements.display()
        );
        Ok(elements)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Getters, Dissolve)]
pub struct Output {
    rates: PathBuf,
    elements: PathBuf,
}

/// Run `gerpcol` followed by `gerpelem` on a multiple sequence alignment.
pub fn run(
    msa: &Path,
    tree: &Path,
    depth_threshold: Option<f64>,
    exe_dir: Option<PathBuf>,
) -> Result<Output> {
    if let Some(depth) = depth_threshold {
        ensure!(
            depth.is_finite() && depth >= 0.0,
            "GERP depth threshold must be a non-negative number, got {depth}"
        );
    }

    log::info!("Computing GERP scores for {}", msa.display());
    let rates = Gerpcol::new(exe_dir.clone()).score(msa, tree)?;
    let elements = Gerpelem::new(exe_dir).elements(&rates, depth_threshold)?;
    Ok(Output { rates, elements })
}
