use clap::Args;
use compara_external_rs::gerp;
use eyre::Result;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct GerpArgs {
    /// Multiple sequence alignment file.
    #[arg(long, value_name = "PATH")]
    msa_file: PathBuf,

    /// Phylogenetic tree of the aligned sequences in Newick format.
    #[arg(long, value_name = "PATH")]
    tree_file: PathBuf,

    /// Depth threshold passed to gerpelem.
    #[arg(long, value_name = "FLOAT")]
    depth_threshold: Option<f64>,

    /// Directory with the gerpcol and gerpelem executables. By default they're looked up in PATH.
    #[arg(long, value_name = "PATH")]
    gerp_exe_dir: Option<PathBuf>,
}

impl GerpArgs {
    pub fn run(&self) -> Result<()> {
        let output = gerp::run(
            &self.msa_file,
            &self.tree_file,
            self.depth_threshold,
            self.gerp_exe_dir.clone(),
        )?;
        log::info!(
            "GERP scores: {}, constrained elements: {}",
            output.rates().display(),
            output.elements().display()
        );
        Ok(())
    }
}
