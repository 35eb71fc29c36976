use compara_cli::execute;
use eyre::Result;
use std::fs;
use std::path::PathBuf;

fn resource(name: &str) -> PathBuf {
    PathBuf::from(env!("COMPARA_RESOURCES")).join("maf").join(name)
}

#[test]
fn test_help_and_version() {
    assert_eq!(execute(["compara", "--help"]), 0);
    assert_eq!(execute(["compara", "--version"]), 0);
    assert_eq!(execute(["compara", "cigar", "--help"]), 0);
}

#[test]
fn test_usage_errors() {
    assert_eq!(execute(["compara"]), 1);
    assert_eq!(execute(["compara", "no-such-command"]), 1);
    assert_eq!(execute(["compara", "cigar", "seq-coord", "M4D3M2"]), 1);
    assert_eq!(
        execute([
            "compara",
            "hal-liftover",
            "aln.hal",
            "genomeA",
            "genomeB",
            "out.json",
            "--src-region",
            "chr1:16-18:1",
            "--src-region-tsv",
            "regions.tsv",
        ]),
        1
    );
}

#[test]
fn test_cigar() {
    assert_eq!(execute(["compara", "cigar", "from-seq", "ATGC---CG"]), 0);
    assert_eq!(execute(["compara", "cigar", "seq-coord", "M4D3M2", "5"]), 0);
    assert_eq!(execute(["compara", "cigar", "seq-coord", "M4D3M2", "0"]), 1);
    assert_eq!(execute(["compara", "cigar", "seq-coord", "M4D3M2", "30"]), 1);
    assert_eq!(execute(["compara", "cigar", "seq-coord", "4M", "1"]), 1);
}

#[test]
fn test_process_cactus_maf() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("out.maf");
    let dataflow = dir.path().join("dataflow.json");

    let input = resource("cactus.maf");
    let code = execute([
        "compara".into(),
        "process-cactus-maf".into(),
        input.clone().into_os_string(),
        output.clone().into_os_string(),
        "--min-block-cols".into(),
        "4".into(),
        "--min-seq-length".into(),
        "3".into(),
        "--dataflow-file".into(),
        dataflow.clone().into_os_string(),
    ]);
    assert_eq!(code, 0);
    assert!(fs::read_to_string(&output)?.contains("a score=2.0"));
    assert!(fs::read_to_string(&dataflow)?.starts_with("2 {\"maf_file\":"));

    // Mismatching block count fails without output
    let rejected = dir.path().join("rejected.maf");
    let code = execute([
        "compara".into(),
        "process-cactus-maf".into(),
        input.into_os_string(),
        rejected.clone().into_os_string(),
        "--expected-block-count".into(),
        "3".into(),
    ]);
    assert_eq!(code, 1);
    assert!(!rejected.exists());
    Ok(())
}

#[test]
fn test_maf_to_fasta() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let outdir = dir.path().join("gabs");

    let code = execute([
        "compara".into(),
        "maf-to-fasta".into(),
        resource("gabs.maf").into_os_string(),
        outdir.clone().into_os_string(),
        "--genomes-file".into(),
        resource("gab_genomes.txt").into_os_string(),
    ]);
    assert_eq!(code, 0);
    assert!(outdir.join("0.fa").is_file());
    assert!(outdir.join("1.json").is_file());

    let code = execute([
        "compara".into(),
        "maf-to-fasta".into(),
        resource("gabs.maf").into_os_string(),
        dir.path().join("unparsed").into_os_string(),
    ]);
    assert_eq!(code, 1);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_make_source_bed() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir()?;
    let stats = dir.path().join("halStats");
    fs::write(&stats, "#!/bin/sh\nprintf 'chr1\\t33\\n'\n")?;
    fs::set_permissions(&stats, fs::Permissions::from_mode(0o755))?;

    let bed = dir.path().join("src.bed");
    let code = execute([
        "compara".into(),
        "make-source-bed".into(),
        dir.path().join("aln.hal").into_os_string(),
        "genomeA".into(),
        "chr1".into(),
        bed.clone().into_os_string(),
        "--start".into(),
        "10".into(),
        "--strand".into(),
        "-".into(),
        "--exe-dir".into(),
        dir.path().as_os_str().to_owned(),
    ]);
    assert_eq!(code, 0);
    assert_eq!(fs::read_to_string(&bed)?, "chr1\t10\t33\t.\t0\t-\n");
    Ok(())
}
