use compara_mafproc_rs::genomes;
use compara_mafproc_rs::process::write_dataflow;
use compara_mafproc_rs::to_fasta::maf_to_fasta;
use compara_mafproc_rs::{process_cactus_maf, Filter};
use eyre::Result;
use std::fs;
use std::path::PathBuf;

fn resource(name: &str) -> PathBuf {
    PathBuf::from(env!("COMPARA_RESOURCES")).join("maf").join(name)
}

#[test]
fn test_process_cactus_maf() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("processed.maf");

    let stats = process_cactus_maf(&resource("cactus.maf"), &output, &Filter::new(2, 4, 3), Some(4))?;
    assert_eq!(*stats.block_count_before_processing(), 4);
    assert_eq!(*stats.block_count_after_processing(), 2);
    assert_eq!(*stats.seq_count_after_processing(), 5);

    let expected = "\
##maf version=1 scoring=none

a score=0.0
s genomeA.chr1 13 4 + 100 CGTT
s genomeB.chr1 20 3 + 100 CG-T
s genomeC.chr2 30 3 - 50 CGT-

a score=2.0
s genomeA.chr1 60 6 + 100 ACGTAC
s genomeC.chr2 10 6 + 50 ACGTAC

";
    assert_eq!(fs::read_to_string(&output)?, expected);

    let dataflow = dir.path().join("dataflow.json");
    write_dataflow(&dataflow, &output, &stats)?;
    assert_eq!(
        fs::read_to_string(&dataflow)?,
        format!(
            "2 {{\"maf_file\":\"{}\",\"maf_block_count\":2,\"maf_seq_count\":5}}\n",
            output.display()
        )
    );
    Ok(())
}

#[test]
fn test_process_cactus_maf_default_filter() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("processed.maf");

    // Every fixture block is narrower than 20 columns
    let stats = process_cactus_maf(&resource("cactus.maf"), &output, &Filter::default(), None)?;
    assert_eq!(*stats.block_count_before_processing(), 4);
    assert_eq!(*stats.block_count_after_processing(), 0);
    assert_eq!(fs::read_to_string(&output)?, "##maf version=1 scoring=none\n\n");
    Ok(())
}

#[test]
fn test_process_cactus_maf_unexpected_block_count() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("processed.maf");

    let result = process_cactus_maf(&resource("cactus.maf"), &output, &Filter::default(), Some(5));
    let error = result.err().ok_or_else(|| eyre::eyre!("expected a failure"))?;
    assert!(format!("{error:?}").contains("does not match expected block count (5)"));
    assert!(!output.exists());
    assert_eq!(fs::read_dir(dir.path())?.count(), 0);
    Ok(())
}

#[test]
fn test_process_cactus_maf_malformed_input() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("input.maf");
    let output = dir.path().join("processed.maf");
    fs::write(
        &input,
        "a score=0\ns genomeA.chr1 0 4 + 100 ACGT\n\na\ns genomeA.chr1 0 4 + 100 ACGT\ns genomeB.chr1 0 3 + 100 ACG\n",
    )?;

    assert!(process_cactus_maf(&input, &output, &Filter::new(1, 1, 1), None).is_err());
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_maf_to_fasta() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let outdir = dir.path().join("gabs");
    let genomes = genomes::read_list(resource("gab_genomes.txt"))?;

    assert_eq!(maf_to_fasta(&resource("gabs.maf"), &outdir, Some(genomes.as_slice()))?, 2);

    assert_eq!(
        fs::read_to_string(outdir.join("0.fa"))?,
        ">genomeA.1:chr1:11:14\nAC-GT\n>genomeB.1:chr2:41:45\nACTGT\n"
    );
    assert_eq!(
        fs::read_to_string(outdir.join("0.json"))?,
        concat!(
            r#"[{"genome_name":"genomeA.1","dnafrag_name":"chr1","dnafrag_start":11,"dnafrag_end":14,"dnafrag_strand":1},"#,
            r#"{"genome_name":"genomeB.1","dnafrag_name":"chr2","dnafrag_start":41,"dnafrag_end":45,"dnafrag_strand":-1}]"#
        )
    );
    assert_eq!(
        fs::read_to_string(outdir.join("1.fa"))?,
        ">genomeA.1:chr1:21:23\nACG-\n>genomeB.1:chr3:1:3\nA-CG\n"
    );
    Ok(())
}

#[test]
fn test_maf_to_fasta_needs_matching_genomes() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let wrong = genomes::read_list(resource("wrong_genomes.txt"))?;
    assert!(maf_to_fasta(&resource("gabs.maf"), &dir.path().join("wrong"), Some(wrong.as_slice())).is_err());
    assert!(maf_to_fasta(&resource("gabs.maf"), &dir.path().join("none"), None).is_err());
    Ok(())
}
