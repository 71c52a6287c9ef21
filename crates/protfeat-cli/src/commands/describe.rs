use crate::cli::DescribeArgs;
use crate::error::{CliError, Result};
use protfeat::core::models::features::FeatureRow;
use protfeat::engine::assembler::RowAssembler;
use protfeat::engine::config::FeatureConfigBuilder;
use std::io::Write;
use tracing::info;

const QUERY_ID: &str = "query";

pub fn run(args: DescribeArgs) -> Result<()> {
    let row = describe(&args)?;
    let mut stdout = std::io::stdout().lock();
    write_row(&row, &mut stdout)?;
    Ok(())
}

fn describe(args: &DescribeArgs) -> Result<FeatureRow> {
    let mut builder = FeatureConfigBuilder::new();
    if let Some(ph) = args.ph {
        builder = builder.charge_ph(ph);
    }
    if !args.motifs.is_empty() {
        builder = builder.motifs(args.motifs.clone());
    }
    let features = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let sequence = args.sequence.trim();
    if sequence.is_empty() {
        return Err(CliError::Argument("sequence is empty".to_string()));
    }
    info!(length = sequence.len(), "Describing sequence");

    let assembler = RowAssembler::new(&features)?;
    Ok(assembler.describe(QUERY_ID, sequence)?)
}

fn write_row(row: &FeatureRow, out: &mut impl Write) -> std::io::Result<()> {
    for (name, value) in row.iter() {
        writeln!(out, "{}\t{}", name, value)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use protfeat::core::models::features::FeatureValue;

    fn args(sequence: &str, motifs: &[&str]) -> DescribeArgs {
        DescribeArgs {
            sequence: sequence.to_string(),
            ph: None,
            motifs: motifs.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn describe_computes_all_hand_crafted_descriptors() {
        let row = describe(&args("MKRAGKKLMRRQK", &[])).unwrap();
        assert_eq!(row.len(), 57);
        assert_eq!(row.get("Motif_KR"), Some(&FeatureValue::Int(1)));
        assert!(!row.contains_key("Label"));
        assert!(!row.contains_key("Protein_ID"));
    }

    #[test]
    fn custom_motifs_replace_the_defaults() {
        let row = describe(&args("MKRAG", &["AG"])).unwrap();
        assert_eq!(row.get("Motif_AG"), Some(&FeatureValue::Int(1)));
        assert!(!row.contains_key("Motif_KR"));
    }

    #[test]
    fn output_is_one_tab_separated_line_per_feature() {
        let row = describe(&args("KK", &["KK"])).unwrap();
        let mut buffer = Vec::new();
        write_row(&row, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), row.len());
        assert!(text.starts_with("AAC_A\t0.0\n"));
        assert!(text.ends_with("Motif_KK\t1\n"));
    }

    #[test]
    fn blank_sequence_is_an_argument_error() {
        let result = describe(&args("   ", &[]));
        assert!(matches!(result, Err(CliError::Argument(_))));
    }
}
