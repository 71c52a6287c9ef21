use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileEmbeddingsConfig};
use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use protfeat::core::descriptors::DescriptorKind;
use protfeat::engine::config as core_config;
use std::str::FromStr;
use tracing::debug;

/// Merges built-in defaults, the optional TOML file and the command line into a core
/// extraction config. Later sources win: defaults < file < `--set` < dedicated flags.
pub fn build_config(args: &ExtractArgs) -> Result<core_config::ExtractionConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match &args.config {
        Some(config_path) => FileConfig::from_file(config_path)?,
        None => FileConfig::default(),
    };
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let descriptors = match file_config.descriptors.take().and_then(|d| d.enabled) {
        Some(names) => parse_descriptors(&names)?,
        None => defaults.descriptors,
    };

    let charge_ph = args
        .ph
        .or(file_config.charge.take().and_then(|c| c.ph))
        .unwrap_or(defaults.ph);

    let motifs = if !args.motifs.is_empty() {
        args.motifs.clone()
    } else {
        file_config
            .motifs
            .take()
            .and_then(|m| m.patterns)
            .unwrap_or(defaults.motifs)
    };

    let embeddings_file = file_config.embeddings.take().unwrap_or_default();
    let embeddings_enabled = match (
        args.embeddings.with_embeddings,
        args.embeddings.no_embeddings,
    ) {
        (true, false) => true,
        (false, true) => false,
        _ => embeddings_file
            .enabled
            .unwrap_or(defaults.embeddings_enabled),
    };

    let mut features = core_config::FeatureConfigBuilder::new()
        .descriptors(descriptors)
        .charge_ph(charge_ph)
        .motifs(motifs);
    if embeddings_enabled {
        let embedding_config = core_config::EmbeddingConfig {
            model_id: args
                .model
                .clone()
                .or(embeddings_file.model)
                .unwrap_or(defaults.model),
            revision: embeddings_file.revision.unwrap_or(defaults.revision),
            cpu: args.cpu || embeddings_file.cpu.unwrap_or(defaults.cpu),
        };
        features = features.embeddings(embedding_config);
    }
    let features = features
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;
    debug!("Resolved feature configuration: {:?}", features);

    core_config::ExtractionConfigBuilder::new()
        .input_path(args.input.clone())
        .output_path(args.output.clone())
        .features(features)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn parse_descriptors(names: &[String]) -> Result<Vec<DescriptorKind>> {
    names
        .iter()
        .map(|name| DescriptorKind::from_str(name).map_err(CliError::Config))
        .collect()
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

fn embeddings(config: &mut FileConfig) -> &mut FileEmbeddingsConfig {
    config.embeddings.get_or_insert_with(Default::default)
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "charge.ph" => {
                config.charge.get_or_insert_with(Default::default).ph =
                    Some(parse_value(key, value_str, "float")?);
            }
            "embeddings.enabled" => {
                embeddings(&mut config).enabled = Some(parse_value(key, value_str, "boolean")?);
            }
            "embeddings.model" => {
                embeddings(&mut config).model = Some(value_str.to_string());
            }
            "embeddings.revision" => {
                embeddings(&mut config).revision = Some(value_str.to_string());
            }
            "embeddings.cpu" => {
                embeddings(&mut config).cpu = Some(parse_value(key, value_str, "boolean")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
