use crate::app::cli::Cli;
use crate::app::models::CollectOptions;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default)]
struct PresetConfig {
    includes: Option<Vec<String>>,
    include_extensions: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    recursive: Option<bool>,
    output: Option<PathBuf>,
}

fn presets_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home
        .join(".config")
        .join("collect_includes")
        .join("presets.toml"))
}

fn load_presets_file(path: &Path) -> Result<HashMap<String, PresetConfig>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let content =
        fs::read_to_string(path).context(format!("Failed to read config at {:?}", path))?;

    let parsed: PresetsFile = toml::from_str(&content).context("Failed to parse presets.toml")?;

    Ok(parsed.presets)
}

/// Preset items first, then CLI items, deduplicated keeping first occurrence.
/// `None` only when neither side said anything.
fn merge_vecs(
    preset_vec: Option<Vec<String>>,
    cli_vec: Option<Vec<String>>,
) -> Option<Vec<String>> {
    if preset_vec.is_none() && cli_vec.is_none() {
        return None;
    }

    let mut combined = preset_vec.unwrap_or_default();
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    let mut seen = std::collections::HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    Some(combined)
}

pub fn resolve_config(cli: Cli) -> Result<CollectOptions> {
    let presets = load_presets_file(&presets_path()?)?;
    resolve_with_presets(cli, &presets)
}

fn resolve_with_presets(
    cli: Cli,
    presets: &HashMap<String, PresetConfig>,
) -> Result<CollectOptions> {
    // Preset to use: --preset > root directory name > none
    let root_name = fs::canonicalize(&cli.root)
        .ok()
        .and_then(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_owned));
    let preset_key = cli.preset.as_deref().or(root_name.as_deref());
    let preset = preset_key
        .and_then(|k| presets.get(k))
        .cloned()
        .unwrap_or_default();

    if let Some(name) = cli.preset.as_deref() {
        if !presets.contains_key(name) {
            log::warn!("Preset '{}' not found, using command-line options only", name);
        }
    }

    let cli_includes = (!cli.includes.is_empty()).then_some(cli.includes);
    let output = cli
        .output
        .or(preset.output)
        .filter(|p| !p.as_os_str().is_empty());

    Ok(CollectOptions {
        root: cli.root,
        includes: merge_vecs(preset.includes, cli_includes).unwrap_or_default(),
        output,
        verbose: cli.verbose,
        recursive: !cli.no_recursive && preset.recursive.unwrap_or(true),
        include_extensions: merge_vecs(preset.include_extensions, cli.include_extensions),
        exclude: merge_vecs(preset.exclude, cli.exclude),
    })
}
