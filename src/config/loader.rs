//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{PayrollError, PayrollResult};

use super::types::{ColorMode, Config};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "payroll.toml";

pub const ENV_DATA_FILE: &str = "PAYROLL_DATA_FILE";
pub const ENV_COLOR: &str = "PAYROLL_COLOR";

/// Non-fatal configuration warning (unknown key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Outcome of resolving the config hierarchy
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from, `None` when only defaults/env applied
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PayrollResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PayrollError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let (section, key) = match path_str.rsplit_once('.') {
                Some((section, key)) => (Some(section), key),
                None => (None, path_str.as_str()),
            };
            ConfigWarning {
                line: key_line(&content, key),
                suggestion: suggest_key(section, key),
                file: path.to_path_buf(),
                key: key.to_string(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve project config, then user config, then defaults; env applied last.
///
/// A config file that fails to parse is reported and skipped.
pub fn load_or_default(project_root: Option<&Path>) -> LoadedConfig {
    let user_config = dirs::config_dir().map(|dir| dir.join("payroll").join("config.toml"));
    load_from_candidates(project_root, user_config.as_deref(), |key| {
        std::env::var(key).ok()
    })
}

pub(crate) fn load_from_candidates(
    project_root: Option<&Path>,
    user_config: Option<&Path>,
    get_env: impl Fn(&str) -> Option<String>,
) -> LoadedConfig {
    let project_config = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));
    let candidates = project_config.as_deref().into_iter().chain(user_config);

    let mut loaded = LoadedConfig::default();
    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(candidate) {
            Ok((config, warnings)) => {
                debug!(file = %candidate.display(), "loaded config");
                loaded = LoadedConfig {
                    config,
                    source: Some(candidate.to_path_buf()),
                    warnings,
                };
                break;
            }
            Err(e) => warn!("{e}; ignoring this config file"),
        }
    }

    loaded.config = with_env_overrides(loaded.config, get_env);
    loaded
}

/// Apply environment variable overrides (PAYROLL_* prefix)
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(path) = get_env(ENV_DATA_FILE).filter(|p| !p.trim().is_empty()) {
        config.storage.data_file = PathBuf::from(path);
    }

    if let Some(value) = get_env(ENV_COLOR) {
        match ColorMode::parse(&value) {
            Some(mode) => config.output.color = mode,
            None => warn!(
                "Invalid {ENV_COLOR} value '{value}'. Valid values: auto, always, never"
            ),
        }
    }

    config
}

/// Line (1-based) where `key` is assigned or opened as a `[key]` table.
fn key_line(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim();
            let header = line.strip_prefix('[').and_then(|l| l.strip_suffix(']'));
            let assigned = line.split_once('=').map(|(lhs, _)| lhs.trim());
            header.map(str::trim) == Some(key) || assigned == Some(key)
        })
        .map(|i| i + 1)
}

/// Known key of the same table that `unknown` is one typo away from.
fn suggest_key(section: Option<&str>, unknown: &str) -> Option<String> {
    let known: &[&str] = match section {
        None => &["storage", "output"],
        Some("storage") => &["data_file"],
        Some("output") => &["color"],
        Some(_) => &[],
    };
    let wanted: Vec<char> = unknown.to_ascii_lowercase().replace('-', "_").chars().collect();

    known
        .iter()
        .find(|candidate| one_edit_apart(&wanted, &candidate.chars().collect::<Vec<_>>()))
        .map(|candidate| candidate.to_string())
}

// One insertion, deletion, substitution or adjacent swap (or none).
fn one_edit_apart(a: &[char], b: &[char]) -> bool {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if long.len() - short.len() > 1 {
        return false;
    }

    let same = short.iter().zip(long).take_while(|(x, y)| x == y).count();
    if same == short.len() {
        return true;
    }
    if short.len() < long.len() {
        return short[same..] == long[same + 1..];
    }

    let substituted = short[same + 1..] == long[same + 1..];
    let swapped = same + 1 < short.len()
        && short[same] == long[same + 1]
        && short[same + 1] == long[same]
        && short[same + 2..] == long[same + 2..];
    substituted || swapped
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}
