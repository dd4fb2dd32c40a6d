//! Configuration loading for Caesar

mod schema;

pub use schema::{Config, DecodeStrategy};

use crate::error::ConfigError;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".caesarrc.json";

/// Find and load config file with extends resolution. Searches current directory then parents.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if !path.exists() {
            return Err(ConfigError::NotFound(path).into());
        }
        Some(path)
    } else {
        find_config_in_parents(work_dir)
    };

    let config = match path {
        Some(path) => {
            let config = load_config_with_extends(&path, &mut HashSet::new())?;
            config
                .validate()
                .with_context(|| format!("Invalid config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => Config::default(),
    };
    Ok(config)
}

/// Load a config file and resolve extends chain
fn load_config_with_extends(config_path: &Path, visited: &mut HashSet<PathBuf>) -> Result<Config> {
    let canonical = config_path
        .canonicalize()
        .unwrap_or_else(|_| config_path.to_path_buf());
    if !visited.insert(canonical) {
        return Err(ConfigError::CircularExtends(config_path.to_path_buf()).into());
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let mut config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in config: {}", config_path.display()))?;

    if let Some(extends) = config.extends.take() {
        let base_config = resolve_extends(config_path, &extends, visited)?;
        config.merge_from(base_config);
    }

    Ok(config)
}

/// Resolve an extends reference relative to the config that names it
fn resolve_extends(
    config_path: &Path,
    extends: &str,
    visited: &mut HashSet<PathBuf>,
) -> Result<Config> {
    let config_dir = config_path.parent().unwrap_or(Path::new("."));
    let extends_path = config_dir.join(extends);

    let extends_path = if extends_path.extension().is_none() {
        extends_path.with_extension("json")
    } else {
        extends_path
    };

    if !extends_path.exists() {
        return Err(ConfigError::NotFound(extends_path)).with_context(|| {
            format!("Extended config referenced from {}", config_path.display())
        });
    }

    load_config_with_extends(&extends_path, visited)
}

/// Search for .caesarrc.json in directory and its parents
fn find_config_in_parents(start_dir: &Path) -> Option<PathBuf> {
    let mut dir = start_dir;
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::ScoringProfile;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(path: &Path, content: &str) {
        let mut file = fs::File::create(path).unwrap();
        writeln!(file, "{}", content).unwrap();
    }

    #[test]
    fn test_no_config_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.min_frequency_letters(), 5);
    }

    #[test]
    fn test_config_found_in_parent() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir.path().join(CONFIG_FILENAME),
            r#"{ "minFrequencyLetters": 9 }"#,
        );
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config(&nested, None).unwrap();
        assert_eq!(config.min_frequency_letters(), 9);
    }

    #[test]
    fn test_config_extends() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir.path().join("base.json"),
            r#"{
                "scoring": "extended",
                "anchorLetter": "T",
                "extraWords": ["cipher"]
            }"#,
        );
        write_file(
            &dir.path().join(CONFIG_FILENAME),
            r#"{
                "extends": "./base",
                "anchorLetter": "A",
                "extraWords": ["shift"]
            }"#,
        );

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.scoring(), ScoringProfile::Extended);
        assert_eq!(config.anchor(), 'A');
        assert_eq!(
            config.extra_words,
            vec!["cipher".to_string(), "shift".to_string()]
        );
    }

    #[test]
    fn test_circular_extends_rejected() {
        let dir = TempDir::new().unwrap();
        write_file(&dir.path().join("a.json"), r#"{ "extends": "b.json" }"#);
        write_file(&dir.path().join("b.json"), r#"{ "extends": "a.json" }"#);

        let err = load_config(dir.path(), Some(Path::new("a.json"))).unwrap_err();
        assert!(err.to_string().contains("Circular extends"));
    }

    #[test]
    fn test_missing_custom_config_is_error() {
        let dir = TempDir::new().unwrap();
        let err = load_config(dir.path(), Some(Path::new("missing.json"))).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_invalid_values_rejected_on_load() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir.path().join(CONFIG_FILENAME),
            r#"{ "anchorLetter": "XY" }"#,
        );
        let err = load_config(dir.path(), None).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid anchorLetter"));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let dir = TempDir::new().unwrap();
        write_file(&dir.path().join(CONFIG_FILENAME), "{ not json");
        let err = load_config(dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON"));
    }
}
