use anyhow::{Context, Result, bail};
use content_embed_config::Config;
use content_embed_engine::{KeywordBlock, Registry, VideoBlock};
use std::path::{Path, PathBuf};

fn expanded(path: &Path) -> PathBuf {
    Config::expand_path(path).unwrap_or_else(|| path.to_path_buf())
}

/// Load config from an explicit path, or from the default location.
///
/// A missing default file means defaults; a missing explicit file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            let path = expanded(path);
            match Config::load_from_path(&path)? {
                Some(config) => Ok(config),
                None => bail!("Config file '{}' does not exist", path.display()),
            }
        }
        None => match Config::load()? {
            Some(config) => {
                log::debug!("Loaded config from {}", Config::config_path().display());
                Ok(config)
            }
            None => {
                log::info!(
                    "No config at {}, using defaults",
                    Config::config_path().display()
                );
                Ok(Config::default())
            }
        },
    }
}

/// Write the default config to the explicit path or the default location.
///
/// Never overwrites an existing file.
pub fn init_config(explicit: Option<&Path>) -> Result<PathBuf> {
    let config = Config::default();
    let path = match explicit {
        Some(path) => expanded(path),
        None => Config::config_path(),
    };
    if path.exists() {
        bail!("Config file '{}' already exists", path.display());
    }

    match explicit {
        Some(_) => config.save_to_path(&path)?,
        None => config.save()?,
    }
    log::info!("Wrote default config to {}", path.display());
    Ok(path)
}

/// Build the block registry: configured keyword blocks in file order, then `video`.
pub fn build_registry(config: &Config) -> Result<Registry> {
    let mut registry = Registry::new();
    for block in &config.blocks {
        let definition =
            KeywordBlock::new(&block.kind, &block.aliases, &block.property, &block.label)
                .accepting(&block.accepted);
        registry
            .register(definition)
            .with_context(|| format!("Invalid block '{}' in config", block.kind))?;
    }
    if config.video_embeds {
        registry
            .register(VideoBlock::new())
            .context("Failed to register the video block")?;
    }
    log::info!("Registered block kinds: {registry:?}");
    Ok(registry)
}
