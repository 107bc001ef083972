//! Search profile lookup for the CLI
//!
//! An explicit `--profile` path wins. Otherwise ~/.config/waiverwire/profile.toml
//! is used when present, and the built-in profile when it is not.

use anyhow::{bail, Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use waiverwire::{SearchOptions, SearchProfile};

const CONFIG_DIR: &str = "waiverwire";
const PROFILE_FILE: &str = "profile.toml";

/// Where the active profile came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    Explicit(PathBuf),
    ConfigDir(PathBuf),
    BuiltIn,
}

impl fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileSource::Explicit(path) | ProfileSource::ConfigDir(path) => {
                write!(f, "{}", path.display())
            }
            ProfileSource::BuiltIn => write!(f, "built-in"),
        }
    }
}

/// Get the default profile path
pub fn default_profile_path() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join(CONFIG_DIR);
    Ok(dir.join(PROFILE_FILE))
}

/// Resolve the active profile
pub fn resolve(explicit: Option<&Path>) -> Result<(SearchProfile, ProfileSource)> {
    let fallback = default_profile_path().ok();
    resolve_from(explicit, fallback.as_deref())
}

fn resolve_from(
    explicit: Option<&Path>,
    fallback: Option<&Path>,
) -> Result<(SearchProfile, ProfileSource)> {
    if let Some(path) = explicit {
        let profile = SearchProfile::load(path)?;
        return Ok((profile, ProfileSource::Explicit(path.to_path_buf())));
    }

    match fallback {
        Some(path) if path.exists() => {
            let profile = SearchProfile::load(path)?;
            Ok((profile, ProfileSource::ConfigDir(path.to_path_buf())))
        }
        _ => Ok((SearchProfile::default(), ProfileSource::BuiltIn)),
    }
}

/// Command-line adjustments layered over the resolved profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub model: Option<String>,
    pub no_search: bool,
}

impl Overrides {
    pub fn apply(&self, mut profile: SearchProfile) -> SearchProfile {
        if let Some(model) = &self.model {
            profile = profile.with_model(model.as_str());
        }
        if self.no_search {
            profile = profile.with_search(SearchOptions::disabled());
        }
        profile
    }
}

/// Write the profile as TOML, refusing to clobber an existing file unless forced
pub fn write(profile: &SearchProfile, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{:?} already exists (use --force to overwrite)", path);
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;
    }

    let content = profile.to_toml().context("Failed to serialize profile")?;
    fs::write(path, content).with_context(|| format!("Failed to write profile to {:?}", path))?;

    Ok(())
}
