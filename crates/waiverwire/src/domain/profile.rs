//! Search Profile
//!
//! Everything that distinguishes one digest variant from another: the prompt
//! template, the model and the Live Search options. A profile can be loaded
//! from TOML; fields the file leaves out keep their built-in defaults.

use std::fs;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Placeholder replaced with the NFL season year when the prompt is rendered
pub const SEASON_PLACEHOLDER: &str = "{season}";

const DEFAULT_MODEL: &str = "grok-4-fast";
const DEFAULT_MAX_SEARCH_RESULTS: u32 = 20;

const DEFAULT_PROMPT: &str = r#"Search X and the web thoroughly for the best fantasy football waiver wire
pickups for the coming week of the {season} NFL season.

Focus your X search on:
- Fantasy experts and analysts (e.g., @FantasyPros, @TheFFExperts, @YahooFantasy,
  @ScottBarrettDFB, @JJZachariason)
- Recent tweets from beat reporters about player usage, injuries, and opportunities
- Fantasy community discussion about sleepers and breakout candidates
- Injury news that creates opportunities for backup players

Also search the web for:
- Latest waiver wire articles from FantasyPros, ESPN, Yahoo, The Athletic, CBS Sports
- Player news, snap counts, and target share from last week
- Upcoming matchups and defensive rankings

Provide me with TOP 5 PICKUPS FOR EACH POSITION:
- 5 QBs
- 5 RBs
- 5 WRs
- 5 TEs
- 5 Kickers (K)
- 5 Defenses (D/ST)

For each player include:
- Ownership percentage (if available)
- Why they're valuable (injury replacement, favorable schedule, usage trending up, etc.)
- Next 2-3 weeks outlook

At the end, tell me which ONE player should be my #1 waiver priority overall.

Format your response for a PLAIN TEXT EMAIL - do not use markdown symbols like ###, **, or -.
Instead use:
- ALL CAPS for section headers
- Blank lines between sections
- Simple dashes or numbers for lists

Prioritize players available in most leagues (under 50% rostered)."#;

/// Live Search mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Always search
    On,
    /// Let the model decide
    Auto,
    Off,
}

/// Where Live Search may retrieve documents from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    X,
    Web,
    News,
}

/// Live Search options sent as `search_parameters`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// When false, no `search_parameters` are sent at all
    pub enabled: bool,
    pub mode: SearchMode,
    pub sources: Vec<SourceKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_search_results: Option<u32>,
    pub return_citations: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: SearchMode::On,
            sources: vec![SourceKind::X, SourceKind::Web, SourceKind::News],
            max_search_results: Some(DEFAULT_MAX_SEARCH_RESULTS),
            return_citations: true,
        }
    }
}

impl SearchOptions {
    /// Options that leave `search_parameters` out of the request
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Prompt, model and search settings for one digest variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchProfile {
    pub prompt: String,
    pub model: String,
    pub temperature: f32,
    pub search: SearchOptions,
}

impl Default for SearchProfile {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
            search: SearchOptions::default(),
        }
    }
}

impl SearchProfile {
    /// Override the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the Live Search options
    pub fn with_search(mut self, search: SearchOptions) -> Self {
        self.search = search;
        self
    }

    /// Parse a profile from TOML text
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let profile: SearchProfile = toml::from_str(content).map_err(|e| ConfigError::Profile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        profile.validate(path)?;
        Ok(profile)
    }

    /// Load a profile from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Profile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Serialize the profile as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Render the prompt for the given day
    pub fn render_prompt(&self, today: NaiveDate) -> String {
        self.prompt
            .replace(SEASON_PLACEHOLDER, &season_year(today).to_string())
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let fail = |message: &str| ConfigError::Profile {
            path: path.to_path_buf(),
            message: message.to_string(),
        };

        if self.prompt.trim().is_empty() {
            return Err(fail("prompt must not be empty"));
        }
        if self.model.trim().is_empty() {
            return Err(fail("model must not be empty"));
        }
        if self.search.enabled && self.search.sources.is_empty() {
            return Err(fail("search.sources must name at least one source"));
        }
        if self.search.max_search_results == Some(0) {
            return Err(fail("search.max_search_results must be positive"));
        }
        Ok(())
    }
}

/// NFL season a date belongs to. The season runs from September through the
/// February Super Bowl, so January and February count toward the previous year.
pub fn season_year(date: NaiveDate) -> i32 {
    if date.month() <= 2 {
        date.year() - 1
    } else {
        date.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_season_year() {
        assert_eq!(season_year(date(2024, 10, 15)), 2024);
        assert_eq!(season_year(date(2025, 1, 5)), 2024);
        assert_eq!(season_year(date(2025, 2, 28)), 2024);
        assert_eq!(season_year(date(2025, 3, 1)), 2025);
    }

    #[test]
    fn test_render_prompt_substitutes_season() {
        let profile = SearchProfile::default();
        let prompt = profile.render_prompt(date(2024, 11, 4));

        assert!(prompt.contains("the 2024 NFL season"));
        assert!(!prompt.contains(SEASON_PLACEHOLDER));
    }

    #[test]
    fn test_render_prompt_without_placeholder_is_verbatim() {
        let profile = SearchProfile {
            prompt: "Top 5 kickers this week".to_string(),
            ..SearchProfile::default()
        };
        assert_eq!(
            profile.render_prompt(date(2024, 11, 4)),
            "Top 5 kickers this week"
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml = r#"
model = "grok-3"

[search]
max_search_results = 10
"#;
        let profile = SearchProfile::from_toml_str(toml, Path::new("profile.toml")).unwrap();

        assert_eq!(profile.model, "grok-3");
        assert_eq!(profile.prompt, DEFAULT_PROMPT);
        assert_eq!(profile.temperature, 0.0);
        assert_eq!(profile.search.max_search_results, Some(10));
        assert_eq!(profile.search.mode, SearchMode::On);
        assert_eq!(
            profile.search.sources,
            vec![SourceKind::X, SourceKind::Web, SourceKind::News]
        );
        assert!(profile.search.return_citations);
    }

    #[test]
    fn test_toml_can_disable_search() {
        let toml = r#"
[search]
enabled = false
"#;
        let profile = SearchProfile::from_toml_str(toml, Path::new("p.toml")).unwrap();
        assert!(!profile.search.enabled);
    }

    #[test]
    fn test_toml_rejects_unknown_source() {
        let toml = r#"
[search]
sources = ["x", "reddit"]
"#;
        let err = SearchProfile::from_toml_str(toml, Path::new("p.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Profile { .. }));
    }

    #[test]
    fn test_toml_rejects_empty_model() {
        let err = SearchProfile::from_toml_str("model = \"  \"", Path::new("p.toml")).unwrap_err();
        assert!(err.to_string().contains("model must not be empty"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "prompt = \"Best D/ST streamers for {{season}}\"").unwrap();

        let profile = SearchProfile::load(file.path()).unwrap();
        assert_eq!(
            profile.render_prompt(date(2025, 9, 10)),
            "Best D/ST streamers for 2025"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = SearchProfile::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Profile { path: p, .. } if p == path));
    }

    #[test]
    fn test_default_profile_round_trips_through_toml() {
        let profile = SearchProfile::default();
        let text = profile.to_toml().unwrap();
        let parsed = SearchProfile::from_toml_str(&text, Path::new("p.toml")).unwrap();
        assert_eq!(parsed, profile);
    }
}
