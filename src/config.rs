use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::front_matter::RuleSpec;
use crate::linter::Severity;

pub const DEFAULT_HATNOTE_CATEGORY: &str = "Category:Hatnote templates";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Category whose member templates are treated as hatnotes.
    pub hatnote_category: String,
    /// Query the repository for hatnote templates when building the rules.
    pub discover_hatnotes: bool,
    /// Site snapshot used for redirect and category lookups. Relative paths
    /// are resolved against the config file's directory.
    pub site: Option<PathBuf>,
    /// Extra rules, checked after the built-in ones.
    pub rules: Vec<RuleSpec>,
    /// Severity of out-of-order reports.
    pub severity: Severity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hatnote_category: DEFAULT_HATNOTE_CATEGORY.to_string(),
            discover_hatnotes: true,
            site: None,
            rules: Vec::new(),
            severity: Severity::default(),
        }
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn hatnote_category(mut self, category: impl Into<String>) -> Self {
        self.config.hatnote_category = category.into();
        self
    }

    pub fn discover_hatnotes(mut self, discover: bool) -> Self {
        self.config.discover_hatnotes = discover;
        self
    }

    pub fn site(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.site = Some(path.into());
        self
    }

    pub fn rule(mut self, rule: RuleSpec) -> Self {
        self.config.rules.push(rule);
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.config.severity = severity;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".wikilint.toml", "wikilint.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    let mut config = toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })?;

    if let Some(site) = &config.site
        && site.is_relative()
        && let Some(dir) = path.parent()
    {
        config.site = Some(dir.join(site));
    }

    Ok(config)
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn user_config_path() -> Option<PathBuf> {
    let dir = match env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) => PathBuf::from(xdg),
        None => dirs::config_dir()?,
    };
    let p = dir.join("wikilint").join("config.toml");
    p.is_file().then_some(p)
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .wikilint.toml, wikilint.toml
/// 3) user config: $XDG_CONFIG_HOME/wikilint/config.toml or the platform
///    config directory
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir)
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    if let Some(p) = user_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
