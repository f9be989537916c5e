// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use varscope_filter::DEFAULT_EXPRESSION;

const CONFIG_VERSION: i64 = 1;
const DEFAULT_HOST_BASE_URL: &str = "http://127.0.0.1:7700";
const MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub host: Host,
    #[serde(default)]
    pub view: View,
    #[serde(default)]
    pub refresh: Refresh,
    #[serde(default)]
    pub filter: Filter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            host: Host::default(),
            view: View::default(),
            refresh: Refresh::default(),
            filter: Filter::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Host {
    pub base_url: Option<String>,
    pub timeout: Option<String>,
}

impl Default for Host {
    fn default() -> Self {
        Self {
            base_url: Some(DEFAULT_HOST_BASE_URL.to_owned()),
            timeout: Some("5s".to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct View {
    pub compact: Option<bool>,
    pub truncate: Option<bool>,
}

impl Default for View {
    fn default() -> Self {
        Self {
            compact: Some(false),
            truncate: Some(true),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Refresh {
    pub auto: Option<bool>,
    pub interval: Option<String>,
}

impl Default for Refresh {
    fn default() -> Self {
        Self {
            auto: Some(true),
            interval: Some("2s".to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Filter {
    pub expression: Option<String>,
    pub exclude_private: Option<bool>,
    pub exclude_uppercase: Option<bool>,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            expression: None,
            exclude_private: Some(true),
            exclude_uppercase: Some(true),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("VARSCOPE_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set VARSCOPE_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join("varscope");
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [host], [view], [refresh], and [filter]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.version != CONFIG_VERSION {
            bail!(
                "config {} has version {}; expected 1",
                path.display(),
                self.version
            );
        }

        if let Some(base_url) = &self.host.base_url {
            let parsed = url::Url::parse(base_url).with_context(|| {
                format!("host.base_url in {} is not a valid URL", path.display())
            })?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                bail!(
                    "host.base_url in {} must be http or https, got {:?}",
                    path.display(),
                    parsed.scheme()
                );
            }
        }

        if let Some(timeout) = &self.host.timeout {
            let parsed = parse_duration(timeout)?;
            if parsed <= Duration::ZERO {
                bail!(
                    "host.timeout in {} must be positive, got {}",
                    path.display(),
                    timeout
                );
            }
        }

        if let Some(interval) = &self.refresh.interval {
            let parsed = parse_duration(interval)?;
            if parsed < MIN_REFRESH_INTERVAL {
                bail!(
                    "refresh.interval in {} must be at least 100ms, got {}",
                    path.display(),
                    interval
                );
            }
        }

        Ok(())
    }

    pub fn host_base_url(&self) -> &str {
        self.host
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_HOST_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn host_timeout(&self) -> Result<Duration> {
        parse_duration(self.host.timeout.as_deref().unwrap_or("5s"))
    }

    pub fn compact(&self) -> bool {
        self.view.compact.unwrap_or(false)
    }

    pub fn truncate(&self) -> bool {
        self.view.truncate.unwrap_or(true)
    }

    pub fn auto_refresh(&self) -> bool {
        self.refresh.auto.unwrap_or(true)
    }

    pub fn refresh_interval(&self) -> Result<Duration> {
        parse_duration(self.refresh.interval.as_deref().unwrap_or("2s"))
    }

    pub fn exclude_private(&self) -> bool {
        self.filter.exclude_private.unwrap_or(true)
    }

    pub fn exclude_uppercase(&self) -> bool {
        self.filter.exclude_uppercase.unwrap_or(true)
    }

    /// The filter expression to start with. An explicit `[filter].expression`
    /// wins; otherwise the canonical default, with the privates/caps
    /// exclusions dropped when the matching toggles are off.
    pub fn effective_expression(&self) -> String {
        if let Some(expression) = &self.filter.expression
            && !expression.trim().is_empty()
        {
            return expression.clone();
        }

        let mut tokens: Vec<&str> = DEFAULT_EXPRESSION.split_whitespace().collect();
        if !self.exclude_private() {
            tokens.retain(|token| *token != "-privates");
        }
        if !self.exclude_uppercase() {
            tokens.retain(|token| *token != "-caps");
        }
        tokens.join(" ")
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# varscope config\n# Place this file at: {}\n\nversion = 1\n\n[host]\nbase_url = \"{}\"\ntimeout = \"5s\"\n\n[view]\ncompact = false\ntruncate = true\n\n[refresh]\nauto = true\ninterval = \"2s\"\n\n[filter]\n# Explicit expression overrides the exclusion toggles below.\n# expression = \"-all +simples +iterables\"\nexclude_private = true\nexclude_uppercase = true\n",
            path.display(),
            DEFAULT_HOST_BASE_URL,
        )
    }
}

fn parse_duration(raw: &str) -> Result<Duration> {
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_secs(mins * 60));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 500ms or 5s)")
}
