//! # EduCírculos Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates configuration. Reply pools, keyword
//! rules, the course catalog and the platform's numeric rules are all data, so
//! content can change without touching code.
//!
//! ## Architecture
//!
//! Configuration sources (lowest to highest precedence):
//! 1. Built-in defaults compiled from `assets/default_config.toml`
//! 2. User-specific `<config dir>/educirculos/config.toml`
//! 3. Project-specific `.educirculos.toml` in the current directory or ancestors
//! 4. An explicit file given with `--config` (or `EDUCIRCULOS_CONFIG`)
//!
//! Each source is parsed into a `ConfigFile` whose fields are all optional,
//! then folded onto the resolved `Config`:
//! - scalars override when present
//! - `assistant.rules` and `catalog.courses` are replaced wholesale
//! - `assistant.responses` are replaced per category
//!
//! Validation runs once on the merged result, building the matcher and the
//! catalog so misconfiguration surfaces before any command runs.
//!
//! ## Examples
//!
//! ```toml
//! # .educirculos.toml: shorter delay and an extra greeting trigger
//! [assistant]
//! reply_delay_ms = 250
//!
//! [[assistant.rules]]
//! category = "greeting"
//! triggers = ["hola", "buenas", "saludos"]
//!
//! [[assistant.rules]]
//! category = "help"
//! triggers = ["ayuda"]
//! ```
//!
use crate::assistant::{Category, ResponseMatcher};
use crate::core::error::{EduError, Result};
use crate::platform::catalog::{Catalog, Course};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

const BUILTIN_CONFIG: &str = include_str!("../../assets/default_config.toml");
const PROJECT_CONFIG_FILENAME: &str = ".educirculos.toml";

/// Fully resolved configuration handed to commands.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub assistant: AssistantSettings,
    pub platform: PlatformSettings,
    pub catalog: CatalogSettings,
}

/// Resolved `[assistant]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantSettings {
    /// Display name used by the chat front end.
    pub name: String,
    /// Line the assistant says whenever the chat is opened.
    pub welcome: String,
    /// Category used when no rule matches.
    pub fallback: Category,
    /// Simulated "thinking" time before each chat reply.
    pub reply_delay_ms: u64,
    /// Rules in priority order.
    pub rules: Vec<RuleConfig>,
    pub responses: BTreeMap<Category, Vec<String>>,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            name: default_assistant_name(),
            welcome: default_welcome(),
            fallback: Category::Help,
            reply_delay_ms: default_reply_delay_ms(),
            rules: Vec::new(),
            responses: BTreeMap::new(),
        }
    }
}

/// One `[[assistant.rules]]` record.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    pub category: Category,
    pub triggers: Vec<String>,
}

/// Resolved `[platform]` section: the numbers behind accounts and the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSettings {
    pub min_password_len: usize,
    pub min_name_len: usize,
    /// Credits granted to a freshly registered account.
    pub welcome_credits: u64,
    /// Credits granted per course enrollment.
    pub enroll_bonus: u64,
    pub hours_per_course: u64,
    pub courses_per_certificate: u64,
}

impl Default for PlatformSettings {
    fn default() -> Self {
        Self {
            min_password_len: 8,
            min_name_len: 2,
            welcome_credits: 100,
            enroll_bonus: 10,
            hours_per_course: 8,
            courses_per_certificate: 3,
        }
    }
}

/// Resolved `[catalog]` section.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CatalogSettings {
    pub courses: Vec<Course>,
}

// --- File layers: every field optional so partial files merge cleanly ---

/// One configuration source as written on disk.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub assistant: AssistantFile,
    #[serde(default)]
    pub platform: PlatformFile,
    #[serde(default)]
    pub catalog: CatalogFile,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct AssistantFile {
    pub name: Option<String>,
    pub welcome: Option<String>,
    pub fallback: Option<Category>,
    pub reply_delay_ms: Option<u64>,
    pub rules: Option<Vec<RuleConfig>>,
    /// Keyed by category name; names are checked when the layer is merged.
    #[serde(default)]
    pub responses: BTreeMap<String, Vec<String>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct PlatformFile {
    pub min_password_len: Option<usize>,
    pub min_name_len: Option<usize>,
    pub welcome_credits: Option<u64>,
    pub enroll_bonus: Option<u64>,
    pub hours_per_course: Option<u64>,
    pub courses_per_certificate: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    pub courses: Option<Vec<Course>>,
}

fn default_assistant_name() -> String {
    "Asistente EduCírculos".to_string()
}
fn default_welcome() -> String {
    "¡Hola! Soy tu asistente de EduCírculos. ¿En qué puedo ayudarte hoy?".to_string()
}
fn default_reply_delay_ms() -> u64 {
    1000
}

// --- Loading ---

/// Loads every configuration layer, merges and validates the result.
///
/// ## Arguments
///
/// * `explicit`: Optional path from `--config`; `~` is expanded. A missing
///   explicit file is an error, unlike the user and project files.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut layers = vec![builtin_layer()?];
    if let Some(user) = load_user_config()? {
        layers.push(user);
    }
    if let Some(project) = load_project_config()? {
        layers.push(project);
    }
    if let Some(path) = explicit {
        let expanded = expand_path(path);
        info!("Loading configuration from: {}", expanded.display());
        layers.push(load_config_from_path(&expanded)?);
    }

    let config = resolve(layers)?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

/// The compiled-in defaults as a layer.
pub fn builtin_layer() -> Result<ConfigFile> {
    toml::from_str(BUILTIN_CONFIG).context("Built-in configuration is not valid TOML")
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("hn", "EduCirculos", "educirculos") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigFile>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            load_config_from_path(&path).map(Some)
        }
        None => {
            debug!("No {} found in current directory or ancestors.", PROJECT_CONFIG_FILENAME);
            Ok(None)
        }
    }
}

/// Walks up from `start` looking for `.educirculos.toml`, stopping at the
/// first directory that holds a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(PROJECT_CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

/// Reads and parses one TOML configuration file.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

// --- Merging ---

/// Folds `layers` (lowest precedence first) onto the defaults.
pub fn resolve(layers: Vec<ConfigFile>) -> Result<Config> {
    let mut config = Config::default();
    for layer in layers {
        merge_layer(&mut config, layer)?;
    }
    Ok(config)
}

fn merge_layer(config: &mut Config, layer: ConfigFile) -> Result<()> {
    let assistant = &mut config.assistant;
    let file = layer.assistant;
    if let Some(name) = file.name {
        assistant.name = name;
    }
    if let Some(welcome) = file.welcome {
        assistant.welcome = welcome;
    }
    if let Some(fallback) = file.fallback {
        assistant.fallback = fallback;
    }
    if let Some(delay) = file.reply_delay_ms {
        assistant.reply_delay_ms = delay;
    }
    if let Some(rules) = file.rules {
        assistant.rules = rules;
    }
    for (name, replies) in file.responses {
        let category: Category = name
            .parse()
            .map_err(|msg: String| anyhow!(EduError::Config(format!("[assistant.responses]: {}", msg))))?;
        assistant.responses.insert(category, replies);
    }

    let platform = &mut config.platform;
    let file = layer.platform;
    if let Some(v) = file.min_password_len {
        platform.min_password_len = v;
    }
    if let Some(v) = file.min_name_len {
        platform.min_name_len = v;
    }
    if let Some(v) = file.welcome_credits {
        platform.welcome_credits = v;
    }
    if let Some(v) = file.enroll_bonus {
        platform.enroll_bonus = v;
    }
    if let Some(v) = file.hours_per_course {
        platform.hours_per_course = v;
    }
    if let Some(v) = file.courses_per_certificate {
        platform.courses_per_certificate = v;
    }

    if let Some(courses) = layer.catalog.courses {
        config.catalog.courses = courses;
    }
    Ok(())
}

// --- Validation ---

/// Checks the merged configuration by building what commands will build.
pub fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    ResponseMatcher::from_settings(&config.assistant)?;
    Catalog::new(config.catalog.courses.clone())?;
    if config.platform.courses_per_certificate == 0 {
        return Err(anyhow!(EduError::Config(
            "platform.courses_per_certificate must be greater than zero".to_string()
        )));
    }
    if config.assistant.welcome.trim().is_empty() {
        return Err(anyhow!(EduError::Config(
            "assistant.welcome cannot be empty".to_string()
        )));
    }
    info!("Configuration validation successful.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn builtin() -> Config {
        resolve(vec![builtin_layer().unwrap()]).unwrap()
    }

    #[test]
    fn test_builtin_config_is_valid() {
        let config = builtin();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.assistant.fallback, Category::Help);
        assert_eq!(config.assistant.reply_delay_ms, 1000);
        assert_eq!(config.assistant.responses.len(), Category::ALL.len());
        assert_eq!(config.catalog.courses.len(), 3);
        assert_eq!(config.platform, PlatformSettings::default());
    }

    #[test]
    fn test_builtin_rule_order() {
        let order: Vec<Category> = builtin().assistant.rules.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![
                Category::Greeting,
                Category::Courses,
                Category::Credits,
                Category::Circles,
                Category::Motivation,
                Category::Progress,
                Category::Help,
            ]
        );
    }

    #[test]
    fn test_layer_overrides_scalars_and_single_pools() {
        let layer: ConfigFile = toml::from_str(
            r#"
            [assistant]
            reply_delay_ms = 0

            [assistant.responses]
            greeting = ["¡Saludos!"]

            [platform]
            enroll_bonus = 25
            "#,
        )
        .unwrap();
        let config = resolve(vec![builtin_layer().unwrap(), layer]).unwrap();

        assert_eq!(config.assistant.reply_delay_ms, 0);
        assert_eq!(
            config.assistant.responses[&Category::Greeting],
            vec!["¡Saludos!".to_string()]
        );
        // Untouched categories keep their built-in replies.
        assert_eq!(config.assistant.responses[&Category::Help].len(), 4);
        assert_eq!(config.platform.enroll_bonus, 25);
        assert_eq!(config.platform.min_password_len, 8);
        // Rules were not redefined, so the built-in list stays.
        assert_eq!(config.assistant.rules.len(), 7);
    }

    #[test]
    fn test_later_layers_win() {
        let layer = |delay: u64, bonus: Option<u64>| -> ConfigFile {
            let mut text = format!("[assistant]\nreply_delay_ms = {}\n", delay);
            if let Some(bonus) = bonus {
                text.push_str(&format!("[platform]\nenroll_bonus = {}\n", bonus));
            }
            toml::from_str(&text).unwrap()
        };
        let user = layer(300, Some(40));
        let project = layer(200, None);
        let explicit = layer(100, None);

        let config = resolve(vec![builtin_layer().unwrap(), user, project, explicit]).unwrap();
        assert_eq!(config.assistant.reply_delay_ms, 100);
        // Keys set only by a lower layer survive the higher ones.
        assert_eq!(config.platform.enroll_bonus, 40);
    }

    #[test]
    fn test_huge_platform_numbers_validate() {
        let layer: ConfigFile =
            toml::from_str("[platform]\nhours_per_course = 9223372036854775807\n").unwrap();
        let config = resolve(vec![builtin_layer().unwrap(), layer]).unwrap();
        assert!(validate_config(&config).is_ok());
        let stats = crate::platform::dashboard::DashboardStats::for_profile(
            &crate::platform::session::UserProfile::showcase(),
            &config.platform,
        );
        assert_eq!(stats.study_hours, u64::MAX);
    }

    #[test]
    fn test_layer_replaces_rule_list() {
        let layer: ConfigFile = toml::from_str(
            r#"
            [[assistant.rules]]
            category = "circles"
            triggers = ["equipo"]
            "#,
        )
        .unwrap();
        let config = resolve(vec![builtin_layer().unwrap(), layer]).unwrap();
        assert_eq!(
            config.assistant.rules,
            vec![RuleConfig {
                category: Category::Circles,
                triggers: vec!["equipo".into()],
            }]
        );
    }

    #[test]
    fn test_unknown_response_category_is_config_error() {
        let layer: ConfigFile = toml::from_str(
            r#"
            [assistant.responses]
            weather = ["Soleado"]
            "#,
        )
        .unwrap();
        let err = resolve(vec![layer]).unwrap_err();
        assert!(err.to_string().contains("unknown category 'weather'"));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: std::result::Result<ConfigFile, _> = toml::from_str(
            r#"
            [assistant]
            reply_delay = 10
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_empty_pool() {
        let mut config = builtin();
        config
            .assistant
            .responses
            .insert(Category::Motivation, Vec::new());
        let err = validate_config(&config).unwrap_err();
        assert_eq!(
            err.downcast_ref::<EduError>(),
            Some(&EduError::EmptyPool {
                category: "motivation".into()
            })
        );
    }

    #[test]
    fn test_validate_rejects_rule_without_pool() {
        let mut config = builtin();
        config.assistant.responses.remove(&Category::Progress);
        let err = validate_config(&config).unwrap_err();
        assert!(err
            .to_string()
            .contains("category 'progress' is referenced but has no reply pool"));
    }

    #[test]
    fn test_validate_rejects_zero_certificate_divisor() {
        let mut config = builtin();
        config.platform.courses_per_certificate = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_config_from_path_reports_parse_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[assistant\nname = ").unwrap();
        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_find_project_config_walks_up_until_git() {
        let root = tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.path().join("a").join(PROJECT_CONFIG_FILENAME), "").unwrap();
        assert_eq!(
            find_project_config_path(&nested),
            Some(root.path().join("a").join(PROJECT_CONFIG_FILENAME))
        );

        // A repository boundary below the file hides it.
        fs::create_dir(nested.join(".git")).unwrap();
        assert_eq!(find_project_config_path(&nested), None);
    }

    #[test]
    fn test_expand_path_handles_tilde() {
        let expanded = expand_path(Path::new("~/edu.toml"));
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.ends_with("edu.toml"));
        assert_eq!(expand_path(Path::new("/etc/edu.toml")), PathBuf::from("/etc/edu.toml"));
    }
}
