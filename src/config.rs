//! Project configuration loading.
//!
//! Tamagui projects emit `.tamagui/tamagui.config.json` at build time; the
//! linter consumes two slices of it: the module names that count as "the
//! library" and the shorthand dictionary. Token tables (color/space/size/
//! radius/z-index) live in the same file but belong to other tooling and are
//! ignored here.
//!
//! Loading happens once per session. A missing or unparseable file is a
//! fatal setup error returned from the loader; the linter never runs with a
//! partially initialized configuration.

use std::path::Path;

use serde::Deserialize;

use crate::shorthand::ShorthandDictionary;

/// Default config file location relative to the project root
pub const DEFAULT_CONFIG_PATH: &str = ".tamagui/tamagui.config.json";

/// Module specifiers that count as the library when no config file is given
pub const DEFAULT_MODULE_NAMES: &[&str] = &["tamagui", "@tamagui/core", "@tamagui/ui"];

/// Errors surfaced once at configuration load time
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read tamagui config at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse tamagui config at {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk shape of the config artifact (the parts we read)
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    components: Vec<ComponentEntry>,
    #[serde(rename = "tamaguiConfig", default)]
    tamagui_config: TamaguiConfigSection,
}

#[derive(Debug, Deserialize)]
struct ComponentEntry {
    #[serde(rename = "moduleName")]
    module_name: String,
}

#[derive(Debug, Default, Deserialize)]
struct TamaguiConfigSection {
    /// short name -> long name; map order is preserved so first-wins
    /// precedence is deterministic
    #[serde(default)]
    shorthands: serde_json::Map<String, serde_json::Value>,
}

/// Immutable configuration snapshot threaded through the linter.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Module specifiers whose imports count as library components
    pub module_names: Vec<String>,
    /// Shorthand dictionary derived from the config's shorthand map
    pub shorthands: ShorthandDictionary,
}

impl LibraryConfig {
    /// Load from a `.tamagui/tamagui.config.json` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Parse from the config artifact's JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let file: ConfigFile = serde_json::from_str(text)?;

        let module_names = file
            .components
            .into_iter()
            .map(|c| c.module_name)
            .collect();

        let shorthands = ShorthandDictionary::from_pairs(
            file.tamagui_config
                .shorthands
                .iter()
                .filter_map(|(short, long)| long.as_str().map(|l| (short.as_str(), l))),
        );

        Ok(Self {
            module_names,
            shorthands,
        })
    }

    /// Check whether a module specifier belongs to the library
    #[inline]
    pub fn is_library_module(&self, specifier: &str) -> bool {
        self.module_names.iter().any(|m| m == specifier)
    }
}

impl Default for LibraryConfig {
    /// Built-in configuration: the standard Tamagui module names and
    /// shorthand table. Lets the linter run without any project config.
    fn default() -> Self {
        Self {
            module_names: DEFAULT_MODULE_NAMES.iter().map(|s| s.to_string()).collect(),
            shorthands: ShorthandDictionary::tamagui_defaults(),
        }
    }
}
