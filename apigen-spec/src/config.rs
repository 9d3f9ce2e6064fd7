//! `apigen.toml` configuration.
//!
//! Every key is optional. A missing file behaves like an empty one.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, error::SourceContext};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "apigen.toml";

/// Root of `apigen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub client: ClientConfig,
    pub generation: GenerationConfig,
}

/// `[input]` section.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Path to the API document.
    pub spec: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            spec: PathBuf::from("swagger.json"),
        }
    }
}

/// `[output]` section. File paths are relative to `dir`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub types: PathBuf,
    pub client: PathBuf,
    pub service: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            types: PathBuf::from("types/api.types.ts"),
            client: PathBuf::from("composables/useApi.ts"),
            service: PathBuf::from("composables/useApiService.ts"),
        }
    }
}

/// `[client]` section.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Title used in generated headers (defaults to `info.title`).
    pub title: Option<String>,
    /// Base URL used when the caller passes none.
    pub base_url: String,
    /// Module specifier of the types document, as seen from the client.
    pub types_import: String,
    /// Module specifier of the helper document, as seen from the client.
    pub service_import: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            title: None,
            base_url: "http://localhost:3000".to_string(),
            types_import: "../types/api.types".to_string(),
            service_import: "./useApiService".to_string(),
        }
    }
}

/// `[generation]` section.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    pub compose: ComposeStrategy,
    pub query_field: QueryField,
    /// Report colliding operation names as errors instead of warnings.
    pub unique_operation_ids: bool,
    /// Embed the generation time in document headers.
    pub timestamp: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            compose: ComposeStrategy::default(),
            query_field: QueryField::default(),
            unique_operation_ids: false,
            timestamp: true,
        }
    }
}

/// How `allOf` compositions resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComposeStrategy {
    /// Use the first branch only.
    #[default]
    First,
    /// Intersect all branches (`A & B`).
    Intersection,
}

/// Optionality of the nested `query` field in request types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryField {
    /// Always required once any query parameter exists.
    #[default]
    Required,
    /// Optional when every query parameter is optional.
    OptionalWhenAllOptional,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE)
    }
}

impl Config {
    /// Parse an apigen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Load the config at `path`, or the defaults when the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// The commented default configuration written by `apigen init`.
    pub fn template() -> &'static str {
        DEFAULT_CONFIG
    }
}

const DEFAULT_CONFIG: &str = r#"# apigen configuration

[input]
# OpenAPI JSON document to read
spec = "swagger.json"

[output]
# Base directory; the paths below are relative to it
dir = "."
types = "types/api.types.ts"
client = "composables/useApi.ts"
service = "composables/useApiService.ts"

[client]
# title = "My API"
base_url = "http://localhost:3000"
types_import = "../types/api.types"
service_import = "./useApiService"

[generation]
# "first" or "intersection"
compose = "first"
# "required" or "optional-when-all-optional"
query_field = "required"
unique_operation_ids = false
timestamp = true
"#;

/// Parse a config from content with the given filename for error reporting.
fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source_ctx.toml_error(e))?;
    validate_config(&config, &source_ctx)?;
    Ok(config)
}

/// Validate output paths after parsing.
fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    let outputs = [
        ("types", &config.output.types),
        ("client", &config.output.client),
        ("service", &config.output.service),
    ];

    for (key, path) in outputs {
        if path.as_os_str().is_empty() {
            return Err(ctx.validation_error(
                format!("output.{} must not be empty", key),
                Some(key),
            ));
        }
    }

    for (i, (key, path)) in outputs.iter().enumerate() {
        if let Some((other, _)) = outputs[..i].iter().find(|(_, p)| p == path) {
            return Err(ctx.validation_error(
                format!("output.{} and output.{} point to the same file", other, key),
                Some(key),
            ));
        }
    }

    Ok(())
}
