use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// stevedore.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StevedoreConfig {
    #[serde(default)]
    pub image: ImageConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Image repository name (defaults to the project directory name)
    pub name: Option<String>,
    /// Build context passed to `docker build`
    #[serde(default = "default_context")]
    pub context: String,
    /// Dockerfile path relative to the context.
    /// When None, docker's own default (`<context>/Dockerfile`) applies.
    pub dockerfile: Option<String>,
    /// Build arguments passed as `--build-arg KEY=VALUE`
    #[serde(default)]
    pub build_args: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Registry host, e.g. `123456789012.dkr.ecr.us-east-1.amazonaws.com`
    pub host: Option<String>,
    /// AWS region used for registry authentication
    #[serde(default = "default_region")]
    pub region: String,
    /// Push a `latest` alias alongside the release tag
    #[serde(default = "default_push_latest")]
    pub push_latest: bool,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            name: None,
            context: default_context(),
            dockerfile: None,
            build_args: HashMap::new(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            host: None,
            region: default_region(),
            push_latest: default_push_latest(),
        }
    }
}

impl StevedoreConfig {
    /// Load from stevedore.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &Path) -> crate::Result<Self> {
        let config_path = project_dir.join("stevedore.toml");
        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config");
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            Ok(Self::default())
        }
    }
}

impl ImageConfig {
    /// The configured image name, falling back to the project directory name.
    pub fn resolve_name(&self, project_dir: &Path) -> crate::Result<String> {
        if let Some(name) = &self.name {
            return Ok(name.clone());
        }

        let dir = project_dir
            .canonicalize()
            .map_err(|e| crate::Error::ProjectDirResolve {
                path: project_dir.to_path_buf(),
                source: e,
            })?;

        dir.file_name()
            .and_then(|n| n.to_str())
            .map(str::to_owned)
            .ok_or(crate::Error::ImageName { path: dir })
    }
}

fn default_context() -> String {
    ".".to_owned()
}

fn default_region() -> String {
    "us-east-1".to_owned()
}

fn default_push_latest() -> bool {
    true
}
