use crate::core::ConfigProvider;
use crate::utils::error::{AuraError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-driven run settings, for batch invocations where flags get unwieldy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineMeta,
    pub source: SourceConfig,
    pub render: RenderConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineMeta {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub input: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub output_path: String,
    pub jpeg_quality: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(Path::new(path))?;
        Self::parse_str(&content)
    }

    pub fn parse_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| AuraError::InvalidConfigValueError {
            field: "config".to_string(),
            value: "<toml file>".to_string(),
            reason: e.to_string(),
        })
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.input
    }

    fn output_path(&self) -> &str {
        &self.render.output_path
    }

    fn jpeg_quality(&self) -> u8 {
        self.render.jpeg_quality.unwrap_or(90)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validate_path("source.input", &self.source.input)?;
        validate_file_extension("source.input", &self.source.input, &["png", "jpg", "jpeg"])?;
        validate_path("render.output_path", &self.render.output_path)?;
        validate_range("render.jpeg_quality", self.jpeg_quality(), 1, 100)?;
        Ok(())
    }
}
