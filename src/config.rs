//! Configuration to acknowledge project preferences as well as set defaults.
//!
//! We look for a vibedoc.toml (or the file passed with `--config`) and load the document title,
//! the document path and the section plan from it. Anything missing falls back to a general
//! software design document outline.

use crate::error::{Error, Result};
use crate::section::{SectionDefinition, SectionPlan};
use facet::Facet;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is named.
pub const CONFIG_FILE: &str = "vibedoc.toml";

#[derive(Facet, Clone, Debug)]
/// One `[[sections]]` table.
pub struct SectionConfig {
    /// Stable section key.
    pub key: String,
    /// `##` heading text.
    pub heading: String,
    #[facet(default = String::new())]
    /// Body shown until the section has content.
    pub placeholder: String,
}

#[derive(Facet, Clone, Debug)]
/// Project preferences loaded from vibedoc.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "Design Document".to_string())]
    /// Title used when initialising a document.
    pub title: String,
    #[facet(default = "design-doc.md".to_string())]
    /// Path of the document file, relative to the working directory.
    pub document: String,
    #[facet(default = default_sections())]
    /// Planned sections in document order.
    pub sections: Vec<SectionConfig>,
}

fn section(key: &str, heading: &str, placeholder: &str) -> SectionConfig {
    SectionConfig {
        key: key.to_string(),
        heading: heading.to_string(),
        placeholder: placeholder.to_string(),
    }
}

fn default_sections() -> Vec<SectionConfig> {
    vec![
        section(
            "vision",
            "Product Vision",
            "_What are we building, and why does it matter?_",
        ),
        section(
            "users",
            "Target Users",
            "_Who is this for, and what problem do they have today?_",
        ),
        section(
            "features",
            "Core Features",
            "_List the capabilities the first release must have._",
        ),
        section(
            "architecture",
            "Technical Approach",
            "_Stack, major components, and how data flows between them._",
        ),
        section(
            "roadmap",
            "Roadmap",
            "_Milestones from prototype to launch._",
        ),
    ]
}

impl Config {
    /// Loads configuration.
    ///
    /// An explicitly named file must exist and parse. Otherwise vibedoc.toml in the working
    /// directory is used when present and valid, and the built-in defaults when not.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let contents = fs::read_to_string(path)?;
            return Self::from_toml(&contents, path);
        }

        let implicit = Path::new(CONFIG_FILE);
        if let Ok(contents) = fs::read_to_string(implicit) {
            match Self::from_toml(&contents, implicit) {
                Ok(config) => return Ok(config),
                Err(e) => tracing::warn!("ignoring {CONFIG_FILE}: {e}"),
            }
        }
        Self::from_toml("", implicit)
    }

    /// Parses TOML text, naming `origin` in any error.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid configuration.
    pub fn from_toml(contents: &str, origin: &Path) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The validated section plan described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if section keys are blank or repeated.
    pub fn plan(&self) -> Result<SectionPlan> {
        let sections = self
            .sections
            .iter()
            .map(|s| SectionDefinition::new(&s.key, &s.heading, &s.placeholder))
            .collect();
        Ok(SectionPlan::new(sections)?)
    }

    #[must_use]
    /// Document path, honouring an override.
    pub fn document_path(&self, override_path: Option<&Path>) -> PathBuf {
        override_path.map_or_else(|| PathBuf::from(&self.document), Path::to_path_buf)
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
