//! Fixture configuration
//!
//! Loaded from TOML or built in code. Every field has a default, so an empty
//! document is a valid config:
//!
//! ```toml
//! link_template = "https://git.example.com/org/pulls/{number}"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Placeholder substituted with the pull-request number.
pub const NUMBER_PLACEHOLDER: &str = "{number}";

/// Settings for a [`FakeClient`](crate::FakeClient)
///
/// Every constructor, including deserialization, validates the template, so
/// a `FakeConfig` always renders links that carry the number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct FakeConfig {
    link_template: String,
}

/// Unvalidated form of [`FakeConfig`] as it appears in a document.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default = "default_link_template")]
    link_template: String,
}

impl TryFrom<RawConfig> for FakeConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        FakeConfig::with_link_template(raw.link_template)
    }
}

fn default_link_template() -> String {
    "https://example.com/pull-request/{number}".to_string()
}

impl Default for FakeConfig {
    fn default() -> Self {
        Self {
            link_template: default_link_template(),
        }
    }
}

impl FakeConfig {
    /// Config with a custom link template; must contain `{number}`.
    pub fn with_link_template(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(NUMBER_PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder { template });
        }
        Ok(Self {
            link_template: template,
        })
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)?;
        Self::try_from(raw)
    }

    pub fn link_template(&self) -> &str {
        &self.link_template
    }

    /// Render the link for pull request `number`.
    pub fn link_for(&self, number: u64) -> String {
        self.link_template
            .replace(NUMBER_PLACEHOLDER, &number.to_string())
    }

    /// Recover the pull-request number from a link rendered by
    /// [`FakeConfig::link_for`].
    ///
    /// Only links `link_for` would produce parse; `007` is not `7`.
    pub fn number_from_link(&self, link: &str) -> Option<u64> {
        let (prefix, _) = self.link_template.split_once(NUMBER_PLACEHOLDER)?;
        let rest = link.strip_prefix(prefix)?;
        let run = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());

        // Literal digits may follow the placeholder, so the number can be
        // any leading part of the digit run.
        (1..=run)
            .filter_map(|end| rest[..end].parse::<u64>().ok())
            .find(|number| self.link_for(*number) == link)
    }
}
