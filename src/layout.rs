use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::ExportError;
use crate::tiers::{self, ALL_TIERS, BANNER_HEIGHT, BANNER_TIER, BANNER_WIDTH};

/// A square icon tier read from a layout file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSpec {
    pub folder: String,
    pub size: u32,
}

/// Banner box and the folder it is written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerSpec {
    pub width: u32,
    pub height: u32,
    pub folder: String,
}

/// Everything an export needs to know about what to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub tiers: Vec<TierSpec>,
    pub banner: BannerSpec,
}

impl Layout {
    /// Load and validate a JSON layout file.
    pub fn load(path: &Path) -> Result<Layout, ExportError> {
        let content = fs::read_to_string(path).map_err(|e| ExportError::InvalidLayout {
            reason: format!("failed to read '{}': {}", path.display(), e),
        })?;
        let layout: Layout =
            serde_json::from_str(&content).map_err(|e| ExportError::InvalidLayout {
                reason: format!("failed to parse '{}': {}", path.display(), e),
            })?;
        layout.validate()?;
        Ok(layout)
    }

    /// Check the invariants the export relies on.
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.tiers.is_empty() {
            return Err(invalid("at least one tier is required"));
        }

        let mut seen = HashSet::new();
        for tier in &self.tiers {
            check_folder(&tier.folder)?;
            if tier.size == 0 {
                return Err(invalid(format!("tier '{}' has size 0", tier.folder)));
            }
            if !seen.insert(tier.folder.as_str()) {
                return Err(invalid(format!("duplicate tier folder '{}'", tier.folder)));
            }
        }

        check_folder(&self.banner.folder)?;
        if self.banner.width == 0 || self.banner.height == 0 {
            return Err(invalid(format!(
                "banner box {}x{} has a zero dimension",
                self.banner.width, self.banner.height
            )));
        }

        Ok(())
    }

    /// Keep only the named tiers. The banner is unaffected.
    ///
    /// Names match folder names with or without the "mipmap-" prefix.
    pub fn only(mut self, names: &[String]) -> Result<Layout, ExportError> {
        let mut wanted = HashSet::new();
        for name in names {
            let normalized = tiers::normalize_tier_name(name);
            let known = self
                .tiers
                .iter()
                .any(|t| tiers::normalize_tier_name(&t.folder) == normalized);
            if !known {
                return Err(ExportError::UnknownTier(name.clone()));
            }
            wanted.insert(normalized);
        }

        self.tiers
            .retain(|t| wanted.contains(&tiers::normalize_tier_name(&t.folder)));
        Ok(self)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            tiers: ALL_TIERS
                .iter()
                .map(|t| TierSpec {
                    folder: t.folder.to_string(),
                    size: t.size,
                })
                .collect(),
            banner: BannerSpec {
                width: BANNER_WIDTH,
                height: BANNER_HEIGHT,
                folder: BANNER_TIER.folder.to_string(),
            },
        }
    }
}

fn check_folder(folder: &str) -> Result<(), ExportError> {
    if folder.is_empty() {
        return Err(invalid("folder names must not be empty"));
    }
    if folder.contains(['/', '\\']) || folder == "." || folder == ".." {
        return Err(invalid(format!(
            "folder '{}' must be a single directory name",
            folder
        )));
    }
    Ok(())
}

fn invalid(reason: impl Into<String>) -> ExportError {
    ExportError::InvalidLayout {
        reason: reason.into(),
    }
}
