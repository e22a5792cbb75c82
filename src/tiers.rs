//! Density tier definitions

use crate::error::ExportError;

/// One resolution bucket of the launcher icon set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    /// Resource folder name (e.g., "mipmap-xhdpi")
    pub folder: &'static str,
    /// Square edge length in pixels
    pub size: u32,
}

pub const MDPI: Tier = Tier {
    folder: "mipmap-mdpi",
    size: 48,
};

pub const HDPI: Tier = Tier {
    folder: "mipmap-hdpi",
    size: 72,
};

pub const XHDPI: Tier = Tier {
    folder: "mipmap-xhdpi",
    size: 96,
};

pub const XXHDPI: Tier = Tier {
    folder: "mipmap-xxhdpi",
    size: 144,
};

pub const XXXHDPI: Tier = Tier {
    folder: "mipmap-xxxhdpi",
    size: 192,
};

/// All reference tiers, smallest first
pub const ALL_TIERS: &[Tier] = &[MDPI, HDPI, XHDPI, XXHDPI, XXXHDPI];

pub const LAUNCHER_FILENAME: &str = "ic_launcher.png";

/// Same square content as the launcher icon; no circular mask is applied.
pub const ROUND_FILENAME: &str = "ic_launcher_round.png";

pub const BANNER_FILENAME: &str = "ic_banner.png";

pub const BANNER_WIDTH: u32 = 320;
pub const BANNER_HEIGHT: u32 = 180;

/// Tier whose folder receives the banner
pub const BANNER_TIER: Tier = XHDPI;

/// Parse a tier name
///
/// Accepts folder names like "mipmap-xhdpi" or short names like "xhdpi"
pub fn parse_tier(name: &str) -> Result<Tier, ExportError> {
    let wanted = normalize_tier_name(name);
    ALL_TIERS
        .iter()
        .find(|tier| normalize_tier_name(tier.folder) == wanted)
        .copied()
        .ok_or_else(|| ExportError::UnknownTier(name.to_string()))
}

/// Lowercase and strip the "mipmap-" prefix so both spellings compare equal
pub(crate) fn normalize_tier_name(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    match lower.strip_prefix("mipmap-") {
        Some(short) => short.to_string(),
        None => lower,
    }
}
