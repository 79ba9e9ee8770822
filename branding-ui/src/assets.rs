// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0

//! Static asset references.
//!
//! Components name an [`Asset`]; where it is actually served from is decided
//! here, from the optional `assetBaseUrl` in the runtime config.

use crate::constants::asset_base_url;

/// Alternative text of the logo image.
pub const LOGO_ALT_TEXT: &str = "F5 Logo";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    F5Logo,
}

impl Asset {
    /// Path of the asset relative to the static-file root.
    pub fn path(&self) -> &'static str {
        match self {
            Asset::F5Logo => "assets/images/f5_logo.png",
        }
    }

    /// URL the browser should load the asset from.
    pub fn url(&self) -> String {
        resolve_with_base(*self, asset_base_url().as_deref())
    }
}

pub fn resolve_with_base(asset: Asset, base: Option<&str>) -> String {
    match base.map(str::trim).filter(|b| !b.is_empty()) {
        Some(base) => format!("{}/{}", base.trim_end_matches('/'), asset.path()),
        None => format!("/{}", asset.path()),
    }
}
