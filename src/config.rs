// src/config.rs
//! Static configuration owned by a [`ReportGenerator`](crate::ReportGenerator).
//!
//! Every field has a default, so a JSON override only needs the keys it changes.

use crate::error::ReportError;
use aadhaar_types::{Color, Size};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The configuration used by [`crate::generate`].
pub static DEFAULT_CONFIG: Lazy<ReportConfig> = Lazy::new(ReportConfig::default);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportConfig {
    pub page: PageGeometry,
    pub palette: Palette,
    pub metadata: MetadataStrings,
    pub branding: Branding,
}

impl ReportConfig {
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Page dimensions, margins and the vertical thresholds the layout cursor works with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    /// Left/right content inset, also the header rule and footer rule inset.
    pub margin: f32,
    /// Cursor position after a page with the shared header band.
    pub header_top: f32,
    /// Cursor position after a page without a header (the cover).
    pub cover_top: f32,
    /// Past this offset the cursor reports overflow and the next card starts a new page.
    pub overflow_limit: f32,
    /// Baseline of the header rule.
    pub header_rule_y: f32,
    /// Distance of the footer rule from the bottom edge.
    pub footer_inset: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        let a4 = Size::a4();
        Self {
            width: a4.width,
            height: a4.height,
            margin: 60.0,
            header_top: 100.0,
            cover_top: 40.0,
            overflow_limit: 650.0,
            header_rule_y: 60.0,
            footer_inset: 60.0,
        }
    }
}

impl PageGeometry {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    pub fn right_edge(&self) -> f32 {
        self.width - self.margin
    }

    pub fn footer_rule_y(&self) -> f32 {
        self.height - self.footer_inset
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub subtitle: Color,
    pub critical: Color,
    pub high: Color,
    pub medium: Color,
    pub low: Color,
    pub critical_tint: Color,
    pub high_tint: Color,
    pub medium_tint: Color,
    pub low_tint: Color,
    pub text: Color,
    pub text_light: Color,
    pub border: Color,
    pub background: Color,
    pub white: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::rgb(0x1e, 0x3a, 0x8a),
            secondary: Color::rgb(0x3b, 0x82, 0xf6),
            subtitle: Color::rgb(0x93, 0xc5, 0xfd),
            critical: Color::rgb(0xdc, 0x26, 0x26),
            high: Color::rgb(0xf9, 0x73, 0x16),
            medium: Color::rgb(0xea, 0xb3, 0x08),
            low: Color::rgb(0x22, 0xc5, 0x5e),
            critical_tint: Color::rgb(0xfe, 0xe2, 0xe2),
            high_tint: Color::rgb(0xff, 0xed, 0xd5),
            medium_tint: Color::rgb(0xfe, 0xf9, 0xc3),
            low_tint: Color::rgb(0xdc, 0xfc, 0xe7),
            text: Color::rgb(0x1f, 0x29, 0x37),
            text_light: Color::rgb(0x6b, 0x72, 0x80),
            border: Color::rgb(0xe5, 0xe7, 0xeb),
            background: Color::rgb(0xf9, 0xfa, 0xfb),
            white: Color::WHITE,
        }
    }
}

/// Strings written to the document information dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetadataStrings {
    pub title_prefix: String,
    pub author: String,
    pub subject: String,
    pub producer: String,
}

impl Default for MetadataStrings {
    fn default() -> Self {
        Self {
            title_prefix: "Aadhaar Report".to_string(),
            author: "Aadhaar Intelligence System".to_string(),
            subject: "Policy Decision Support Report".to_string(),
            producer: concat!("aadhaar-report ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Branding {
    /// Product name shown in the shared header band and the closing attribution.
    pub system_name: String,
    pub cover_title: String,
    pub cover_subtitle: String,
    pub confidentiality_notice: String,
    pub support_contact: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            system_name: "Aadhaar Intelligence System".to_string(),
            cover_title: "UIDAI INTELLIGENCE SYSTEM".to_string(),
            cover_subtitle: "Policy Decision Support Report".to_string(),
            confidentiality_notice: "CONFIDENTIAL - FOR AUTHORIZED PERSONNEL ONLY".to_string(),
            support_contact: "support@aadhaar-intelligence.gov.in".to_string(),
        }
    }
}
