//! Brand identifiers and the static brand registry
//!
//! Single source of truth for all brand-specific data: display names,
//! domains, accent colors, navigation, and SEO defaults. The registry is
//! compile-time static; changing a brand mapping means redeploying.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::UnknownBrand;

// =============================================================================
// Brand Identifier
// =============================================================================

/// One of the GrowthWave business divisions.
///
/// The lowercase token (`as_str`) doubles as the brand's subdirectory prefix
/// in the static build output (`/capital/about/index.html`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    Advisors,
    Capital,
    Properties,
}

impl Brand {
    /// All brands, in registry order.
    pub const ALL: [Brand; 3] = [Brand::Advisors, Brand::Capital, Brand::Properties];

    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Advisors => "advisors",
            Brand::Capital => "capital",
            Brand::Properties => "properties",
        }
    }

    /// Static configuration for this brand.
    pub fn config(&self) -> &'static BrandConfig {
        match self {
            Brand::Advisors => &BRANDS[0],
            Brand::Capital => &BRANDS[1],
            Brand::Properties => &BRANDS[2],
        }
    }
}

impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Brand {
    type Err = UnknownBrand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "advisors" => Ok(Brand::Advisors),
            "capital" => Ok(Brand::Capital),
            "properties" => Ok(Brand::Properties),
            other => Err(UnknownBrand(other.to_string())),
        }
    }
}

// =============================================================================
// Brand Configuration
// =============================================================================

/// A single navigation entry rendered in a brand's header.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// Default SEO metadata for a brand's pages.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeoDefaults {
    pub title_suffix: &'static str,
    pub description: &'static str,
}

/// Complete static configuration for one brand.
#[derive(Debug, Clone, Serialize)]
pub struct BrandConfig {
    pub id: Brand,
    pub name: &'static str,
    pub tagline: &'static str,
    /// Apex domain; the `www.` variant is derived when building the host map.
    pub domain: &'static str,
    pub email: &'static str,
    pub accent_color: &'static str,
    pub navigation: &'static [NavItem],
    pub seo: SeoDefaults,
}

/// The brand registry. Order matches `Brand::ALL`.
pub const BRANDS: &[BrandConfig] = &[
    BrandConfig {
        id: Brand::Advisors,
        name: "GrowthWave Advisors",
        tagline: "Building the Investor Success Flywheel",
        domain: "growthwaveadvisors.com",
        email: "wilfred@growthwaveadvisors.com",
        accent_color: "#265077",
        navigation: &[
            NavItem { label: "Home", href: "/advisors/" },
            NavItem { label: "Our Companies", href: "/advisors/companies/" },
            NavItem { label: "About", href: "/advisors/about/" },
            NavItem { label: "Contact", href: "/advisors/contact/" },
        ],
        seo: SeoDefaults {
            title_suffix: "GrowthWave Advisors",
            description: "Integrated financial services for investors. From credit repair \
                          through business financing to cash-flowing real estate investments.",
        },
    },
    BrandConfig {
        id: Brand::Capital,
        name: "GrowthWave Capital",
        tagline: "Fueling Your Business Growth",
        domain: "growthwavecapital.com",
        email: "wilfred@growthwavecapital.com",
        accent_color: "#7C3AED",
        navigation: &[
            NavItem { label: "Home", href: "/capital/" },
            NavItem { label: "Services", href: "/capital/services/" },
            NavItem { label: "About", href: "/capital/about/" },
            NavItem { label: "Apply", href: "/capital/apply/" },
            NavItem { label: "Contact", href: "/capital/contact/" },
        ],
        seo: SeoDefaults {
            title_suffix: "GrowthWave Capital",
            description: "Access $50K-$250K+ in business credit and financing. \
                          Enterprise-grade technology platform built by a former Credit \
                          Union CTO with 15 years of banking experience.",
        },
    },
    BrandConfig {
        id: Brand::Properties,
        name: "GrowthWave Properties",
        tagline: "Building Wealth Through Real Estate",
        domain: "growthwaveproperties.com",
        email: "wilfred@growthwaveproperties.com",
        accent_color: "#FF6B4A",
        navigation: &[
            NavItem { label: "Home", href: "/properties/" },
            NavItem { label: "About", href: "/properties/about/" },
            NavItem { label: "Approach", href: "/properties/approach/" },
            NavItem { label: "Portfolio", href: "/properties/portfolio/" },
            NavItem { label: "Contact", href: "/properties/contact/" },
        ],
        seo: SeoDefaults {
            title_suffix: "GrowthWave Properties",
            description: "Partner with experienced operators on cash-flowing multifamily \
                          properties. Value-add investments in the Midwest and South regions.",
        },
    },
];

/// Look up a brand config by its lowercase token.
pub fn brand_config(id: &str) -> Option<&'static BrandConfig> {
    BRANDS.iter().find(|config| config.id.as_str() == id)
}

// =============================================================================
// Hostname Map
// =============================================================================

/// Hostname-to-brand map built once from the registry.
///
/// Every brand contributes its apex domain and the `www.` variant as
/// distinct keys. Keys are lowercase; callers are expected to normalize the
/// Host header before lookup.
pub fn host_brand_map() -> &'static HashMap<String, Brand> {
    static MAP: OnceLock<HashMap<String, Brand>> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut map = HashMap::new();
        for config in BRANDS {
            map.insert(config.domain.to_string(), config.id);
            map.insert(format!("www.{}", config.domain), config.id);
        }
        map
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_token_round_trip() {
        for brand in Brand::ALL {
            let parsed: Brand = brand.as_str().parse().unwrap();
            assert_eq!(parsed, brand);

            let json = serde_json::to_string(&brand).unwrap();
            assert_eq!(json, format!("\"{}\"", brand.as_str()));
            let back: Brand = serde_json::from_str(&json).unwrap();
            assert_eq!(back, brand);
        }

        assert!("credit".parse::<Brand>().is_err());
        assert!("Capital".parse::<Brand>().is_err());
    }

    #[test]
    fn test_config_matches_brand() {
        for brand in Brand::ALL {
            assert_eq!(brand.config().id, brand);
        }
        assert_eq!(brand_config("capital").map(|c| c.id), Some(Brand::Capital));
        assert!(brand_config("unknown").is_none());
    }

    #[test]
    fn test_host_map_contains_apex_and_www() {
        let map = host_brand_map();
        for config in BRANDS {
            assert_eq!(map.get(config.domain), Some(&config.id));
            assert_eq!(map.get(&format!("www.{}", config.domain)), Some(&config.id));
        }
        assert_eq!(map.len(), BRANDS.len() * 2);
        assert!(map.get("unknown-preview.example.dev").is_none());
    }
}
