//! Static content for the landing page.
//!
//! Every record here is a compile-time constant. Sections read from this
//! module and never mutate it, so the page is a pure function of this data
//! (plus the current year in the footer).
//!
//! # Example
//!
//! ```rust
//! use aurex_landing::content::{spec_label, SpecKey, VARIANTS};
//!
//! assert_eq!(VARIANTS.len(), 3);
//! assert_eq!(spec_label(SpecKey::MaxTakeoffWeight.ident()), "Max Takeoff Weight");
//! ```

/// Path of the logo asset, served from the site root.
pub const LOGO_SRC: &str = "/aurex-logo.png";

/// Alternative text for every logo instance.
pub const LOGO_ALT: &str = "Aurex Aerospace Logo";

/// Named brand colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Phoenix red, used for calls to action and glyphs
    pub primary: &'static str,
    /// Page background
    pub dark: &'static str,
    /// Foreground text
    pub light: &'static str,
}

impl Palette {
    /// CSS custom properties for the root container's `style` attribute.
    pub fn css_vars(&self) -> String {
        format!(
            "--brand-primary: {}; --brand-dark: {}; --brand-light: {};",
            self.primary, self.dark, self.light
        )
    }
}

/// Company identity shown in the header, hero and footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brand {
    pub name: &'static str,
    pub tagline: &'static str,
    pub palette: Palette,
}

pub const BRAND: Brand = Brand {
    name: "Aurex Aerospace",
    tagline: "Hybrid-Electric UAS, Purpose-Built for Mission First.",
    palette: Palette {
        primary: "#E53935",
        dark: "#0B0B0C",
        light: "#F3F4F6",
    },
};

/// In-page section identifiers.
///
/// Navigation entries and section elements both take their id from this
/// enum, so a link can never point at a section that does not exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Platforms,
    Heps,
    Capabilities,
    Contact,
}

impl Anchor {
    /// Every anchor, in page order.
    pub const ALL: [Anchor; 4] = [
        Anchor::Platforms,
        Anchor::Heps,
        Anchor::Capabilities,
        Anchor::Contact,
    ];

    /// Element id of the section.
    pub const fn id(self) -> &'static str {
        match self {
            Anchor::Platforms => "platforms",
            Anchor::Heps => "heps",
            Anchor::Capabilities => "capabilities",
            Anchor::Contact => "contact",
        }
    }

    /// Fragment link to the section, e.g. `#heps`.
    pub const fn href(self) -> &'static str {
        match self {
            Anchor::Platforms => "#platforms",
            Anchor::Heps => "#heps",
            Anchor::Capabilities => "#capabilities",
            Anchor::Contact => "#contact",
        }
    }
}

/// One navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub anchor: Anchor,
    pub label: &'static str,
}

pub const NAV: &[NavEntry] = &[
    NavEntry { anchor: Anchor::Platforms, label: "Platforms" },
    NavEntry { anchor: Anchor::Heps, label: "HEPS" },
    NavEntry { anchor: Anchor::Capabilities, label: "Capabilities" },
    NavEntry { anchor: Anchor::Contact, label: "Contact" },
];

/// Links repeated in the footer.
pub const FOOTER_LINKS: &[NavEntry] = &[
    NavEntry { anchor: Anchor::Heps, label: "Technology" },
    NavEntry { anchor: Anchor::Platforms, label: "Platforms" },
    NavEntry { anchor: Anchor::Contact, label: "Contact" },
];

/// Symbolic icon reference. Rendered by [`crate::components::Icon`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    ArrowRight,
    Cpu,
    Gauge,
    Wind,
    Shield,
    Wrench,
    Mail,
    Phone,
    MapPin,
    Menu,
}

/// Fixed identifiers of the spec grid on each platform card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecKey {
    MaxTakeoffWeight,
    Endurance,
    Range,
    Payload,
}

impl SpecKey {
    pub const fn ident(self) -> &'static str {
        match self {
            SpecKey::MaxTakeoffWeight => "MaxTakeoffWeight",
            SpecKey::Endurance => "Endurance",
            SpecKey::Range => "Range",
            SpecKey::Payload => "Payload",
        }
    }

    /// Human label, see [`spec_label`].
    pub fn label(self) -> String {
        spec_label(self.ident())
    }
}

/// Turn a CamelCase key into a spaced label: `"MaxTakeoffWeight"` becomes
/// `"Max Takeoff Weight"`.
///
/// A space goes before every uppercase letter except the first character,
/// and never after an existing space, so running it on its own output is a
/// no-op.
pub fn spec_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;
    for c in key.chars() {
        if c.is_uppercase() && prev.is_some_and(|p| p != ' ') {
            label.push(' ');
        }
        label.push(c);
        prev = Some(c);
    }
    label
}

/// One product configuration of the UAS family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductVariant {
    pub name: &'static str,
    pub weight_class: &'static str,
    pub propulsion: &'static str,
    /// Rendered as a bullet list, order preserved
    pub highlights: &'static [&'static str],
    /// Rendered as a two-column grid, order preserved
    pub specs: &'static [(SpecKey, &'static str)],
}

const HEPS_TURBINE: &str = "Hybrid Electric Propulsion System (turbine generator)";

pub const VARIANTS: &[ProductVariant] = &[
    ProductVariant {
        name: "Aurex HEPS-600",
        weight_class: "600 lb class",
        propulsion: HEPS_TURBINE,
        highlights: &[
            "Heavy-lift logistics & ISR",
            "Modular payload architecture",
            "Runway-independent ops (VTOL/STOL capable platform family)",
        ],
        specs: &[
            (SpecKey::MaxTakeoffWeight, "~600 lb class (TBD)"),
            (SpecKey::Endurance, "TBD"),
            (SpecKey::Range, "TBD"),
            (SpecKey::Payload, "TBD"),
        ],
    },
    ProductVariant {
        name: "Aurex HEPS-330",
        weight_class: "330 lb class",
        propulsion: HEPS_TURBINE,
        highlights: &[
            "Balanced endurance & payload",
            "Interchangeable mission bays",
            "Field-serviceable power module",
        ],
        specs: &[
            (SpecKey::MaxTakeoffWeight, "~330 lb class (TBD)"),
            (SpecKey::Endurance, "TBD"),
            (SpecKey::Range, "TBD"),
            (SpecKey::Payload, "TBD"),
        ],
    },
    ProductVariant {
        name: "Aurex HEPS-55",
        weight_class: "55 lb class",
        propulsion: HEPS_TURBINE,
        highlights: &[
            "Part 107-friendly weight class",
            "Rapid deployment kit",
            "Shared avionics with the family",
        ],
        specs: &[
            (SpecKey::MaxTakeoffWeight, "≤55 lb (TBD)"),
            (SpecKey::Endurance, "TBD"),
            (SpecKey::Range, "TBD"),
            (SpecKey::Payload, "TBD"),
        ],
    },
];

/// A capability highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: Glyph,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Glyph::Cpu,
        title: "HEPS Architecture",
        description: "Turbine-driven generator feeding high-voltage bus with intelligent power management for quiet, efficient electric thrust and long on-station times.",
    },
    Feature {
        icon: Glyph::Gauge,
        title: "Mission Modularity",
        description: "Common avionics, swappable mission bays, and unified GCS across the family to reduce training and logistics burden.",
    },
    Feature {
        icon: Glyph::Wind,
        title: "Fieldability",
        description: "Ruggedized airframes with quick-attach wings/booms and hot-swap power modules for austere operations.",
    },
    Feature {
        icon: Glyph::Shield,
        title: "Safety & Compliance",
        description: "Redundant power paths, health monitoring, and ops documentation aligned with regulatory pathways for each weight class.",
    },
];

/// Glyph bullets in the HEPS explainer.
pub const HEPS_BENEFITS: &[(Glyph, &str)] = &[
    (
        Glyph::Gauge,
        "Extended on-station via optimized generator set and energy management.",
    ),
    (
        Glyph::Wind,
        "Reduced acoustic signature vs. conventional turbines during key phases.",
    ),
    (
        Glyph::Wrench,
        "Line-replaceable power module for fast field maintenance.",
    ),
];

/// Numbered steps of the notional powertrain.
pub const REFERENCE_ARCHITECTURE: &[&str] = &[
    "Turbine genset → high-voltage DC bus",
    "Battery pack (buffer) with BMS → DC bus",
    "Inverters → distributed electric motors",
    "Supervisory power controller (power sharing & health)",
    "Optional external power for silent startup",
];

/// Contact block next to the inquiry form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetails {
    pub email: &'static str,
    pub phone: &'static str,
    pub headquarters: &'static str,
}

pub const CONTACT_DETAILS: ContactDetails = ContactDetails {
    email: "ops@aurex.aero",
    phone: "+1 (555) 000-0000",
    headquarters: "Headquarters • TBD",
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spec_label_splits_camel_case() {
        assert_eq!(spec_label("MaxTakeoffWeight"), "Max Takeoff Weight");
        assert_eq!(spec_label("Endurance"), "Endurance");
        assert_eq!(spec_label(""), "");
    }

    #[test]
    fn spec_label_is_idempotent() {
        for key in ["MaxTakeoffWeight", "Range", "Payload", "ABC"] {
            let once = spec_label(key);
            assert_eq!(spec_label(&once), once);
        }
    }

    #[test]
    fn spec_label_has_no_leading_space() {
        assert!(!spec_label("Payload").starts_with(' '));
        assert_eq!(spec_label("ABC"), "A B C");
    }

    #[test]
    fn every_variant_carries_the_fixed_spec_keys() {
        let expected = [
            SpecKey::MaxTakeoffWeight,
            SpecKey::Endurance,
            SpecKey::Range,
            SpecKey::Payload,
        ];
        for variant in VARIANTS {
            let keys: Vec<SpecKey> = variant.specs.iter().map(|(k, _)| *k).collect();
            assert_eq!(keys, expected, "{}", variant.name);
        }
    }

    #[test]
    fn nav_covers_every_anchor_once() {
        let anchors: Vec<Anchor> = NAV.iter().map(|n| n.anchor).collect();
        assert_eq!(anchors, Anchor::ALL.to_vec());
    }

    #[test]
    fn anchor_href_points_at_id() {
        for anchor in Anchor::ALL {
            assert_eq!(anchor.href(), format!("#{}", anchor.id()));
        }
    }

    #[test]
    fn palette_renders_css_vars() {
        let vars = BRAND.palette.css_vars();
        assert!(vars.contains("--brand-primary: #E53935;"));
        assert!(vars.contains("--brand-dark: #0B0B0C;"));
    }
}
