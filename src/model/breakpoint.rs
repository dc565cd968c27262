//! Viewport size tiers and per-tier values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Viewports narrower than this are `Mobile`.
pub const MOBILE_BREAKPOINT: u32 = 640;
/// Viewports narrower than this (and at least `MOBILE_BREAKPOINT`) are `Tablet`.
pub const TABLET_BREAKPOINT: u32 = 768;
/// Nominal desktop width.
pub const DESKTOP_BREAKPOINT: u32 = 1024;

/// A named viewport size tier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl Breakpoint {
    /// Tiers from smallest to largest.
    pub const ORDER: [Self; 3] = [Self::Mobile, Self::Tablet, Self::Desktop];

    /// Tier for a viewport width in pixels.
    #[must_use]
    pub const fn from_width(width: u32) -> Self {
        if width < MOBILE_BREAKPOINT {
            Self::Mobile
        } else if width < TABLET_BREAKPOINT {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }

    /// Whether a grid configured to go mobile at `threshold` should render
    /// its mobile layout at this tier.
    ///
    /// Only `Tablet` widens the mobile range; any other threshold means the
    /// mobile layout is used on phones only.
    #[must_use]
    pub const fn shows_mobile_view(self, threshold: Self) -> bool {
        match self {
            Self::Mobile => true,
            Self::Tablet => matches!(threshold, Self::Tablet),
            Self::Desktop => false,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Mobile => 0,
            Self::Tablet => 1,
            Self::Desktop => 2,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value that is either fixed or given per breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsiveValue<T> {
    Fixed(T),
    PerBreakpoint {
        #[serde(default)]
        mobile: Option<T>,
        #[serde(default)]
        tablet: Option<T>,
        #[serde(default)]
        desktop: Option<T>,
    },
}

impl<T: Clone> ResponsiveValue<T> {
    /// The fixed value, if this is not a per-breakpoint value.
    pub fn fixed(&self) -> Option<&T> {
        match self {
            Self::Fixed(v) => Some(v),
            Self::PerBreakpoint { .. } => None,
        }
    }

    fn at(&self, breakpoint: Breakpoint) -> Option<&T> {
        match self {
            Self::Fixed(v) => Some(v),
            Self::PerBreakpoint {
                mobile,
                tablet,
                desktop,
            } => match breakpoint {
                Breakpoint::Mobile => mobile.as_ref(),
                Breakpoint::Tablet => tablet.as_ref(),
                Breakpoint::Desktop => desktop.as_ref(),
            },
        }
    }

    /// Resolve for the current tier: the exact tier, else the nearest smaller
    /// tier, else the nearest larger tier, else `fallback`.
    pub fn resolve(&self, current: Breakpoint, fallback: T) -> T {
        let idx = current.index();
        Breakpoint::ORDER[..=idx]
            .iter()
            .rev()
            .chain(Breakpoint::ORDER[idx + 1..].iter())
            .find_map(|bp| self.at(*bp))
            .cloned()
            .unwrap_or(fallback)
    }
}

impl<T> From<T> for ResponsiveValue<T> {
    fn from(value: T) -> Self {
        Self::Fixed(value)
    }
}
