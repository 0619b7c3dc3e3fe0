//! Shared categorical types used across the whole dashboard.
//!
//! RULE: Borough and CrimeType are closed sets. Adding a variant means
//! updating ALL, label(), and (for CrimeType) color(); the compiler
//! enforces the last two.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

/// One of the six Mexico City alcaldías covered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Borough {
    #[serde(rename = "Álvaro Obregón")]
    AlvaroObregon,
    #[serde(rename = "Coyoacán")]
    Coyoacan,
    #[serde(rename = "Cuauhtémoc")]
    Cuauhtemoc,
    #[serde(rename = "Iztapalapa")]
    Iztapalapa,
    #[serde(rename = "Miguel Hidalgo")]
    MiguelHidalgo,
    #[serde(rename = "Tlalpan")]
    Tlalpan,
}

impl Borough {
    /// Canonical order. Generation draws index into this slice, so
    /// NEVER reorder: that changes every seeded dataset.
    pub const ALL: [Borough; 6] = [
        Self::AlvaroObregon,
        Self::Coyoacan,
        Self::Cuauhtemoc,
        Self::Iztapalapa,
        Self::MiguelHidalgo,
        Self::Tlalpan,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::AlvaroObregon => "Álvaro Obregón",
            Self::Coyoacan      => "Coyoacán",
            Self::Cuauhtemoc    => "Cuauhtémoc",
            Self::Iztapalapa    => "Iztapalapa",
            Self::MiguelHidalgo => "Miguel Hidalgo",
            Self::Tlalpan       => "Tlalpan",
        }
    }

    /// ASCII alias accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::AlvaroObregon => "alvaro_obregon",
            Self::Coyoacan      => "coyoacan",
            Self::Cuauhtemoc    => "cuauhtemoc",
            Self::Iztapalapa    => "iztapalapa",
            Self::MiguelHidalgo => "miguel_hidalgo",
            Self::Tlalpan       => "tlalpan",
        }
    }
}

impl fmt::Display for Borough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Borough {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.label() == s || b.slug() == s)
            .ok_or_else(|| DashboardError::invalid(format!("unknown borough '{s}'")))
    }
}

/// Incident category. Doubles as the color key on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CrimeType {
    #[serde(rename = "Robo a transeúnte")]
    StreetRobbery,
    #[serde(rename = "Homicidio")]
    Homicide,
    #[serde(rename = "Lesiones")]
    Assault,
    #[serde(rename = "Secuestro")]
    Kidnapping,
    #[serde(rename = "Extorsión")]
    Extortion,
}

impl CrimeType {
    /// Canonical order. Same append-only rule as [`Borough::ALL`].
    pub const ALL: [CrimeType; 5] = [
        Self::StreetRobbery,
        Self::Homicide,
        Self::Assault,
        Self::Kidnapping,
        Self::Extortion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::StreetRobbery => "Robo a transeúnte",
            Self::Homicide      => "Homicidio",
            Self::Assault       => "Lesiones",
            Self::Kidnapping    => "Secuestro",
            Self::Extortion     => "Extorsión",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::StreetRobbery => "robo_a_transeunte",
            Self::Homicide      => "homicidio",
            Self::Assault       => "lesiones",
            Self::Kidnapping    => "secuestro",
            Self::Extortion     => "extorsion",
        }
    }

    /// Map fill color. Total over the enum, so a record never lacks one.
    pub fn color(&self) -> Rgba {
        match self {
            Self::StreetRobbery => Rgba::new(255, 0, 0, 160),
            Self::Homicide      => Rgba::new(0, 0, 255, 160),
            Self::Assault       => Rgba::new(0, 255, 0, 160),
            Self::Kidnapping    => Rgba::new(255, 255, 0, 160),
            Self::Extortion     => Rgba::new(255, 165, 0, 160),
        }
    }
}

impl fmt::Display for CrimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CrimeType {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s || c.slug() == s)
            .ok_or_else(|| DashboardError::invalid(format!("unknown crime type '{s}'")))
    }
}

/// An RGBA color, serialized as `[r, g, b, a]` the way map layers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}
