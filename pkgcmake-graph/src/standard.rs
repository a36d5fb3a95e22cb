//! C-family language standards declared by native targets.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Language family a standard belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFamily {
    /// C
    C,
    /// C++
    Cxx,
}

/// A C or C++ language standard such as `c11`, `gnu99` or `c++17`.
///
/// The level is stored as the value CMake expects for `C_STANDARD` /
/// `CXX_STANDARD`, so aliases collapse (`c89` and `c90` are both `90`,
/// `c++03` is `98`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct LanguageStandard {
    family: StandardFamily,
    level: u8,
    gnu: bool,
}

/// Error returned for a language standard string that is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language standard '{0}', expected e.g. 'c11', 'gnu99', 'iso9899:2011' or 'c++17'")]
pub struct StandardParseError(String);

impl LanguageStandard {
    /// Language family of this standard.
    pub fn family(&self) -> StandardFamily {
        self.family
    }

    /// Standard level as understood by CMake (`11`, `17`, `98`, ...).
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Whether the GNU dialect was requested.
    pub fn is_gnu(&self) -> bool {
        self.gnu
    }

    /// CMake target property holding the standard level.
    pub fn cmake_property(&self) -> &'static str {
        match self.family {
            StandardFamily::C => "C_STANDARD",
            StandardFamily::Cxx => "CXX_STANDARD",
        }
    }

    /// CMake target property enabling compiler extensions.
    pub fn extensions_property(&self) -> &'static str {
        match self.family {
            StandardFamily::C => "C_EXTENSIONS",
            StandardFamily::Cxx => "CXX_EXTENSIONS",
        }
    }
}

impl FromStr for LanguageStandard {
    type Err = StandardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if let Some(year) = lower.strip_prefix("iso9899:") {
            let level = match year {
                "1990" | "199409" => 90,
                "1999" => 99,
                "2011" => 11,
                "2017" | "2018" => 17,
                _ => return Err(StandardParseError(s.to_string())),
            };
            return Ok(Self {
                family: StandardFamily::C,
                level,
                gnu: false,
            });
        }

        let (family, gnu, version) = if let Some(v) = lower.strip_prefix("gnu++") {
            (StandardFamily::Cxx, true, v)
        } else if let Some(v) = lower.strip_prefix("c++") {
            (StandardFamily::Cxx, false, v)
        } else if let Some(v) = lower.strip_prefix("gnu") {
            (StandardFamily::C, true, v)
        } else if let Some(v) = lower.strip_prefix('c') {
            (StandardFamily::C, false, v)
        } else {
            return Err(StandardParseError(s.to_string()));
        };

        let level = match (family, version) {
            (StandardFamily::C, "89" | "90") => 90,
            (StandardFamily::C, "99") => 99,
            (StandardFamily::C, "11") => 11,
            (StandardFamily::C, "17" | "18") => 17,
            (StandardFamily::C, "2x" | "23") => 23,
            (StandardFamily::Cxx, "98" | "03") => 98,
            (StandardFamily::Cxx, "11") => 11,
            (StandardFamily::Cxx, "14") => 14,
            (StandardFamily::Cxx, "17" | "1z") => 17,
            (StandardFamily::Cxx, "20" | "2a") => 20,
            (StandardFamily::Cxx, "23" | "2b") => 23,
            _ => return Err(StandardParseError(s.to_string())),
        };

        Ok(Self { family, level, gnu })
    }
}

impl TryFrom<String> for LanguageStandard {
    type Error = StandardParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for LanguageStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match (self.family, self.gnu) {
            (StandardFamily::C, false) => "c",
            (StandardFamily::C, true) => "gnu",
            (StandardFamily::Cxx, false) => "c++",
            (StandardFamily::Cxx, true) => "gnu++",
        };
        write!(f, "{}{}", prefix, self.level)
    }
}
