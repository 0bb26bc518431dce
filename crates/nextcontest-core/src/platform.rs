//! The fixed set of supported contest platforms.
//!
//! The platform set is small, known in advance, and changes rarely, so it is
//! modeled as a closed enum rather than an open registry. [`Platform::ALL`]
//! defines the order in which platforms are aggregated and in which their
//! records appear in the combined output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A contest platform supported by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// CodeChef (<https://www.codechef.com>).
    CodeChef,
    /// Codeforces (<https://codeforces.com>).
    Codeforces,
    /// GeeksforGeeks practice contests (<https://practice.geeksforgeeks.org>).
    GeeksforGeeks,
    /// LeetCode (<https://leetcode.com>).
    LeetCode,
    /// HackerEarth challenges (<https://www.hackerearth.com>).
    HackerEarth,
    /// AtCoder (<https://atcoder.jp>).
    AtCoder,
}

impl Platform {
    /// All platforms, in the declared aggregation order.
    ///
    /// The combined output concatenates per-platform results in exactly this
    /// order, regardless of which fetch finishes first.
    pub const ALL: [Platform; 6] = [
        Platform::CodeChef,
        Platform::Codeforces,
        Platform::GeeksforGeeks,
        Platform::LeetCode,
        Platform::HackerEarth,
        Platform::AtCoder,
    ];

    /// Returns the canonical display name, which is also the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::CodeChef => "CodeChef",
            Platform::Codeforces => "Codeforces",
            Platform::GeeksforGeeks => "GeeksforGeeks",
            Platform::LeetCode => "LeetCode",
            Platform::HackerEarth => "HackerEarth",
            Platform::AtCoder => "AtCoder",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown platform name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    /// Parses a platform name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "codechef" => Ok(Platform::CodeChef),
            "codeforces" => Ok(Platform::Codeforces),
            "geeksforgeeks" => Ok(Platform::GeeksforGeeks),
            "leetcode" => Ok(Platform::LeetCode),
            "hackerearth" => Ok(Platform::HackerEarth),
            "atcoder" => Ok(Platform::AtCoder),
            _ => Err(UnknownPlatform(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_order() {
        assert_eq!(Platform::ALL[0], Platform::CodeChef);
        assert_eq!(Platform::ALL[5], Platform::AtCoder);
        assert_eq!(Platform::ALL.len(), 6);
    }

    #[test]
    fn display_names() {
        assert_eq!(Platform::GeeksforGeeks.to_string(), "GeeksforGeeks");
        assert_eq!(Platform::LeetCode.as_str(), "LeetCode");
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&Platform::HackerEarth).unwrap();
        assert_eq!(json, "\"HackerEarth\"");

        let parsed: Platform = serde_json::from_str("\"AtCoder\"").unwrap();
        assert_eq!(parsed, Platform::AtCoder);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("codeforces".parse::<Platform>(), Ok(Platform::Codeforces));
        assert_eq!("CodeChef".parse::<Platform>(), Ok(Platform::CodeChef));
        assert_eq!("LEETCODE".parse::<Platform>(), Ok(Platform::LeetCode));
        assert!("topcoder".parse::<Platform>().is_err());
    }
}
