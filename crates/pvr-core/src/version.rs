//! Semantic version value type and bump labels.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, PvrError};

/// Three component `MAJOR.MINOR.PATCH` version attached to every resource.
///
/// Ordering is lexicographic over the numeric triple, so `10.0.0 > 9.0.0` and
/// `1.10.0 > 1.9.0`. Construction through [`Version::parse`] is strict; raw
/// strings that do not have exactly three numeric components are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    /// Major component.
    pub major: u64,
    /// Minor component.
    pub minor: u64,
    /// Patch component.
    pub patch: u64,
}

impl Version {
    /// Version assigned to brand new resources.
    pub const INITIAL: Version = Version::new(1, 0, 0);

    /// Creates a version from its components.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parses a `MAJOR.MINOR.PATCH` string.
    pub fn parse(input: &str) -> Result<Self, PvrError> {
        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() != 3 {
            return Err(malformed(
                input,
                format!("expected 3 dot-separated components, found {}", parts.len()),
            ));
        }
        let mut components = [0u64; 3];
        for (slot, part) in components.iter_mut().zip(parts.iter()) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed(input, format!("component '{part}' is not numeric")));
            }
            *slot = part
                .parse()
                .map_err(|_| malformed(input, format!("component '{part}' is out of range")))?;
        }
        Ok(Self::new(components[0], components[1], components[2]))
    }

    /// Returns the version with the patch component incremented.
    pub fn next_patch(&self) -> Self {
        Self::new(self.major, self.minor, self.patch.saturating_add(1))
    }

    /// Classifies the change from `previous` to `self` by the first differing component.
    ///
    /// Identical versions and pure patch changes both report [`Bump::Patch`].
    pub fn bump_from(&self, previous: &Version) -> Bump {
        if self.major != previous.major {
            Bump::Major
        } else if self.minor != previous.minor {
            Bump::Minor
        } else {
            Bump::Patch
        }
    }

    /// Compares two versions, mirroring the `-1 / 0 / 1` comparator contract.
    pub fn compare(&self, other: &Version) -> i8 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = PvrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = PvrError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Version> for String {
    fn from(value: Version) -> Self {
        value.to_string()
    }
}

fn malformed(input: &str, reason: String) -> PvrError {
    PvrError::Version(
        ErrorInfo::new("pvr_core.malformed_version", format!("malformed version: {reason}"))
            .with_context("input", input)
            .with_hint("versions must look like MAJOR.MINOR.PATCH, e.g. 1.2.3"),
    )
}

/// Informational label describing how a version relates to its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bump {
    /// Breaking change.
    Major,
    /// Additive change.
    Minor,
    /// Fix or wording change.
    Patch,
}

impl Bump {
    /// All bump labels in canonical order.
    pub const ALL: [Bump; 3] = [Bump::Major, Bump::Minor, Bump::Patch];

    /// Lowercase label used in serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Bump::Major => "major",
            Bump::Minor => "minor",
            Bump::Patch => "patch",
        }
    }
}

impl fmt::Display for Bump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
