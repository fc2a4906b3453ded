use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// The literal every release artifact key carries in front of its version.
pub const RELEASE_KEY_PREFIX: &str = "nodebox-dashboard-v";

// `[0-9]` rather than `\d`, which would also accept non-ASCII digits.
static RELEASE_KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"nodebox-dashboard-v([0-9]+)\.([0-9]+)\.([0-9]+)")
        .expect("release key pattern is valid")
});

/// A `major.minor.patch` triple embedded in a release object key.
///
/// Field order matters: the derived `Ord` compares `major`, then `minor`,
/// then `patch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Extracts the version from an object key such as
    /// `builds/nodebox-dashboard-v1.10.0.zip`.
    ///
    /// The match is not anchored, so anything before the marker or after the
    /// patch number is ignored. Returns `None` when the key carries no version
    /// or a component does not fit in a `u64`.
    pub fn from_key(key: &str) -> Option<Self> {
        let caps = RELEASE_KEY_PATTERN.captures(key)?;
        let major = caps[1].parse().ok()?;
        let minor = caps[2].parse().ok()?;
        let patch = caps[3].parse().ok()?;
        Some(Version::new(major, minor, patch))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
