use crate::domain::version::Version;

/// The object key holding the newest release, together with its parsed
/// version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub key: String,
    pub version: Version,
}

/// Folds over the listed keys and keeps the highest version.
///
/// Keys without an embedded version are skipped. A key only replaces the
/// current best when its version is strictly greater, so among equal
/// versions the first key seen wins.
pub fn select_latest<I>(keys: I) -> Option<Release>
where
    I: IntoIterator<Item = String>,
{
    keys.into_iter().fold(None, |best: Option<Release>, key| {
        let Some(version) = Version::from_key(&key) else {
            tracing::debug!("skipping `{key}`: no release version in key");
            return best;
        };
        match best {
            Some(current) if version <= current.version => Some(current),
            _ => Some(Release { key, version }),
        }
    })
}
