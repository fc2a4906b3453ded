use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::utils::cli::Args;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageType {
    S3,
    Filesystem,
}

impl FromStr for StorageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "S3" => Ok(StorageType::S3),
            "FILESYSTEM" => Ok(StorageType::Filesystem),
            other => Err(format!(
                "RELEASE_LOCATOR_STORAGE `{other}` is not supported, expected `S3` or `FILESYSTEM`"
            )),
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageType::S3 => write!(f, "S3"),
            StorageType::Filesystem => write!(f, "FILESYSTEM"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub storage_typ: StorageType,
    pub root_dir: String,
    pub bucket: String,
    pub region: String,
    pub endpoint: Option<String>,
    /// Always ends with `/`.
    pub download_base_url: String,
}

impl Config {
    /// Checks the command line and environment, reporting every problem at
    /// once rather than stopping at the first.
    pub(crate) async fn validate(args: &Args) -> Result<Config, Vec<String>> {
        let mut validation_errors = Vec::new();

        let storage_typ = match args.storage.parse::<StorageType>() {
            Ok(typ) => Some(typ),
            Err(e) => {
                validation_errors.push(e);
                None
            }
        };

        if storage_typ == Some(StorageType::Filesystem) {
            let root_dir = Path::new(&args.root);
            match tokio::fs::metadata(root_dir).await {
                Ok(meta) if !meta.is_dir() => validation_errors.push(format!(
                    "RELEASE_LOCATOR_ROOTDIR `{}` exists but is not a directory",
                    args.root,
                )),
                Ok(_) => {}
                Err(_) => validation_errors.push(format!(
                    "RELEASE_LOCATOR_ROOTDIR `{}` does not exist.",
                    args.root,
                )),
            }
        }

        if storage_typ == Some(StorageType::S3) && args.bucket.trim().is_empty() {
            validation_errors.push("RELEASE_LOCATOR_BUCKET must not be empty".to_string());
        }

        let base = args.download_base_url.trim();
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            validation_errors.push(format!(
                "RELEASE_LOCATOR_DOWNLOAD_BASE_URL `{base}` must start with http:// or https://",
            ));
        }
        let download_base_url = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };

        match storage_typ {
            Some(storage_typ) if validation_errors.is_empty() => Ok(Config {
                host: args.host.clone(),
                port: args.port,
                storage_typ,
                root_dir: args.root.clone(),
                bucket: args.bucket.clone(),
                region: args.region.clone(),
                endpoint: args.endpoint.clone(),
                download_base_url,
            }),
            _ => Err(validation_errors),
        }
    }
}
