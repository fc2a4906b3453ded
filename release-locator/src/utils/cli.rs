use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// Listening host
    #[arg(long, env = "RELEASE_LOCATOR_HOST", default_value = "127.0.0.1")]
    pub(crate) host: String,

    /// Listening port
    #[arg(short, long, env = "RELEASE_LOCATOR_PORT", default_value_t = 8787)]
    pub(crate) port: u16,

    /// Storage backend type (`S3` or `FILESYSTEM`)
    #[arg(short, long, env = "RELEASE_LOCATOR_STORAGE", default_value = "S3")]
    pub(crate) storage: String,

    /// Directory served as the bucket by the FILESYSTEM backend
    #[arg(long, env = "RELEASE_LOCATOR_ROOTDIR", default_value = "./bucket")]
    pub(crate) root: String,

    /// Bucket holding the release artifacts
    #[arg(long, env = "RELEASE_LOCATOR_BUCKET", default_value = "nodebox")]
    pub(crate) bucket: String,

    /// Custom S3 endpoint, e.g. an R2 account endpoint
    #[arg(long, env = "RELEASE_LOCATOR_S3_ENDPOINT")]
    pub(crate) endpoint: Option<String>,

    /// S3 region
    #[arg(long, env = "RELEASE_LOCATOR_S3_REGION", default_value = "auto")]
    pub(crate) region: String,

    /// Public URL the object keys are appended to
    #[arg(
        long,
        env = "RELEASE_LOCATOR_DOWNLOAD_BASE_URL",
        default_value = "https://bucket.nodebox.cloud/"
    )]
    pub(crate) download_base_url: String,
}
