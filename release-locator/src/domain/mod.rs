pub mod release;
pub mod version;

pub use release::{Release, select_latest};
