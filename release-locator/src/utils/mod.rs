pub mod cli;
pub mod state;
pub mod url;
