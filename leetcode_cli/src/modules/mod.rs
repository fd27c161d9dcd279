pub mod format;
pub mod utils;
