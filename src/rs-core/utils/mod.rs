pub mod logger;
pub mod url;
