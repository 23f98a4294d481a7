// Reusable library API, visible to both the CLI and library consumers
pub mod dictionary;
pub mod errors;
pub mod finder;
pub mod letters;
pub mod log;
pub mod longest;
pub mod validate;
