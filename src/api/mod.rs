pub mod compute;
pub mod identity;
pub mod monitoring;
