pub mod share;
pub mod snapshot;
