pub mod checker;
pub mod detector;
