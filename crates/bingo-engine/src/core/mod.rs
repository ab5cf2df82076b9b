pub mod card;
pub mod catalog;
