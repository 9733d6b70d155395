pub mod catalog;
pub mod cli;
pub mod generate;
pub mod magick;
