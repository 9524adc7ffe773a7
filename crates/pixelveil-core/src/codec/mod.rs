pub mod image;
pub mod text;

pub use image::{extract_image, hide_image, DEFAULT_SEED};
pub use text::{extract_text, hide_text};
