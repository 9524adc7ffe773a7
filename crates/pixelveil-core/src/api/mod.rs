pub mod hide;
pub mod unveil_image;
pub mod unveil_text;
