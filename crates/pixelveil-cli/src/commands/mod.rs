pub mod hide_image;
pub mod hide_text;
pub mod unveil_image;
pub mod unveil_text;
