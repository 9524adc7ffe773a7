//! # Pixelveil Core API
//!
//! The codec exposes four pure operations over in-memory RGB pixel buffers:
//! - [`hide_text`] / [`extract_text`] for text payloads, framed with a
//!   16 bit end-of-message sentinel and spread over the channel LSBs in
//!   raster order
//! - [`hide_image`] / [`extract_image`] for image payloads, spread four
//!   high bits per channel over cover coordinates picked by the
//!   deterministic seeded [`sampler`]
//!
//! File handling lives at the edges: [`media::Media`] decodes lossless
//! carriers (PNG, BMP) and persists stego results, and the [`api`] builders
//! wire both together for the command line front end.
//!
//! All operations are synchronous transformations without shared state;
//! hiding returns a fresh buffer and never touches the input.
//!
//! # Usage Examples
//!
//! ## Hide a message in an image
//!
//! ```rust
//! use image::RgbImage;
//! use pixelveil_core::{extract_text, hide_text};
//!
//! let cover = RgbImage::from_fn(64, 64, |x, y| image::Rgb([x as u8, y as u8, 128]));
//!
//! let stego = hide_text(&cover, "Hello, World!").expect("message must fit");
//! assert_eq!(extract_text(&stego), Some("Hello, World!".to_string()));
//! ```
//!
//! ## Hide an image inside an image
//!
//! ```rust
//! use image::RgbImage;
//! use pixelveil_core::{extract_image, hide_image, DEFAULT_SEED};
//!
//! let cover = RgbImage::from_fn(64, 64, |x, y| image::Rgb([x as u8, y as u8, 128]));
//! let secret = RgbImage::from_fn(8, 8, |x, y| image::Rgb([(x * 30) as u8, (y * 30) as u8, 0]));
//!
//! let stego = hide_image(&cover, &secret, DEFAULT_SEED).expect("secret must fit");
//! let recovered = extract_image(&stego, DEFAULT_SEED).expect("header must be intact");
//!
//! // recovery is lossy: the low nibble of every channel is zeroed
//! assert_eq!(recovered.dimensions(), secret.dimensions());
//! assert_eq!(recovered.get_pixel(1, 0).0[0], (30 >> 4) << 4);
//! ```

pub mod api;
pub mod bits;
pub mod codec;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;
pub mod sampler;

pub use codec::image::{extract_image, hide_image, DEFAULT_SEED};
pub use codec::text::{extract_text, hide_text};
pub use error::StegoError;
pub use media::{Media, Persist, RgbImage};
pub use result::Result;
