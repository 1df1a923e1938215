//! # zwhide - Hide messages in zero-width characters
//!
//! zwhide hides a short printable-ASCII message inside any text by inserting
//! invisible Unicode characters, and pulls it back out later.
//!
//! ## Overview
//!
//! - Each ASCII character (0x20..=0x7e) maps to a **codeword** of three
//!   invisible markers drawn from an 8-symbol alphabet
//! - The codebook is a fixed bijection built at compile time
//! - [`hide`] splices the encoded markers into the middle of the carrier
//! - [`retrieve`] keeps only the markers of a carrier and decodes them
//!
//! No encryption and no compression: anyone with zwhide can read the
//! message, and editing the carrier can destroy it.
//!
//! ## Example Usage
//!
//! ```rust
//! use zwhide::{hide, retrieve};
//!
//! let carrier = "HelloWorld";
//! let hidden = hide("Hi", carrier).unwrap();
//!
//! // Looks the same when rendered, but carries 6 extra invisible characters
//! assert_eq!(hidden.chars().count(), carrier.chars().count() + 6);
//!
//! assert_eq!(retrieve(&hidden).unwrap(), "Hi");
//! ```
//!
//! ## Modules
//!
//! - [`codebook`]: Marker alphabet and the ASCII/codeword table
//! - [`codec`]: Message encoding and decoding
//! - [`carrier`]: Embedding into and extracting from carrier text
//! - [`error`]: The invalid-input error

/// Crate version, as reported by `zwhide --version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod carrier;
pub mod codebook;
pub mod codec;
pub mod error;

// Re-export commonly used types at the crate root
pub use carrier::{capacity_cost, hide, hide_with_config, retrieve, HideConfig, InsertPosition};
pub use codebook::{Codeword, CODEBOOK, MARKERS};
pub use codec::{decode, encode};
pub use error::ZwError;
