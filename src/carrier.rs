//! Splicing encoded messages into carrier text and pulling them back out.
//!
//! Positions are counted in Unicode scalar values (`char`), both when
//! splitting the carrier and when scanning it for markers, so a multi-byte
//! character is never cut in half.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::codebook::{is_marker, CODEWORD_LEN};
use crate::codec::{decode_markers, encode};
use crate::error::ZwError;

/// Where the encoded markers go in the carrier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    /// At character index `len / 2` (rounded down).
    #[default]
    Middle,
    /// Before the first character.
    Start,
    /// After the last character.
    End,
}

/// Configuration for [`hide_with_config`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HideConfig {
    /// Insertion point inside the carrier.
    pub position: InsertPosition,
}

impl HideConfig {
    /// Creates a config inserting at `position`.
    pub fn at(position: InsertPosition) -> Self {
        Self { position }
    }
}

/// Hides `secret` at the middle of `carrier`.
///
/// Returns a new string; `carrier` is left untouched. An empty secret
/// returns the carrier unchanged and an empty carrier returns just the
/// markers.
///
/// # Errors
/// [`ZwError::NonAsciiCharacter`] if `secret` is not printable ASCII.
pub fn hide(secret: &str, carrier: &str) -> Result<String, ZwError> {
    hide_with_config(secret, carrier, &HideConfig::default())
}

/// Hides `secret` in `carrier` at the configured position.
pub fn hide_with_config(secret: &str, carrier: &str, config: &HideConfig) -> Result<String, ZwError> {
    let encoded = encode(secret)?;

    let split = split_index(carrier, config.position);
    let (left, right) = carrier.split_at(split);

    let mut result = String::with_capacity(carrier.len() + encoded.len());
    result.push_str(left);
    result.push_str(&encoded);
    result.push_str(right);

    debug!(
        "Hid {} markers at byte offset {} of a {}-byte carrier",
        encoded.chars().count(),
        split,
        carrier.len()
    );
    Ok(result)
}

/// Extracts the hidden message from `carrier`.
///
/// Every non-marker character is ignored. A carrier with no markers yields
/// an empty message.
///
/// # Errors
/// - [`ZwError::InvalidLength`] if the marker count is not a multiple of 3
/// - [`ZwError::UnknownCodeword`] if stray or corrupted markers are present
pub fn retrieve(carrier: &str) -> Result<String, ZwError> {
    let markers: Vec<char> = carrier.chars().filter(|&c| is_marker(c)).collect();
    debug!("Found {} markers in carrier", markers.len());
    decode_markers(&markers)
}

/// Number of markers [`hide`] inserts for `secret`.
pub fn capacity_cost(secret: &str) -> usize {
    secret.chars().count() * CODEWORD_LEN
}

/// Byte offset of the insertion point, always on a char boundary.
fn split_index(carrier: &str, position: InsertPosition) -> usize {
    match position {
        InsertPosition::Start => 0,
        InsertPosition::End => carrier.len(),
        InsertPosition::Middle => {
            let middle = carrier.chars().count() / 2;
            carrier
                .char_indices()
                .nth(middle)
                .map_or(carrier.len(), |(offset, _)| offset)
        }
    }
}
