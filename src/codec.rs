//! Conversion between ASCII messages and marker sequences.

use log::debug;

use crate::codebook::{char_for, codeword_for, CODEWORD_LEN};
use crate::error::ZwError;

/// Encodes a printable ASCII message into zero-width markers.
///
/// The output holds exactly three markers per input character. An empty
/// message encodes to an empty string.
///
/// # Errors
/// [`ZwError::NonAsciiCharacter`] for the first character outside 0x20..=0x7e.
pub fn encode(message: &str) -> Result<String, ZwError> {
    // every marker is 3 bytes in UTF-8
    let mut encoded = String::with_capacity(message.len() * CODEWORD_LEN * 3);

    for (position, character) in message.chars().enumerate() {
        let codeword =
            codeword_for(character).ok_or(ZwError::NonAsciiCharacter { character, position })?;
        encoded.extend(codeword);
    }

    debug!("Encoded {} characters", message.len());
    Ok(encoded)
}

/// Decodes a marker-only string back into ASCII.
///
/// The input must already be filtered down to markers; see
/// [`retrieve`](crate::retrieve) for carriers with visible text.
///
/// # Errors
/// - [`ZwError::InvalidLength`] if the marker count is not a multiple of 3
/// - [`ZwError::UnknownCodeword`] if a chunk is not a codebook entry
pub fn decode(encoded: &str) -> Result<String, ZwError> {
    let markers: Vec<char> = encoded.chars().collect();
    decode_markers(&markers)
}

pub(crate) fn decode_markers(markers: &[char]) -> Result<String, ZwError> {
    if markers.len() % CODEWORD_LEN != 0 {
        return Err(ZwError::InvalidLength { len: markers.len() });
    }

    let message = markers
        .chunks(CODEWORD_LEN)
        .enumerate()
        .map(|(index, chunk)| char_for(chunk).ok_or(ZwError::UnknownCodeword { index }))
        .collect::<Result<String, _>>()?;

    debug!("Decoded {} markers into {} characters", markers.len(), message.len());
    Ok(message)
}
