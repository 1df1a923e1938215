//! The fixed mapping between printable ASCII and zero-width codewords.
//!
//! Codewords are three markers long. The first two positions range over all
//! eight markers and the third over the first two only, giving 128 candidates
//! enumerated in row-major order; the first 95 are kept, one per printable
//! ASCII character from space (0x20) to tilde (0x7e).
//!
//! The table is built at compile time, so it is shared read-only by every
//! thread without synchronization.

/// Invisible code points used as codeword symbols, in alphabet order.
///
/// The order is part of the wire format: changing it breaks every carrier
/// produced so far.
pub const MARKERS: [char; 8] = [
    '\u{200B}', // zero-width space
    '\u{200C}', // zero-width non-joiner
    '\u{200D}', // zero-width joiner
    '\u{200E}', // left-to-right mark
    '\u{200F}', // right-to-left mark
    '\u{202A}', // left-to-right embedding
    '\u{202B}', // right-to-left embedding
    '\u{2060}', // word joiner
];

/// Markers per encoded character.
pub const CODEWORD_LEN: usize = 3;

/// Number of markers allowed in the last codeword position.
const LAST_POSITION_SYMBOLS: usize = 2;

/// First printable ASCII code (space).
pub const FIRST_CODE: u32 = 0x20;

/// Last printable ASCII code (tilde).
pub const LAST_CODE: u32 = 0x7e;

/// Number of codewords kept in the codebook.
pub const CODEBOOK_SIZE: usize = (LAST_CODE - FIRST_CODE + 1) as usize;

/// A sequence of three markers standing for one ASCII character.
pub type Codeword = [char; CODEWORD_LEN];

/// Codewords indexed by `code - 0x20`.
pub const CODEBOOK: [Codeword; CODEBOOK_SIZE] = build_codebook();

const fn build_codebook() -> [Codeword; CODEBOOK_SIZE] {
    let mut table = [[MARKERS[0]; CODEWORD_LEN]; CODEBOOK_SIZE];
    let mut k = 0;

    let mut i1 = 0;
    while i1 < MARKERS.len() {
        let mut i2 = 0;
        while i2 < MARKERS.len() {
            let mut i3 = 0;
            while i3 < LAST_POSITION_SYMBOLS {
                if k < CODEBOOK_SIZE {
                    table[k] = [MARKERS[i1], MARKERS[i2], MARKERS[i3]];
                }
                k += 1;
                i3 += 1;
            }
            i2 += 1;
        }
        i1 += 1;
    }

    table
}

/// Returns true if `c` is one of the eight markers.
pub fn is_marker(c: char) -> bool {
    marker_index(c).is_some()
}

fn marker_index(c: char) -> Option<usize> {
    MARKERS.iter().position(|&m| m == c)
}

/// Returns true if `c` can be encoded (printable ASCII).
pub fn is_encodable(c: char) -> bool {
    (FIRST_CODE..=LAST_CODE).contains(&(c as u32))
}

/// Forward lookup: the codeword for a printable ASCII character.
///
/// Returns `None` for anything outside 0x20..=0x7e.
pub fn codeword_for(c: char) -> Option<Codeword> {
    if !is_encodable(c) {
        return None;
    }
    Some(CODEBOOK[(c as u32 - FIRST_CODE) as usize])
}

/// Reverse lookup: the ASCII character a codeword stands for.
///
/// The table position is recovered from the alphabet positions of the three
/// markers, mirroring the enumeration order used to build [`CODEBOOK`].
/// Returns `None` if `chunk` is not exactly one codebook entry.
pub fn char_for(chunk: &[char]) -> Option<char> {
    let &[first, second, third] = chunk else {
        return None;
    };

    let i1 = marker_index(first)?;
    let i2 = marker_index(second)?;
    let i3 = marker_index(third)?;
    if i3 >= LAST_POSITION_SYMBOLS {
        return None;
    }

    let k = (i1 * MARKERS.len() + i2) * LAST_POSITION_SYMBOLS + i3;
    if k >= CODEBOOK_SIZE {
        return None;
    }

    char::from_u32(FIRST_CODE + k as u32)
}

/// Iterates over every `(character, codeword)` pair in codebook order.
pub fn entries() -> impl Iterator<Item = (char, Codeword)> {
    CODEBOOK.iter().enumerate().filter_map(|(k, codeword)| {
        char::from_u32(FIRST_CODE + k as u32).map(|c| (c, *codeword))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codebook_entries_distinct() {
        let unique: HashSet<Codeword> = CODEBOOK.iter().copied().collect();
        assert_eq!(unique.len(), CODEBOOK_SIZE);
        assert_eq!(CODEBOOK_SIZE, 95);
    }

    #[test]
    fn test_markers_distinct() {
        let unique: HashSet<char> = MARKERS.iter().copied().collect();
        assert_eq!(unique.len(), MARKERS.len());
    }

    #[test]
    fn test_enumeration_order() {
        // space is the first candidate, '!' flips the last position
        assert_eq!(CODEBOOK[0], ['\u{200B}', '\u{200B}', '\u{200B}']);
        assert_eq!(CODEBOOK[1], ['\u{200B}', '\u{200B}', '\u{200C}']);
        // third candidate advances the middle position
        assert_eq!(CODEBOOK[2], ['\u{200B}', '\u{200C}', '\u{200B}']);
        // '~' is candidate 94 = (5, 7, 0)
        assert_eq!(CODEBOOK[94], ['\u{202A}', '\u{2060}', '\u{200B}']);
    }

    #[test]
    fn test_third_position_uses_first_two_markers() {
        for codeword in CODEBOOK.iter() {
            assert!(codeword[2] == MARKERS[0] || codeword[2] == MARKERS[1]);
        }
    }

    #[test]
    fn test_forward_lookup() {
        assert_eq!(codeword_for(' '), Some(CODEBOOK[0]));
        assert_eq!(codeword_for('~'), Some(CODEBOOK[94]));
        assert_eq!(codeword_for('H'), Some(['\u{200D}', '\u{200F}', '\u{200B}']));
        assert_eq!(codeword_for('\n'), None);
        assert_eq!(codeword_for('\u{7f}'), None);
        assert_eq!(codeword_for('é'), None);
    }

    #[test]
    fn test_reverse_lookup_matches_table_search() {
        for (k, codeword) in CODEBOOK.iter().enumerate() {
            let position = CODEBOOK.iter().position(|c| c == codeword).unwrap();
            assert_eq!(position, k);
            assert_eq!(char_for(codeword), char::from_u32(FIRST_CODE + k as u32));
        }
    }

    #[test]
    fn test_reverse_lookup_rejects_unknown() {
        // third position outside the first two markers
        assert_eq!(char_for(&['\u{2060}', '\u{2060}', '\u{2060}']), None);
        // candidate 95, just past the kept range
        assert_eq!(char_for(&['\u{202A}', '\u{2060}', '\u{200C}']), None);
        // candidate 96
        assert_eq!(char_for(&['\u{202B}', '\u{200B}', '\u{200B}']), None);
        // not markers at all
        assert_eq!(char_for(&['a', 'b', 'c']), None);
        // wrong length
        assert_eq!(char_for(&['\u{200B}', '\u{200B}']), None);
        assert_eq!(char_for(&[]), None);
    }

    #[test]
    fn test_is_marker() {
        for m in MARKERS {
            assert!(is_marker(m));
        }
        assert!(!is_marker('a'));
        assert!(!is_marker('\u{FEFF}'));
    }

    #[test]
    fn test_entries_cover_printable_ascii() {
        let chars: String = entries().map(|(c, _)| c).collect();
        assert_eq!(chars.len(), 95);
        assert!(chars.starts_with(' '));
        assert!(chars.ends_with('~'));
    }
}
