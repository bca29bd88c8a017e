//! Workspace-name codec.
//!
//! Hyprland has one flat namespace of workspace names shared by every
//! monitor, so a "local slot 3 on monitor 1" has to be multiplexed into a
//! single plain-text name.  The scheme used here keeps the name
//! human-legible — it starts with the decimal slot number, so Hyprland's
//! own overlays show something sensible — and hides the real identity in a
//! suffix of invisible characters:
//!
//! ```text
//! encode(monitor, ordinal) = (ordinal + 1) as decimal digits
//!                          + ALPHABET[monitor]              (marker)
//!                          + ALPHABET[d] for each decimal digit d of ordinal
//! ```
//!
//! [`decode`] reads **only** the invisible suffix.  The visible digits can
//! be edited or duplicated by the user without corrupting the ordinal; a
//! name that never went through [`encode`] fails cleanly with a
//! [`DecodeError`] and callers fall back to a secondary sort key.

/// Alphabet of invisible code points used for the monitor marker and the
/// ordinal digits.  Its length bounds how many monitors can be encoded.
const ALPHABET: [char; 10] = [
    '\u{200B}', // ZERO WIDTH SPACE
    '\u{200C}', // ZERO WIDTH NON-JOINER
    '\u{200D}', // ZERO WIDTH JOINER
    '\u{200E}', // LEFT-TO-RIGHT MARK
    '\u{200F}', // RIGHT-TO-LEFT MARK
    '\u{2060}', // WORD JOINER
    '\u{2061}', // FUNCTION APPLICATION
    '\u{2062}', // INVISIBLE TIMES
    '\u{2063}', // INVISIBLE SEPARATOR
    '\u{2064}', // INVISIBLE PLUS
];

/// Maximum number of monitors the codec can address.
pub const MAX_MONITORS: usize = ALPHABET.len();

/// Monitor id outside the range the alphabet can mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("monitor id {0} outside the supported encoding range")]
pub struct RangeError(pub i32);

/// A workspace name that does not carry a valid encoded slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The name does not start with a decimal digit.
    #[error("workspace name {0:?} does not start with a digit")]
    NoLeadingDigits(String),

    /// The character after the visible digits is not a monitor marker.
    #[error("workspace name {0:?} carries no slot marker")]
    NoMarker(String),

    /// The invisible-digit sequence is empty or contains foreign characters.
    #[error("workspace name {0:?} has a malformed slot suffix")]
    BadSuffix(String),

    /// The invisible-digit sequence does not fit in an ordinal.
    #[error("slot ordinal in workspace name {0:?} overflows")]
    Overflow(String),
}

/// Encode a (monitor, ordinal) pair into a workspace display name.
///
/// The round trip `decode(&encode(m, i)?)? == i` holds for every supported
/// monitor and every ordinal.  Ordinals are 0-based; the visible prefix is
/// `ordinal + 1` so slot 0 displays as "1".
pub fn encode(monitor_id: i32, ordinal: usize) -> Result<String, RangeError> {
    let marker = usize::try_from(monitor_id)
        .ok()
        .and_then(|m| ALPHABET.get(m))
        .ok_or(RangeError(monitor_id))?;

    let mut name = (ordinal + 1).to_string();
    name.push(*marker);
    for digit in ordinal.to_string().bytes() {
        name.push(ALPHABET[usize::from(digit - b'0')]);
    }

    Ok(name)
}

/// Extract the 0-based ordinal from an encoded workspace name.
///
/// Only the invisible suffix is trusted; the visible digits are required to
/// be present (at least one) but their value is ignored.
pub fn decode(name: &str) -> Result<usize, DecodeError> {
    let rest = name.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == name.len() {
        return Err(DecodeError::NoLeadingDigits(name.to_string()));
    }

    let mut suffix = rest.chars();
    let marker = suffix
        .next()
        .ok_or_else(|| DecodeError::NoMarker(name.to_string()))?;
    if !ALPHABET.contains(&marker) {
        return Err(DecodeError::NoMarker(name.to_string()));
    }

    let mut ordinal: usize = 0;
    let mut digits = 0;
    for c in suffix {
        let value = ALPHABET
            .iter()
            .position(|&a| a == c)
            .ok_or_else(|| DecodeError::BadSuffix(name.to_string()))?;
        ordinal = ordinal
            .checked_mul(10)
            .and_then(|o| o.checked_add(value))
            .ok_or_else(|| DecodeError::Overflow(name.to_string()))?;
        digits += 1;
    }

    if digits == 0 {
        return Err(DecodeError::BadSuffix(name.to_string()));
    }

    Ok(ordinal)
}

//  Tests
