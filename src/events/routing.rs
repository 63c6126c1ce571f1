// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Routing payload parsing
//!
//! The `extData` field of a bridge execution is a small query string such as
//! `r=1&c=173&x=9`. The `c` key holds the destination chain id.
//!
//! Decoding bytes to text and finding the key are separate steps so that "not
//! text" and "no destination" can be told apart.

use std::borrow::Cow;

/// Key holding the destination chain id
const DESTINATION_KEY: &str = "c=";

/// A way of reading payload bytes as text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDecoding {
    /// Strict UTF-8
    Utf8,
    /// ISO-8859-1; every byte maps to the code point of the same value
    Latin1,
}

impl TextDecoding {
    /// Decode `bytes`, or `None` if they are not valid in this encoding
    pub fn decode(self, bytes: &[u8]) -> Option<Cow<'_, str>> {
        match self {
            TextDecoding::Utf8 => std::str::from_utf8(bytes).ok().map(Cow::Borrowed),
            TextDecoding::Latin1 => {
                Some(Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()))
            }
        }
    }
}

/// Decodings tried in order on a routing payload
pub const PAYLOAD_DECODINGS: &[TextDecoding] = &[TextDecoding::Utf8, TextDecoding::Latin1];

/// Decode `bytes` with the first decoding in `decodings` that accepts them
///
/// # Examples
///
/// ```
/// use bridgescan::events::routing::{decode_payload_text, PAYLOAD_DECODINGS, TextDecoding};
///
/// assert_eq!(decode_payload_text(b"c=10", PAYLOAD_DECODINGS).as_deref(), Some("c=10"));
/// // 0xE9 is not valid UTF-8 on its own; Latin-1 reads it as 'é'
/// assert_eq!(decode_payload_text(b"c=10&n=\xE9", PAYLOAD_DECODINGS).as_deref(), Some("c=10&n=é"));
/// assert_eq!(decode_payload_text(b"\xE9", &[TextDecoding::Utf8]), None);
/// ```
pub fn decode_payload_text<'a>(
    bytes: &'a [u8],
    decodings: &[TextDecoding],
) -> Option<Cow<'a, str>> {
    decodings.iter().find_map(|decoding| decoding.decode(bytes))
}

/// Extract the destination chain id from decoded payload text
///
/// Matches the first `c=<digits>` that starts the text or directly follows a
/// `&` or `?`. Returns `None` when there is no such key, or when the first
/// match does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use bridgescan::events::routing::parse_destination_chain_id;
///
/// assert_eq!(parse_destination_chain_id("r=1&c=173&x=9"), Some(173));
/// assert_eq!(parse_destination_chain_id("?c=10"), Some(10));
/// assert_eq!(parse_destination_chain_id("abc=5"), None);
/// assert_eq!(parse_destination_chain_id("xyz"), None);
/// ```
pub fn parse_destination_chain_id(text: &str) -> Option<u64> {
    let key_starts = std::iter::once(0).chain(
        text.match_indices(|c: char| c == '&' || c == '?')
            .map(|(index, _)| index + 1),
    );

    for start in key_starts {
        let Some(rest) = text[start..].strip_prefix(DESTINATION_KEY) else {
            continue;
        };
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            continue;
        }
        return rest[..digits].parse().ok();
    }

    None
}
