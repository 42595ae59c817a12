//! JSON file loading with text-encoding normalization
//!
//! Bower metadata is usually UTF-8 but hand-edited `bower.json` files in the
//! wild also come as UTF-16 (with BOM) or legacy ISO-8859-1. Content is
//! normalized to UTF-8 before being handed to `serde_json`.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use std::borrow::Cow;
use std::io;

use crate::error::{FinderError, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Read and deserialize a JSON file
///
/// A missing file maps to [`FinderError::FileNotFound`] so callers can tell
/// it apart from unreadable or malformed content.
pub(crate) fn load_json_file<T: DeserializeOwned>(path: &str) -> Result<T> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            FinderError::FileNotFound {
                path: path.to_string(),
            }
        } else {
            FinderError::Io {
                path: path.to_string(),
                source,
            }
        }
    })?;

    let content = normalize_encoding(&bytes).ok_or_else(|| FinderError::Encoding {
        path: path.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|source| FinderError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Treat an explicit `null` the same as a missing key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Convert raw file content to UTF-8 text
///
/// Returns `None` when the content claims to be UTF-16 but does not decode.
pub(crate) fn normalize_encoding(bytes: &[u8]) -> Option<Cow<'_, str>> {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        return std::str::from_utf8(rest).ok().map(Cow::Borrowed);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        return decode_utf16(rest, u16::from_le_bytes).map(Cow::Owned);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        return decode_utf16(rest, u16::from_be_bytes).map(Cow::Owned);
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => Some(Cow::Borrowed(text)),
        // Every byte is a valid ISO-8859-1 code point
        Err(_) => Some(Cow::Owned(bytes.iter().map(|&b| b as char).collect())),
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }

    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units).collect::<std::result::Result<String, _>>().ok()
}
