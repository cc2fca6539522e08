use crate::domain::document::DocumentError;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decode a plain-text upload as UTF-8, dropping a leading byte order mark
pub fn decode_utf8(bytes: &[u8]) -> Result<String, DocumentError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|error| DocumentError::Decode {
            encoding: "utf-8",
            reason: error.to_string(),
        })
}
