use crate::errors::ApiResult;

/// Serialized transaction handed to the submission endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxPayload {
    /// Hex-encoded CBOR, decoded before sending.
    Hex(String),
    /// Raw CBOR, sent as is.
    Bytes(Vec<u8>),
}

impl TxPayload {
    pub fn into_bytes(self) -> ApiResult<Vec<u8>> {
        match self {
            TxPayload::Hex(hex_str) => Ok(hex::decode(hex_str.trim())?),
            TxPayload::Bytes(bytes) => Ok(bytes),
        }
    }

    /// Builds a payload from file contents that may hold either raw CBOR or
    /// its hex encoding.
    pub fn from_file_contents(contents: &[u8]) -> Self {
        let trimmed = contents.trim_ascii();

        TxPayload::Bytes(binary_or_hex_heuristic(trimmed))
    }
}

impl From<&str> for TxPayload {
    fn from(hex_str: &str) -> Self {
        TxPayload::Hex(hex_str.to_string())
    }
}

impl From<String> for TxPayload {
    fn from(hex_str: String) -> Self {
        TxPayload::Hex(hex_str)
    }
}

impl From<Vec<u8>> for TxPayload {
    fn from(bytes: Vec<u8>) -> Self {
        TxPayload::Bytes(bytes)
    }
}

impl From<&[u8]> for TxPayload {
    fn from(bytes: &[u8]) -> Self {
        TxPayload::Bytes(bytes.to_vec())
    }
}

/// This function allows us to take both hex-encoded and raw bytes. It has
/// to be a heuristic: if there are input bytes that are not `[0-9a-f]`,
/// then it must be a binary string. Otherwise, we assume it’s hex encoded.
///
/// **Note**: there is a small probability that the user gave us a binary
/// string that only _looked_ like a hex-encoded one, but it’s rare enough
/// to ignore it.
pub fn binary_or_hex_heuristic(xs: &[u8]) -> Vec<u8> {
    let even_length = xs.len() % 2 == 0;
    let contains_non_hex = xs.iter().any(|&x| !x.is_ascii_hexdigit());

    if !even_length || contains_non_hex {
        xs.to_vec()
    } else {
        hex::decode(xs).unwrap_or_else(|_| unreachable!())
    }
}
