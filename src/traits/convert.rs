use bincode::{config::standard, decode_from_slice, encode_to_vec};

use crate::errors::CodecError;

/// Byte-codec bridge for backends that persist opaque bytes.
///
/// Blanket-implemented for every `bincode`-codable type, so the bound on a
/// byte backend's factory doubles as the compile-time restriction to value
/// types that backend can actually represent.
pub trait ToBytes: bincode::Encode + bincode::Decode<()> + Sized {
    /// Encode this value with the crate's standard bincode configuration.
    fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        Ok(encode_to_vec(self, standard())?)
    }

    /// Decode a value previously produced by [`ToBytes::to_bytes`].
    fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let (decoded, _) = decode_from_slice(bytes, standard())?;
        Ok(decoded)
    }
}

impl<T> ToBytes for T where T: bincode::Encode + bincode::Decode<()> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_standard_config() {
        let original = (42u64, "slot".to_string());
        let bytes = original.to_bytes().unwrap();
        let decoded = <(u64, String)>::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_truncated_bytes_fail_to_decode() {
        let bytes = 7u64.to_bytes().unwrap();
        assert!(u64::from_bytes(&bytes[..bytes.len() - 1]).is_err());
    }
}
