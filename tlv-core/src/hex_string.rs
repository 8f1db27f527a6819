//! Hex string conversion helpers
//!
//! Plain data-format glue used by tests and tooling to write TLV buffers
//! as readable strings.

/// Convert a hex string into bytes
///
/// Two hex digits per byte, upper or lower case. An odd-length string is
/// read as if it had one leading `0` nibble, so `"1234A"` gives
/// `[0x01, 0x23, 0x4A]`. Any non-hex character yields an empty result.
pub fn unhexify(s: &str) -> Vec<u8> {
    let decoded = if s.len() % 2 == 1 {
        hex::decode(format!("0{}", s))
    } else {
        hex::decode(s)
    };
    match decoded {
        Ok(bytes) => bytes,
        Err(e) => {
            log::debug!("Rejected hex input {:?}: {}", s, e);
            Vec::new()
        }
    }
}

/// Convert bytes into a hex string, upper case unless `lower_case` is set
pub fn hexify(data: &[u8], lower_case: bool) -> String {
    if lower_case {
        hex::encode(data)
    } else {
        hex::encode_upper(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unhexify() {
        assert_eq!(unhexify("1234Ab"), vec![0x12, 0x34, 0xAB]);
        assert_eq!(unhexify("00ff"), vec![0x00, 0xFF]);
        assert!(unhexify("").is_empty());
    }

    #[test]
    fn test_unhexify_odd_length() {
        assert_eq!(unhexify("1234A"), vec![0x01, 0x23, 0x4A]);
        assert_eq!(unhexify("F"), vec![0x0F]);
    }

    #[test]
    fn test_unhexify_invalid() {
        assert!(unhexify("12G4").is_empty());
        assert!(unhexify("12 4").is_empty());
        assert!(unhexify("x").is_empty());
    }

    #[test]
    fn test_hexify() {
        let data = [0x01, 0xAB, 0xCD, 0xEF];
        assert_eq!(hexify(&data, false), "01ABCDEF");
        assert_eq!(hexify(&data, true), "01abcdef");
        assert_eq!(hexify(&[], false), "");
    }
}
