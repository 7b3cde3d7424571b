use crate::strings::error::StringError;

/// Convert base-2 integer text to base-16 integer text.
///
/// This is NOT byte-to-hex encoding: `"1010"` is read as the number ten and
/// rendered as `"a"`. An optional `+`/`-` sign is accepted and negative
/// results keep a leading `-`. Anything that does not parse as a signed
/// 64-bit base-2 integer is an error.
pub fn bin2hex(s: &str) -> Result<String, StringError> {
    let n = i64::from_str_radix(s, 2).map_err(|source| StringError::InvalidBinary {
        input: s.to_string(),
        source,
    })?;
    if n < 0 {
        Ok(format!("-{:x}", n.unsigned_abs()))
    } else {
        Ok(format!("{:x}", n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_base2_text_to_base16_text() {
        assert_eq!(bin2hex("1010").unwrap(), "a");
        assert_eq!(bin2hex("0").unwrap(), "0");
        assert_eq!(bin2hex("11111111").unwrap(), "ff");
        assert_eq!(bin2hex("000100000000").unwrap(), "100");
    }

    #[test]
    fn signs_are_kept() {
        assert_eq!(bin2hex("+1111").unwrap(), "f");
        assert_eq!(bin2hex("-1010").unwrap(), "-a");
        let min = format!("-1{}", "0".repeat(63));
        assert_eq!(bin2hex(&min).unwrap(), "-8000000000000000");
    }

    #[test]
    fn malformed_input_is_rejected() {
        for bad in ["", "102", "abc", "0b101", "1 0", "-"] {
            let err = bin2hex(bad).unwrap_err();
            assert!(matches!(err, StringError::InvalidBinary { ref input, .. } if input == bad));
        }
    }

    #[test]
    fn out_of_range_is_rejected() {
        let too_big = "1".repeat(64);
        assert!(bin2hex(&too_big).is_err());
    }
}
