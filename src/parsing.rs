//! Routines for parsing values into BigIntegers

use crate::{BigInteger, ParseBigIntegerError};

use std::io;

/// Parse a decimal numeral with optional leading `+`/`-` sign.
///
/// Leading zeros are stripped except the last remaining digit, and a
/// signed zero normalizes to non-negative zero.
pub(crate) fn parse_from_str(s: &str) -> Result<BigInteger, ParseBigIntegerError> {
    if s.is_empty() {
        return Err(ParseBigIntegerError::Empty);
    }

    let (negative, body) = match s.as_bytes()[0] {
        b'+' => (false, &s[1..]),
        b'-' => (true, &s[1..]),
        _ => (false, s),
    };

    // a lone sign has no digits to parse
    if body.is_empty() {
        return Err(ParseBigIntegerError::Empty);
    }

    let mut digits = Vec::with_capacity(body.len());
    for c in body.chars() {
        match c.to_digit(10) {
            Some(d) => digits.push(d as u8),
            None => return Err(ParseBigIntegerError::InvalidDigit(c)),
        }
    }

    Ok(BigInteger::from_parts(digits, negative))
}

/// Scan one integer token out of a buffered reader.
///
/// Skips leading whitespace; requires the next character to start a
/// numeral (digit or sign); consumes consecutive digits, leaving any
/// non-whitespace terminator in the reader for the caller and
/// swallowing a single whitespace terminator.
pub(crate) fn read_token<R: io::BufRead>(reader: &mut R) -> io::Result<BigInteger> {
    skip_whitespace(reader)?;

    let mut token = String::new();

    // optional sign
    match peek_byte(reader)? {
        Some(b @ b'+') | Some(b @ b'-') => {
            token.push(char::from(b));
            reader.consume(1);
        }
        Some(_) => {}
        None => return Err(io::ErrorKind::UnexpectedEof.into()),
    }

    // digit body
    loop {
        let (digit_count, buffer_len) = {
            let buffer = reader.fill_buf()?;
            let count = buffer.iter().take_while(|b| b.is_ascii_digit()).count();
            for &b in &buffer[..count] {
                token.push(char::from(b));
            }
            (count, buffer.len())
        };
        reader.consume(digit_count);
        if digit_count < buffer_len || buffer_len == 0 {
            break;
        }
    }

    let value = parse_from_str(&token)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

    // swallow a single whitespace terminator, leave anything else
    if let Some(b) = peek_byte(reader)? {
        if b.is_ascii_whitespace() {
            reader.consume(1);
        }
    }

    Ok(value)
}

fn skip_whitespace<R: io::BufRead>(reader: &mut R) -> io::Result<()> {
    loop {
        let (skipped, buffer_len) = {
            let buffer = reader.fill_buf()?;
            let count = buffer.iter().take_while(|b| b.is_ascii_whitespace()).count();
            (count, buffer.len())
        };
        reader.consume(skipped);
        if skipped < buffer_len || buffer_len == 0 {
            return Ok(());
        }
    }
}

fn peek_byte<R: io::BufRead>(reader: &mut R) -> io::Result<Option<u8>> {
    let buffer = reader.fill_buf()?;
    Ok(buffer.first().copied())
}



#[cfg(test)]
mod test_read_token {
    use super::*;

    #[test]
    fn reads_value_after_whitespace() {
        let mut input = "   \t\n 1024".as_bytes();
        let n = read_token(&mut input).unwrap();
        assert_eq!(n.to_string(), "1024");
        assert!(input.is_empty());
    }

    #[test]
    fn reads_successive_tokens() {
        let mut input = "12 -34 +56".as_bytes();
        assert_eq!(read_token(&mut input).unwrap().to_string(), "12");
        assert_eq!(read_token(&mut input).unwrap().to_string(), "-34");
        assert_eq!(read_token(&mut input).unwrap().to_string(), "56");
    }

    #[test]
    fn leaves_non_whitespace_terminator() {
        let mut input = "42;rest".as_bytes();
        let n = read_token(&mut input).unwrap();
        assert_eq!(n.to_string(), "42");
        assert_eq!(input, b";rest");
    }

    #[test]
    fn swallows_single_whitespace_terminator() {
        let mut input = "42  7".as_bytes();
        read_token(&mut input).unwrap();
        assert_eq!(input, b" 7");
    }

    #[test]
    fn fails_without_digits() {
        let mut input = "abc".as_bytes();
        let err = read_token(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let mut lone_sign = "- 12".as_bytes();
        let err = read_token(&mut lone_sign).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn fails_at_end_of_input() {
        let mut input = "   ".as_bytes();
        let err = read_token(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
