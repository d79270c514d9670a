//! Line-oriented `Key: value` parser.
//!
//! A rejected value leaves its field untouched and parsing continues. When
//! a key repeats, the last valid occurrence wins. Only read errors abort.

use std::io::BufRead;

use crate::error::{Error, FieldError};
use crate::fields::Validator;
use crate::record::SecurityTxt;

const FIELD_SEPARATOR: char = ':';

/// Recognized keys, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Acknowledgements,
    Contact,
    Disclosure,
    Encryption,
}

impl Field {
    fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "acknowledgements" => Some(Field::Acknowledgements),
            "contact" => Some(Field::Contact),
            "disclosure" => Some(Field::Disclosure),
            "encryption" => Some(Field::Encryption),
            _ => None,
        }
    }
}

/// Splits on the first `:` and trims both halves. Lines without a separator
/// yield `None`; later separators stay in the value.
pub fn split_line(line: &str) -> Option<(&str, &str)> {
    line.split_once(FIELD_SEPARATOR)
        .map(|(key, val)| (key.trim(), val.trim()))
}

/// Consumes `reader` line by line and builds a record.
///
/// Bytes that are not valid UTF-8 are replaced rather than treated as a
/// read failure, so one stray Latin-1 comment does not discard the record.
pub fn parse<R: BufRead>(mut reader: R, validator: &Validator) -> Result<SecurityTxt, Error> {
    let mut sec = SecurityTxt {
        origin: validator.origin().cloned(),
        ..SecurityTxt::default()
    };

    let mut buf = Vec::new();
    let mut idx = 0usize;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        idx += 1;
        let raw = buf
            .strip_suffix(b"\n")
            .map(|b| b.strip_suffix(b"\r").unwrap_or(b))
            .unwrap_or(&buf[..]);
        let line = String::from_utf8_lossy(raw);
        let Some((key, val)) = split_line(&line) else {
            continue;
        };
        let Some(field) = Field::from_key(key) else {
            continue;
        };
        if let Err(e) = apply(&mut sec, field, val, validator) {
            tracing::debug!(line = idx, field = ?field, value = val, "rejected: {}", e);
        }
    }

    Ok(sec)
}

fn apply(
    sec: &mut SecurityTxt,
    field: Field,
    val: &str,
    validator: &Validator,
) -> Result<(), FieldError> {
    match field {
        Field::Acknowledgements => sec.acknowledgements = validator.check_acknowledgements(val)?,
        Field::Contact => sec.contact = validator.check_contact(val)?,
        Field::Disclosure => sec.disclosure = validator.check_disclosure(val)?,
        Field::Encryption => sec.encryption = validator.check_encryption(val)?,
    }
    Ok(())
}
