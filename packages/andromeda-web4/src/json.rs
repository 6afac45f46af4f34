use std::{borrow::Cow, fmt};

use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::error::ContractError;

// Raised from inside the scan to stop it once a value has been captured.
const FIELD_FOUND: &str = "field found";

/// Returns the string that follows the first string token equal to `field`
/// in `request`, or `default` when no such pair exists.
///
/// The request is scanned once as a flat token stream and no tree is built.
/// Every string token (keys and values alike) is compared against the
/// previous one, so the result is only meaningful for flat objects whose
/// values are strings. Non-string tokens are skipped.
///
/// An empty request yields `default`. Any syntax error met before the match
/// fails the whole call with [`ContractError::MalformedRequest`].
pub fn extract_string_field<'a>(
    request: &'a [u8],
    field: &str,
    default: &'a str,
) -> Result<Cow<'a, str>, ContractError> {
    if request
        .iter()
        .all(|&b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
    {
        return Ok(Cow::Borrowed(default));
    }

    let mut scanner = Scanner {
        field,
        previous: None,
        found: None,
    };
    let mut deserializer = serde_json::Deserializer::from_slice(request);
    let scanned = Tokens(&mut scanner)
        .deserialize(&mut deserializer)
        .and_then(|_| deserializer.end());

    match (scanner.found, scanned) {
        (Some(value), _) => Ok(value),
        (None, Ok(())) => Ok(Cow::Borrowed(default)),
        (None, Err(err)) => Err(err.into()),
    }
}

struct Scanner<'f, 'de> {
    field: &'f str,
    previous: Option<Cow<'de, str>>,
    found: Option<Cow<'de, str>>,
}

impl<'f, 'de> Scanner<'f, 'de> {
    fn string_token<E: de::Error>(&mut self, token: Cow<'de, str>) -> Result<(), E> {
        if self.previous.as_deref() == Some(self.field) {
            self.found = Some(token);
            return Err(E::custom(FIELD_FOUND));
        }
        self.previous = Some(token);
        Ok(())
    }
}

/// Walks one JSON value, reporting each string token to the scanner.
struct Tokens<'s, 'f, 'de>(&'s mut Scanner<'f, 'de>);

impl<'s, 'f, 'de> DeserializeSeed<'de> for Tokens<'s, 'f, 'de> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'s, 'f, 'de> Visitor<'de> for Tokens<'s, 'f, 'de> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON value")
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<(), E> {
        Ok(())
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<(), E> {
        Ok(())
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<(), E> {
        Ok(())
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<(), E> {
        Ok(())
    }

    fn visit_unit<E: de::Error>(self) -> Result<(), E> {
        Ok(())
    }

    fn visit_borrowed_str<E: de::Error>(self, v: &'de str) -> Result<(), E> {
        self.0.string_token(Cow::Borrowed(v))
    }

    // Strings containing escapes are decoded into a scratch buffer and have
    // to be copied out.
    fn visit_str<E: de::Error>(self, v: &str) -> Result<(), E> {
        self.0.string_token(Cow::Owned(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<(), E> {
        self.0.string_token(Cow::Owned(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<(), A::Error>
    where
        A: SeqAccess<'de>,
    {
        let scanner = self.0;
        while seq.next_element_seed(Tokens(&mut *scanner))?.is_some() {}
        Ok(())
    }

    fn visit_map<A>(self, mut map: A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        let scanner = self.0;
        while map.next_key_seed(Tokens(&mut *scanner))?.is_some() {
            map.next_value_seed(Tokens(&mut *scanner))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::only_field(r#"{"path":"/foo/bar"}"#, "path", "/foo/bar")]
    #[case::after_other_fields(r#"{"a":"1","b":"2","path":"/x"}"#, "path", "/x")]
    #[case::before_other_fields(r#"{"path":"/x","a":"1","b":"2"}"#, "path", "/x")]
    #[case::surrounded(r#"{"a":"1","url":"ipfs://xyz","b":"2"}"#, "url", "ipfs://xyz")]
    #[case::whitespace(" {\n  \"accountId\" : \"alice\"\n} ", "accountId", "alice")]
    #[case::empty_value(r#"{"path":""}"#, "path", "")]
    #[case::first_match_wins(r#"{"path":"/one","path":"/two"}"#, "path", "/one")]
    #[case::numbers_skipped(r#"{"n":1,"ok":true,"path":"/p","f":1.5}"#, "path", "/p")]
    fn test_extract_present(#[case] request: &str, #[case] field: &str, #[case] expected: &str) {
        let value = extract_string_field(request.as_bytes(), field, "default").unwrap();
        assert_eq!(value, expected);
    }

    #[rstest]
    #[case::empty_buffer("")]
    #[case::blank_buffer("  \n\t")]
    #[case::empty_object("{}")]
    #[case::other_fields(r#"{"a":"b","c":"d"}"#)]
    #[case::field_as_last_token(r#"{"a":"path"}"#)]
    #[case::top_level_string(r#""path""#)]
    fn test_extract_absent(#[case] request: &str) {
        let value = extract_string_field(request.as_bytes(), "path", "/").unwrap();
        assert_eq!(value, "/");
    }

    #[test]
    fn test_empty_value_is_not_default() {
        let value = extract_string_field(br#"{"path":""}"#, "path", "/").unwrap();
        assert_eq!(value, "");
    }

    #[test]
    fn test_unescaped_value_borrows_request() {
        let request = br#"{"path":"/plain"}"#;
        let value = extract_string_field(request, "path", "/").unwrap();
        assert!(matches!(value, Cow::Borrowed("/plain")));
    }

    #[test]
    fn test_escaped_value_is_decoded() {
        let request = br#"{"path":"/a\"b\u0041"}"#;
        let value = extract_string_field(request, "path", "/").unwrap();
        assert_eq!(value, "/a\"bA");
    }

    #[test]
    fn test_escaped_key_matches() {
        let request = br#"{"p\u0061th":"/x"}"#;
        let value = extract_string_field(request, "path", "/").unwrap();
        assert_eq!(value, "/x");
    }

    // Keys and values are compared alike: a value equal to the field name
    // makes the following key the result.
    #[test]
    fn test_value_equal_to_field_name() {
        let request = br#"{"a":"path","b":"c"}"#;
        let value = extract_string_field(request, "path", "/").unwrap();
        assert_eq!(value, "b");
    }

    // A non-string value leaves the field name as the previous string token.
    #[test]
    fn test_non_string_value_is_skipped() {
        let request = br#"{"path":5,"next":"v"}"#;
        let value = extract_string_field(request, "path", "/").unwrap();
        assert_eq!(value, "next");
    }

    #[rstest]
    #[case::unterminated_object(r#"{"a":"b""#)]
    #[case::missing_colon(r#"{"a" "b"}"#)]
    #[case::bare_word("path")]
    #[case::trailing_garbage(r#"{"a":"b"} x"#)]
    #[case::unterminated_string(r#"{"pa"#)]
    #[case::form_feed_only("\x0c")]
    fn test_extract_malformed(#[case] request: &str) {
        let err = extract_string_field(request.as_bytes(), "path", "/").unwrap_err();
        assert!(matches!(err, ContractError::MalformedRequest { .. }));
    }

    // The scan stops at the match, so later syntax is never inspected.
    #[test]
    fn test_scan_stops_at_match() {
        let request = br#"{"path":"/x", !!!"#;
        let value = extract_string_field(request, "path", "/").unwrap();
        assert_eq!(value, "/x");
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let request = b"{\"path\":\"\xff\"}";
        let err = extract_string_field(request, "path", "/").unwrap_err();
        assert!(matches!(err, ContractError::MalformedRequest { .. }));
    }
}
