//! Tag-driven decoding of heterogeneous JSON payloads.
//!
//! Updates and message attachments arrive as lists of JSON objects whose
//! shape depends on a string discriminator (`update_type` or `type`). They
//! are kept as raw JSON on the wire records and resolved here into closed
//! enums through a per-enum table of decoders.
//!
//! Decoding reads the discriminator first, without materializing the rest of
//! the object, then hands the whole blob to the decoder registered for that
//! tag. Tags missing from the table are skipped so that new server-side
//! variants do not break older clients. A blob that is not an object, or
//! whose discriminator is not a string, is an error.

use std::fmt;

use serde::de::{self, DeserializeOwned, DeserializeSeed, IgnoredAny, MapAccess, Visitor};
use serde_json::value::RawValue;

/// Decodes one blob into a variant of `V`.
pub type Decoder<V> = fn(&RawValue) -> serde_json::Result<V>;

/// A closed set of payload shapes selected by a discriminator field.
pub trait Variant: Sized {
    /// Name of the discriminator field.
    const DISCRIMINATOR: &'static str;

    /// Decoder registered for `tag`, or `None` if the tag is unknown.
    fn decoder(tag: &str) -> Option<Decoder<Self>>;
}

/// Decode `raw` as `P` and wrap it with the enum constructor `wrap`.
///
/// Used to populate [`Variant::decoder`] tables.
pub fn variant<P, V>(raw: &RawValue, wrap: fn(P) -> V) -> serde_json::Result<V>
where
    P: DeserializeOwned,
{
    serde_json::from_str::<P>(raw.get()).map(wrap)
}

/// Read only the discriminator field `field` from `raw`.
///
/// Returns `Ok(None)` when the field is missing or `null`.
pub fn discriminator(raw: &RawValue, field: &'static str) -> serde_json::Result<Option<String>> {
    let mut de = serde_json::Deserializer::from_str(raw.get());
    let tag = TagProbe { field }.deserialize(&mut de)?;
    de.end()?;
    Ok(tag)
}

/// Decode a single blob. Unknown or missing discriminators yield `Ok(None)`.
pub fn decode_one<V: Variant>(raw: &RawValue) -> serde_json::Result<Option<V>> {
    let Some(tag) = discriminator(raw, V::DISCRIMINATOR)? else {
        tracing::trace!(field = V::DISCRIMINATOR, "skipping payload without discriminator");
        return Ok(None);
    };

    match V::decoder(&tag) {
        Some(decode) => decode(raw).map(Some),
        None => {
            tracing::trace!(field = V::DISCRIMINATOR, tag = %tag, "skipping unknown payload type");
            Ok(None)
        }
    }
}

/// Decode every blob in order, skipping unknown discriminators.
///
/// The first malformed blob aborts the whole decode.
pub fn decode_all<V: Variant>(blobs: &[Box<RawValue>]) -> serde_json::Result<Vec<V>> {
    let mut decoded = Vec::with_capacity(blobs.len());
    for raw in blobs {
        if let Some(value) = decode_one::<V>(raw)? {
            decoded.push(value);
        }
    }
    Ok(decoded)
}

/// Like [`decode_all`], but keeps an absent source collection distinct from
/// an empty one: `None` stays `None`, an empty list becomes `Some(vec![])`.
pub fn decode_present<V: Variant>(
    blobs: Option<&[Box<RawValue>]>,
) -> serde_json::Result<Option<Vec<V>>> {
    blobs.map(decode_all::<V>).transpose()
}

/// Visitor that pulls one string field out of a JSON object.
struct TagProbe {
    field: &'static str,
}

impl<'de> DeserializeSeed<'de> for TagProbe {
    type Value = Option<String>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for TagProbe {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an object with a string `{}` field", self.field)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        // A repeated discriminator key keeps its last value.
        let mut tag: Option<String> = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == self.field {
                tag = map.next_value()?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Circle {
        radius: u32,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Square {
        side: u32,
    }

    #[derive(Debug, PartialEq)]
    enum Shape {
        Circle(Circle),
        Square(Square),
    }

    impl Variant for Shape {
        const DISCRIMINATOR: &'static str = "kind";

        fn decoder(tag: &str) -> Option<Decoder<Self>> {
            let decoder: Decoder<Self> = match tag {
                "circle" => |raw| variant(raw, Shape::Circle),
                "square" => |raw| variant(raw, Shape::Square),
                _ => return None,
            };
            Some(decoder)
        }
    }

    fn raw(json: &str) -> Box<RawValue> {
        RawValue::from_string(json.to_string()).unwrap()
    }

    #[test]
    fn test_discriminator_reads_only_tag() {
        let blob = raw(r#"{"radius":3,"kind":"circle","extra":{"nested":[1,2]}}"#);
        assert_eq!(
            discriminator(&blob, "kind").unwrap().as_deref(),
            Some("circle")
        );
    }

    #[test]
    fn test_discriminator_missing_or_null() {
        assert_eq!(discriminator(&raw(r#"{"radius":3}"#), "kind").unwrap(), None);
        assert_eq!(discriminator(&raw(r#"{"kind":null}"#), "kind").unwrap(), None);
    }

    #[test]
    fn test_discriminator_repeated_key_keeps_last() {
        let blob = raw(r#"{"kind":"circle","kind":"square","side":2}"#);
        assert_eq!(
            discriminator(&blob, "kind").unwrap().as_deref(),
            Some("square")
        );
    }

    #[test]
    fn test_discriminator_type_mismatch_is_error() {
        assert!(discriminator(&raw(r#"{"kind":5}"#), "kind").is_err());
        assert!(discriminator(&raw(r#"[1,2,3]"#), "kind").is_err());
        assert!(discriminator(&raw(r#""circle""#), "kind").is_err());
    }

    #[test]
    fn test_decode_one_known_and_unknown() {
        let shape: Option<Shape> = decode_one(&raw(r#"{"kind":"square","side":4}"#)).unwrap();
        assert_eq!(shape, Some(Shape::Square(Square { side: 4 })));

        let shape: Option<Shape> = decode_one(&raw(r#"{"kind":"hexagon","side":4}"#)).unwrap();
        assert_eq!(shape, None);
    }

    #[test]
    fn test_decode_all_skips_unknown_preserving_order() {
        let blobs = vec![
            raw(r#"{"kind":"circle","radius":1}"#),
            raw(r#"{"kind":"triangle","a":1,"b":2}"#),
            raw(r#"{"kind":"square","side":2}"#),
        ];
        let shapes: Vec<Shape> = decode_all(&blobs).unwrap();
        assert_eq!(
            shapes,
            vec![
                Shape::Circle(Circle { radius: 1 }),
                Shape::Square(Square { side: 2 }),
            ]
        );
    }

    #[test]
    fn test_decode_all_malformed_aborts() {
        let blobs = vec![
            raw(r#"{"kind":"circle","radius":1}"#),
            raw(r#"{"kind":"square","side":"wide"}"#),
        ];
        assert!(decode_all::<Shape>(&blobs).is_err());

        let blobs = vec![raw(r#"{"kind":true}"#)];
        assert!(decode_all::<Shape>(&blobs).is_err());
    }

    #[test]
    fn test_decode_empty_and_absent() {
        let empty: Vec<Box<RawValue>> = Vec::new();
        let shapes: Vec<Shape> = decode_all(&empty).unwrap();
        assert!(shapes.is_empty());

        let present: Option<Vec<Shape>> = decode_present(Some(empty.as_slice())).unwrap();
        assert_eq!(present, Some(vec![]));

        let absent: Option<Vec<Shape>> = decode_present(None).unwrap();
        assert_eq!(absent, None);
    }

    #[test]
    fn test_decode_is_repeatable() {
        let blobs = vec![
            raw(r#"{"kind":"circle","radius":9}"#),
            raw(r#"{"kind":"square","side":3}"#),
        ];
        let first: Vec<Shape> = decode_all(&blobs).unwrap();
        let second: Vec<Shape> = decode_all(&blobs).unwrap();
        assert_eq!(first, second);
    }
}
