//! Serde helpers for the backend's SQLite-flavored JSON.
//!
//! The backend stores flags as 0/1 integers and serializes rows as-is, so a
//! field documented as boolean may arrive as `true`, `1`, or `1.0`. These
//! helpers accept all of them and always serialize back as real booleans.

use serde::de::{self, Deserializer, Visitor};

pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientBool;

    impl Visitor<'_> for LenientBool {
        type Value = bool;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a boolean or 0/1 integer")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<bool, E> {
            Ok(v != 0.0)
        }
    }

    deserializer.deserialize_any(LenientBool)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Flags {
        #[serde(deserialize_with = "super::lenient_bool")]
        on: bool,
    }

    #[test]
    fn accepts_bools_and_sqlite_integers() {
        for (json, expected) in [
            (r#"{"on": true}"#, true),
            (r#"{"on": false}"#, false),
            (r#"{"on": 1}"#, true),
            (r#"{"on": 0}"#, false),
        ] {
            let flags: Flags = serde_json::from_str(json).expect("deserialize");
            assert_eq!(flags.on, expected);
        }
    }

    #[test]
    fn rejects_strings() {
        assert!(serde_json::from_str::<Flags>(r#"{"on": "yes"}"#).is_err());
    }
}
