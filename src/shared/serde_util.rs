//! Custom serde helpers for backend wire formats.
//!
//! The P2P backend is loosely typed: some integer fields arrive either as a
//! JSON number or as a numeric string depending on the endpoint, and some
//! boolean flags arrive as `0`/`1`. These helpers normalize at the serde
//! boundary so wire structs can declare the type they mean.

/// Deserializes an `i64` from either a JSON number or a numeric string.
pub mod int_or_str {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Int(v) => Ok(v),
            Raw::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("invalid integer: {s:?}"))),
        }
    }
}

/// Deserializes a `bool` from either a JSON bool or a `0`/`1` integer.
///
/// Any non-zero integer decodes as `true`.
pub mod relaxed_bool {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Bool(v) => Ok(v),
            Raw::Int(v) => Ok(v != 0),
        }
    }
}

/// Deserializes an optional field whose value may be a string or a number
/// into `Option<String>`.
pub mod opt_stringly {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Num(serde_json::Number),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<Raw> = Option::deserialize(deserializer)?;
        Ok(raw.map(|r| match r {
            Raw::Text(s) => s,
            Raw::Num(n) => n.to_string(),
        }))
    }
}
