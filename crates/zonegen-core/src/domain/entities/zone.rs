//! Zone file and record entities, exactly as read from the zone file.
//!
//! Every field is optional: a zone file with missing fields must still load so
//! the validator can report all of them at once.

use std::fmt;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

/// One resource record of a zone file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "scalar_string")]
    pub subdomain: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub record_type: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub data: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub ttl: Option<String>,
}

impl Record {
    /// Build a record with every field present.
    pub fn new(
        record_type: impl Into<String>,
        subdomain: impl Into<String>,
        ttl: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            subdomain: Some(subdomain.into()),
            record_type: Some(record_type.into()),
            data: Some(data.into()),
            ttl: Some(ttl.into()),
        }
    }

    pub fn subdomain(&self) -> &str {
        self.subdomain.as_deref().unwrap_or_default()
    }

    pub fn record_type(&self) -> &str {
        self.record_type.as_deref().unwrap_or_default()
    }

    pub fn data(&self) -> &str {
        self.data.as_deref().unwrap_or_default()
    }

    pub fn ttl(&self) -> &str {
        self.ttl.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = Vec::with_capacity(4);
        let named = [
            ("record_type", &self.record_type),
            ("subdomain", &self.subdomain),
            ("ttl", &self.ttl),
            ("data", &self.data),
        ];
        for (name, value) in named {
            if let Some(value) = value {
                fields.push(format!("{name}: {value:?}"));
            }
        }
        write!(f, "{{{}}}", fields.join(", "))
    }
}

/// A parsed zone file: one origin and its records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneFile {
    #[serde(default, deserialize_with = "scalar_string")]
    pub origin: Option<String>,
    #[serde(default)]
    pub records: Option<Vec<Record>>,
}

impl ZoneFile {
    pub fn new(origin: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            origin: Some(origin.into()),
            records: Some(records),
        }
    }

    pub fn origin(&self) -> &str {
        self.origin.as_deref().unwrap_or_default()
    }

    pub fn records(&self) -> &[Record] {
        self.records.as_deref().unwrap_or_default()
    }
}

/// Accept text and integers (`86400` as well as `"86400"`) and keep their text
/// form. Floats and booleans are rejected: their text form is not what was
/// written (`1.10` would read back as `1.1`).
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Text(s)) => Ok(Some(s)),
        Some(Scalar::Unsigned(n)) => Ok(Some(n.to_string())),
        Some(Scalar::Signed(n)) => Ok(Some(n.to_string())),
        Some(Scalar::Float(_)) => Err(D::Error::custom(
            "non-integer number; quote the value to keep it as written",
        )),
        Some(Scalar::Bool(b)) => Err(D::Error::custom(format!(
            "boolean `{b}`; quote the value to use it as text"
        ))),
    }
}
