//! Decoded leaf values.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use webmstream_ebml::Block;
use webmstream_schema::ElementKind;

/// The decoded payload of a leaf element.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    UInt(u64),
    Int(i64),
    Float(f64),
    String(String),
    Binary(Bytes),
    Date(DateTime<Utc>),
    /// SimpleBlock or Block split into frames.
    Block(Block),
}

impl Value {
    /// Schema kind this value was decoded as. Blocks are binary elements.
    pub fn kind(&self) -> ElementKind {
        match self {
            Value::UInt(_) => ElementKind::UInt,
            Value::Int(_) => ElementKind::Int,
            Value::Float(_) => ElementKind::Float,
            Value::String(_) => ElementKind::String,
            Value::Binary(_) | Value::Block(_) => ElementKind::Binary,
            Value::Date(_) => ElementKind::Date,
        }
    }

    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Value::UInt(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&Bytes> {
        match self {
            Value::Binary(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Date(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Value::Block(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_variant() {
        let v = Value::UInt(1_000_000);
        assert_eq!(v.as_uint(), Some(1_000_000));
        assert_eq!(v.as_int(), None);
        assert_eq!(v.as_str(), None);

        let s = Value::String("webm".into());
        assert_eq!(s.as_str(), Some("webm"));
        assert!(s.as_block().is_none());
        assert_eq!(s.kind(), ElementKind::String);
    }
}
