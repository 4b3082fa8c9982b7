use std::{fmt::Display, ops::Deref};

use fnv::FnvBuildHasher;
use indexmap::IndexMap;

pub use self::{
    array::Array,
    indirect::{IndirectObject, Reference},
    name::Name,
    stream::Stream,
    string::PwString,
    trailer::{Trailer, TrailerError},
    xref::{FreeObject, UsedObject, Xref, XrefEntry},
};

mod array;
pub mod document;
mod indirect;
mod name;
mod stream;
mod string;
pub(crate) mod trailer;
pub(crate) mod xref;

/// Major and minor version announced in the file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdfVersion {
    pub major: u8,
    pub minor: u8,
}

impl PdfVersion {
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// The header line, including its line ending.
    pub fn header(&self) -> Vec<u8> {
        format!("%PDF-{}.{}\n", self.major, self.minor).into_bytes()
    }
}

impl Default for PdfVersion {
    fn default() -> Self {
        Self::new(1, 4)
    }
}

impl Display for PdfVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    String(PwString),
    Float(f32),
    Integer(i64),
    Bool(bool),
    Name(Name),
    Array(Array),
    Dictionary(Dictionary),
    Stream(Stream),
    Null,
    Reference(Reference),
}

impl Object {
    pub fn name(&self) -> Option<&Name> {
        if let Self::Name(n) = self {
            Some(n)
        } else {
            None
        }
    }

    pub fn integer(&self) -> Option<i64> {
        if let Self::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn reference(&self) -> Option<&Reference> {
        if let Self::Reference(r) = self {
            Some(r)
        } else {
            None
        }
    }

    pub fn array(&self) -> Option<&Array> {
        if let Self::Array(a) = self {
            Some(a)
        } else {
            None
        }
    }

    pub fn dictionary(&self) -> Option<&Dictionary> {
        if let Self::Dictionary(d) = self {
            Some(d)
        } else {
            None
        }
    }

    pub fn stream(&self) -> Option<&Stream> {
        if let Self::Stream(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// Collect every reference contained in this object, depth first.
    pub fn references(&self) -> Vec<&Reference> {
        let mut found = Vec::new();
        self.collect_references(&mut found);
        found
    }

    fn collect_references<'a>(&'a self, found: &mut Vec<&'a Reference>) {
        match self {
            Object::Reference(r) => found.push(r),
            Object::Array(a) => a.iter().for_each(|o| o.collect_references(found)),
            Object::Dictionary(d) => d.values().for_each(|o| o.collect_references(found)),
            Object::Stream(s) => s.dictionary.values().for_each(|o| o.collect_references(found)),
            _ => {}
        }
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Object::String(obj) => obj.fmt(f),
            Object::Float(obj) => obj.fmt(f),
            Object::Integer(obj) => obj.fmt(f),
            Object::Bool(obj) => obj.fmt(f),
            Object::Name(obj) => obj.fmt(f),
            Object::Array(obj) => obj.fmt(f),
            Object::Dictionary(obj) => write!(f, "dict ({} entries)", obj.len()),
            Object::Stream(obj) => write!(f, "Stream {{ {} bytes }}", obj.data.len()),
            Object::Null => write!(f, "NULL"),
            Object::Reference(obj) => obj.fmt(f),
        }
    }
}

impl From<bool> for Object {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Object {
    fn from(v: i32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<i64> for Object {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<usize> for Object {
    /// Lengths and counts. Collections never hold more than `isize::MAX`
    /// elements, so the value always fits.
    fn from(v: usize) -> Self {
        Self::Integer(v as i64)
    }
}

impl From<f32> for Object {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<PwString> for Object {
    fn from(v: PwString) -> Self {
        Self::String(v)
    }
}

impl From<Name> for Object {
    fn from(n: Name) -> Self {
        Self::Name(n)
    }
}

impl From<Vec<Object>> for Object {
    fn from(a: Vec<Object>) -> Self {
        Self::Array(a.into())
    }
}

impl From<Array> for Object {
    fn from(a: Array) -> Self {
        Self::Array(a)
    }
}

impl From<Dictionary> for Object {
    fn from(d: Dictionary) -> Self {
        Self::Dictionary(d)
    }
}

impl From<Stream> for Object {
    fn from(s: Stream) -> Self {
        Self::Stream(s)
    }
}

impl From<Reference> for Object {
    fn from(r: Reference) -> Self {
        Self::Reference(r)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Bytes(Vec<u8>);

impl From<Vec<u8>> for Bytes {
    fn from(v: Vec<u8>) -> Self {
        Bytes(v)
    }
}

impl Deref for Bytes {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Bytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let limited_length = self.len().min(15);
        write!(f, "{}", &String::from_utf8_lossy(&self.0[..limited_length]))
    }
}

/// Dictionaries keep their insertion order so that encoding is deterministic.
pub type Dictionary = IndexMap<Name, Object, FnvBuildHasher>;

/// Build a dictionary from `(key, value)` pairs, keeping their order.
pub fn dictionary<const N: usize>(entries: [(&[u8], Object); N]) -> Dictionary {
    entries
        .into_iter()
        .map(|(key, value)| (Name::from(key), value))
        .collect()
}
