use std::ops::Deref;

/// Content of a literal string object, unescaped.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct PwString(Vec<u8>);

impl From<Vec<u8>> for PwString {
    fn from(v: Vec<u8>) -> Self {
        PwString(v)
    }
}

impl From<&str> for PwString {
    fn from(s: &str) -> Self {
        PwString(s.as_bytes().to_vec())
    }
}

impl Deref for PwString {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Debug for PwString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PwString")
            .field(&String::from_utf8_lossy(&self.0[..]))
            .finish()
    }
}

impl std::fmt::Display for PwString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &String::from_utf8_lossy(&self.0[..]))
    }
}
