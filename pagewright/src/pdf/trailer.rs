use super::{Dictionary, Object, Reference};

pub const TRAILER: &[u8] = b"trailer";
pub const K_SIZE: &[u8] = b"Size";
pub const K_ROOT: &[u8] = b"Root";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailerError {
    InvalidSize,
    MissingSize,
    InvalidRoot,
    MissingRoot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trailer {
    /// Number of entries in the xref table, the free object 0 included.
    pub size: usize,

    /// Reference to the document catalog.
    pub root: Reference,
}

impl From<Trailer> for Dictionary {
    fn from(trailer: Trailer) -> Self {
        let mut dict = Dictionary::with_capacity_and_hasher(2, Default::default());
        dict.insert(K_ROOT.into(), Object::Reference(trailer.root));
        dict.insert(K_SIZE.into(), Object::from(trailer.size));
        dict
    }
}

impl TryFrom<Dictionary> for Trailer {
    type Error = TrailerError;

    fn try_from(dict: Dictionary) -> Result<Self, Self::Error> {
        Ok(Trailer {
            size: dict
                .get(K_SIZE)
                .ok_or(TrailerError::MissingSize)?
                .integer()
                .ok_or(TrailerError::InvalidSize)?
                .try_into()
                .map_err(|_| TrailerError::InvalidSize)?,

            root: *dict
                .get(K_ROOT)
                .ok_or(TrailerError::MissingRoot)?
                .reference()
                .ok_or(TrailerError::InvalidRoot)?,
        })
    }
}
