use crate::pdf::{
    document::{dict_types, K_PAGES, K_TYPE},
    Dictionary, Name, Object, Reference,
};

/// Root of the document's object hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Root node of the page tree.
    pub pages: Reference,
}

impl From<Catalog> for Dictionary {
    fn from(catalog: Catalog) -> Self {
        let mut dict = Dictionary::with_capacity_and_hasher(2, Default::default());
        dict.insert(K_TYPE.into(), Object::Name(Name::from(dict_types::CATALOG)));
        dict.insert(K_PAGES.into(), Object::Reference(catalog.pages));
        dict
    }
}
