//! The fixed single page object graph.
//!
//! Objects are numbered in creation order:
//!
//! | # | object |
//! |---|--------|
//! | 1 | catalog |
//! | 2 | page tree root |
//! | 3 | page |
//! | 4 | content stream |
//! | 5 | font |

pub use catalog::Catalog;
pub use content::content_stream;
pub use layout::PageLayout;
pub use pages::{Font, Page, Pages};

use crate::{
    error::PwError,
    pdf::{Dictionary, IndirectObject, Object, Reference},
};

pub mod catalog;
pub mod content;
pub mod layout;
pub mod pages;

/// Dictionary type names
pub(crate) mod dict_types {
    pub const CATALOG: &[u8] = b"Catalog";
    pub const PAGES: &[u8] = b"Pages";
    pub const PAGE: &[u8] = b"Page";
    pub const FONT: &[u8] = b"Font";
}

pub(crate) const K_TYPE: &[u8] = b"Type";
pub(crate) const K_SUBTYPE: &[u8] = b"Subtype";
pub(crate) const K_PARENT: &[u8] = b"Parent";
pub(crate) const K_KIDS: &[u8] = b"Kids";
pub(crate) const K_COUNT: &[u8] = b"Count";
pub(crate) const K_PAGES: &[u8] = b"Pages";
pub(crate) const K_MEDIA_BOX: &[u8] = b"MediaBox";
pub(crate) const K_CONTENTS: &[u8] = b"Contents";
pub(crate) const K_RESOURCES: &[u8] = b"Resources";
pub(crate) const K_FONT: &[u8] = b"Font";
pub(crate) const K_BASE_FONT: &[u8] = b"BaseFont";
pub(crate) const K_LENGTH: &[u8] = b"Length";

pub const CATALOG_REF: Reference = Reference::new(1, 0);
pub const PAGES_REF: Reference = Reference::new(2, 0);
pub const PAGE_REF: Reference = Reference::new(3, 0);
pub const CONTENTS_REF: Reference = Reference::new(4, 0);
pub const FONT_REF: Reference = Reference::new(5, 0);

/// Build the object graph that renders `text` on a single page.
///
/// The returned objects are ordered by object number and have been checked
/// with [`validate`].
pub fn build(text: &str, layout: &PageLayout) -> Result<Vec<IndirectObject>, PwError> {
    if let Some(field) = layout.non_finite_field() {
        log::error!("page layout {} is not a finite number", field);
        return Err(PwError::NonFiniteLayout { field });
    }

    // the stream comes first, its length depends on the escaped text only
    let contents = content_stream(text, layout);
    log::trace!("content stream with {} bytes", contents.data.len());

    let catalog = Catalog { pages: PAGES_REF };
    let pages = Pages { kids: vec![PAGE_REF] };
    let page = Page {
        parent: PAGES_REF,
        media_box: layout.media_box,
        contents: CONTENTS_REF,
        fonts: vec![(layout.font_resource.clone(), FONT_REF)],
    };
    let font = Font {
        base_font: layout.base_font.clone(),
    };

    let objects = vec![
        IndirectObject::new(CATALOG_REF.index, Dictionary::from(catalog)),
        IndirectObject::new(PAGES_REF.index, Dictionary::from(pages)),
        IndirectObject::new(PAGE_REF.index, Dictionary::from(page)),
        IndirectObject::new(CONTENTS_REF.index, contents),
        IndirectObject::new(FONT_REF.index, Dictionary::from(font)),
    ];

    validate(&objects)?;
    Ok(objects)
}

/// Check that objects are numbered `1..=n` in order and that every reference
/// points to one of them.
pub fn validate(objects: &[IndirectObject]) -> Result<(), PwError> {
    for (position, obj) in objects.iter().enumerate() {
        let expected = u32::try_from(position + 1).map_err(|_| PwError::ObjectNumbering {
            expected: u32::MAX,
            found: obj.index,
        })?;
        if obj.index != expected || obj.generation != 0 {
            return Err(PwError::ObjectNumbering {
                expected,
                found: obj.index,
            });
        }
    }

    for obj in objects {
        for reference in obj.object.references() {
            let target = usize::try_from(reference.index).unwrap_or(usize::MAX);
            let exists = target >= 1
                && objects
                    .get(target - 1)
                    .map_or(false, |o| o.generation == reference.generation);
            if !exists {
                log::error!("object {} refers to missing object {}", obj.index, reference);
                return Err(PwError::DanglingReference {
                    from: obj.index,
                    to: reference.index,
                });
            }
        }
    }

    Ok(())
}

/// Check the `Type` entry of a dictionary.
pub(crate) fn require_type(dict: &Dictionary, t: &[u8]) -> bool {
    if let Some(k) = dict.get(K_TYPE).and_then(Object::name) {
        if &k[..] != t {
            log::warn!("Wrong dictionary type `{}`", k);
            false
        } else {
            true
        }
    } else {
        log::warn!("Missing dictionary type");
        false
    }
}
