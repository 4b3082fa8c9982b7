use crate::pdf::{
    document::{
        dict_types, K_BASE_FONT, K_CONTENTS, K_COUNT, K_FONT, K_KIDS, K_MEDIA_BOX, K_PARENT, K_RESOURCES,
        K_SUBTYPE, K_TYPE,
    },
    Array, Dictionary, Name, Object, Reference,
};

const TYPE1: &[u8] = b"Type1";

/// Page tree node.
#[derive(Debug, Clone, PartialEq)]
pub struct Pages {
    /// Page objects, indirect.
    pub kids: Vec<Reference>,
}

impl From<Pages> for Dictionary {
    fn from(pages: Pages) -> Self {
        // leaf count equals the number of kids, there are no intermediate nodes
        let count = pages.kids.len();

        let mut dict = Dictionary::with_capacity_and_hasher(3, Default::default());
        dict.insert(K_TYPE.into(), Object::Name(Name::from(dict_types::PAGES)));
        dict.insert(
            K_KIDS.into(),
            Object::Array(pages.kids.into_iter().map(Object::Reference).collect::<Array>()),
        );
        dict.insert(K_COUNT.into(), Object::from(count));
        dict
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub parent: Reference,
    /// `[llx lly urx ury]` in default user space units.
    pub media_box: [i32; 4],
    pub contents: Reference,
    /// Font resources by the name used inside the content stream.
    pub fonts: Vec<(Name, Reference)>,
}

impl From<Page> for Dictionary {
    fn from(page: Page) -> Self {
        let fonts: Dictionary = page
            .fonts
            .into_iter()
            .map(|(name, font)| (name, Object::Reference(font)))
            .collect();
        let mut resources = Dictionary::with_capacity_and_hasher(1, Default::default());
        resources.insert(K_FONT.into(), Object::Dictionary(fonts));

        let mut dict = Dictionary::with_capacity_and_hasher(5, Default::default());
        dict.insert(K_TYPE.into(), Object::Name(Name::from(dict_types::PAGE)));
        dict.insert(K_PARENT.into(), Object::Reference(page.parent));
        dict.insert(
            K_MEDIA_BOX.into(),
            Object::Array(page.media_box.into_iter().map(Object::from).collect()),
        );
        dict.insert(K_CONTENTS.into(), Object::Reference(page.contents));
        dict.insert(K_RESOURCES.into(), Object::Dictionary(resources));
        dict
    }
}

/// One of the standard 14 fonts, which readers provide themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub base_font: Name,
}

impl From<Font> for Dictionary {
    fn from(font: Font) -> Self {
        let mut dict = Dictionary::with_capacity_and_hasher(3, Default::default());
        dict.insert(K_TYPE.into(), Object::Name(Name::from(dict_types::FONT)));
        dict.insert(K_SUBTYPE.into(), Object::Name(Name::from(TYPE1)));
        dict.insert(K_BASE_FONT.into(), Object::Name(font.base_font));
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_count_matches_kids() {
        let dict = Dictionary::from(Pages {
            kids: vec![Reference::new(3, 0)],
        });
        assert_eq!(dict.get(K_COUNT).and_then(Object::integer), Some(1));
        assert_eq!(dict.get(K_KIDS).and_then(Object::array).map(|a| a.len()), Some(1));
    }

    #[test]
    fn page_declares_font_resource() {
        let dict = Dictionary::from(Page {
            parent: Reference::new(2, 0),
            media_box: [0, 0, 612, 792],
            contents: Reference::new(4, 0),
            fonts: vec![(Name::from_str("F1"), Reference::new(5, 0))],
        });
        let font = dict
            .get(K_RESOURCES)
            .and_then(Object::dictionary)
            .and_then(|r| r.get(K_FONT))
            .and_then(Object::dictionary)
            .and_then(|f| f.get(&b"F1"[..]))
            .and_then(Object::reference);
        assert_eq!(font, Some(&Reference::new(5, 0)));
    }
}
