use std::fmt::Display;

use super::Object;

/// A numbered object of the document body (`index generation obj ... endobj`).
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectObject {
    pub index: u32,
    pub generation: u32,
    pub object: Box<Object>,
}

impl IndirectObject {
    pub fn new(index: u32, object: impl Into<Object>) -> Self {
        Self {
            index,
            generation: 0,
            object: Box::new(object.into()),
        }
    }

    /// A reference that points to this object.
    pub fn reference(&self) -> Reference {
        Reference::new(self.index, self.generation)
    }
}

impl Display for IndirectObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Indirect {} {} {{ {} }}", self.index, self.generation, self.object)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reference {
    pub index: u32,
    pub generation: u32,
}

impl Reference {
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.index, self.generation)
    }
}
