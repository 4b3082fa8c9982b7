pub const XREF: &[u8] = b"xref";
pub const STARTXREF: &[u8] = b"startxref";
pub const EOF_MARKER: &[u8] = b"%%EOF";

/// Cross-reference table of a PDF section.
///
/// References in this table mark object numbers either as used or unused.
/// Used objects can be accessed at the given byte offset, unused object
/// numbers form a linked list that starts at object 0.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Xref(Vec<XrefEntry>);

impl Xref {
    pub fn entries(&self) -> impl Iterator<Item = &XrefEntry> {
        self.0.iter()
    }

    pub fn used_objects(&self) -> impl Iterator<Item = &UsedObject> {
        self.0
            .iter()
            .filter_map(|entry| if let XrefEntry::Used(u) = entry { Some(u) } else { None })
    }

    pub fn free_objects(&self) -> impl Iterator<Item = &FreeObject> {
        self.0
            .iter()
            .filter_map(|entry| if let XrefEntry::Free(u) = entry { Some(u) } else { None })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First object number covered by the table.
    pub fn first_number(&self) -> usize {
        self.0.iter().map(XrefEntry::number).min().unwrap_or(0)
    }
}

impl From<Vec<XrefEntry>> for Xref {
    fn from(v: Vec<XrefEntry>) -> Self {
        Xref(v)
    }
}

/// Generation number of the head of the free list.
pub const FREE_HEAD_GENERATION: usize = 65535;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeObject {
    /// Number of this object
    pub number: usize,
    /// Next generation number that should be used
    pub generation: usize,
    /// Next free object number
    pub next_free: usize,
}

impl FreeObject {
    /// Entry for object 0, the head of the free list.
    pub const fn head() -> Self {
        Self {
            number: 0,
            generation: FREE_HEAD_GENERATION,
            next_free: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsedObject {
    /// Number of this object
    pub number: usize,
    /// The position of this object in the pdf file in bytes, starting from the
    /// beginning of the PDF.
    pub byte_offset: usize,
    /// Generation of the object stored at `byte_offset`
    pub generation: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XrefEntry {
    Free(FreeObject),
    Used(UsedObject),
}

impl XrefEntry {
    pub fn number(&self) -> usize {
        match self {
            XrefEntry::Free(FreeObject { number, .. }) => *number,
            XrefEntry::Used(UsedObject { number, .. }) => *number,
        }
    }

    /// The ten digit field of a table entry: byte offset or next free object.
    pub fn offset_field(&self) -> usize {
        match self {
            XrefEntry::Free(FreeObject { next_free, .. }) => *next_free,
            XrefEntry::Used(UsedObject { byte_offset, .. }) => *byte_offset,
        }
    }

    pub fn generation(&self) -> usize {
        match self {
            XrefEntry::Free(FreeObject { generation, .. }) => *generation,
            XrefEntry::Used(UsedObject { generation, .. }) => *generation,
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, XrefEntry::Free(_))
    }
}

impl From<UsedObject> for XrefEntry {
    fn from(v: UsedObject) -> Self {
        Self::Used(v)
    }
}

impl From<FreeObject> for XrefEntry {
    fn from(v: FreeObject) -> Self {
        Self::Free(v)
    }
}
