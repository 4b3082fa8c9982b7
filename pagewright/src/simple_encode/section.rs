use crate::{
    pdf::{
        trailer::TRAILER,
        xref::{EOF_MARKER, STARTXREF, XREF},
        Dictionary, FreeObject, IndirectObject, Reference, Trailer, UsedObject, Xref, XrefEntry,
    },
    simple_encode::SimpleEncoder,
    writer::{Encoder, Writer},
};

/// A fully encoded file together with the positions recorded while writing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub bytes: Vec<u8>,
    /// One offset per xref entry. Entry 0 is the free list head and holds 0.
    pub offsets: Vec<usize>,
    /// Position of the `xref` keyword.
    pub startxref: usize,
}

/// Write `header`, the objects, the xref table and the trailer.
///
/// `objects` must be ordered by object number starting at 1; the first one is
/// the document catalog.
pub fn encode(header: &[u8], objects: &[IndirectObject]) -> Layout {
    log::trace!("write PDF Section");

    let mut out = Vec::<u8>::new();
    out.write(header);

    // prepare list of xref entries
    let mut xref_entries = Vec::<XrefEntry>::with_capacity(objects.len() + 1);
    xref_entries.push(FreeObject::head().into());

    // write objects and add XRef entry to list
    for obj in objects {
        let byte_offset = out.position();
        log::debug!("object {} starts at byte {}", obj.index, byte_offset);
        xref_entries.push(
            UsedObject {
                number: obj.index as usize,
                byte_offset,
                generation: obj.generation as usize,
            }
            .into(),
        );
        SimpleEncoder::write_to(obj, &mut out);
    }

    let startxref = out.position();
    log::debug!("xref table starts at byte {}", startxref);
    let xref = Xref::from(xref_entries);
    SimpleEncoder::write_to(&xref, &mut out);

    let root = match objects.first() {
        Some(catalog) => catalog.reference(),
        None => {
            log::warn!("encoding a section without objects");
            Reference::new(0, 0)
        }
    };
    SimpleEncoder::write_to(&Trailer { size: xref.len(), root }, &mut out);

    out.write(STARTXREF);
    out.write(b"\n");
    out.write(startxref.to_string().as_bytes());
    out.write(b"\n");
    out.write(EOF_MARKER);

    Layout {
        bytes: out,
        offsets: xref.entries().map(XrefEntry::offset_field).collect(),
        startxref,
    }
}

impl Encoder<Xref> for SimpleEncoder {
    fn write_to(o: &Xref, writer: &mut dyn Writer) {
        log::trace!("write XRef");

        writer.write(XREF);
        writer.write(b"\n");
        writer.write(format!("{} {}\n", o.first_number(), o.len()).as_bytes());
        for entry in o.entries() {
            // every entry is exactly 20 bytes, the line ending included
            let flag = if entry.is_free() { 'f' } else { 'n' };
            let line = format!("{:010} {:05} {} \n", entry.offset_field(), entry.generation(), flag);
            writer.write(line.as_bytes());
        }
    }
}

impl Encoder<Trailer> for SimpleEncoder {
    fn write_to(trailer: &Trailer, writer: &mut dyn Writer) {
        log::trace!("write Trailer");

        let trailer_dict: Dictionary = trailer.clone().into();
        writer.write(TRAILER);
        writer.write(b"\n");
        Self::write_to(&trailer_dict, writer);
        writer.write(b"\n");
    }
}

#[cfg(test)]
mod tests {
    use crate::pdf::{document, Object};

    use super::*;

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    #[test]
    fn xref_entries_are_twenty_bytes() {
        let xref = Xref::from(vec![
            XrefEntry::from(FreeObject::head()),
            UsedObject {
                number: 1,
                byte_offset: 9,
                generation: 0,
            }
            .into(),
        ]);
        let mut out = Vec::new();
        SimpleEncoder::write_to(&xref, &mut out);
        assert_eq!(
            String::from_utf8(out.clone()).unwrap(),
            "xref\n0 2\n0000000000 65535 f \n0000000009 00000 n \n"
        );
        assert_eq!(out.len(), "xref\n0 2\n".len() + 2 * 20);
    }

    #[test]
    fn trailer() {
        let mut out = Vec::new();
        SimpleEncoder::write_to(
            &Trailer {
                size: 6,
                root: Reference::new(1, 0),
            },
            &mut out,
        );
        assert_eq!(out, b"trailer\n<< /Root 1 0 R /Size 6 >>\n".to_vec());
    }

    #[test]
    fn offsets_point_at_objects() {
        let objects = vec![
            IndirectObject::new(1, Object::Integer(7)),
            IndirectObject::new(2, Object::Null),
        ];
        let layout = encode(b"%PDF-1.4\n", &objects);
        assert_eq!(layout.offsets, vec![0, 9, 26]);
        assert_eq!(&layout.bytes[9..16], b"1 0 obj");
        assert_eq!(&layout.bytes[26..33], b"2 0 obj");
        assert_eq!(layout.startxref, 46);
        assert_eq!(find(&layout.bytes, XREF), Some(layout.startxref));
        assert!(layout.bytes.ends_with(format!("startxref\n{}\n%%EOF", layout.startxref).as_bytes()));
    }

    #[test]
    fn multi_byte_text_shifts_offsets_by_bytes() {
        let layout = document::PageLayout::default();
        let ascii = encode(b"%PDF-1.4\n", &document::build("ae", &layout).unwrap());
        let umlaut = encode(b"%PDF-1.4\n", &document::build("ä", &layout).unwrap());

        // same number of bytes, although one character less
        assert_eq!(ascii.offsets, umlaut.offsets);
        assert_eq!(ascii.startxref, umlaut.startxref);
        assert_eq!(ascii.bytes.len(), umlaut.bytes.len());

        let longer = encode(b"%PDF-1.4\n", &document::build("äö", &layout).unwrap());
        assert_eq!(longer.offsets[5], umlaut.offsets[5] + 2);
        assert_eq!(longer.startxref, umlaut.startxref + 2);
        assert_eq!(find(&longer.bytes, b"5 0 obj"), Some(longer.offsets[5]));
    }
}
