//! Reading back files produced by the encoder.
//!
//! Only what the encoder writes is understood: a header, uncompressed
//! indirect objects, one classic xref table and a trailer dictionary.

use nom::{bytes, character, InputTake, Parser};
use nom_locate::LocatedSpan;
use nom_tracable::{tracable_parser, TracableInfo};

use crate::{
    error::PwError,
    pdf::{
        document::{dict_types, require_type, K_CONTENTS, K_KIDS, K_PAGES},
        Dictionary, IndirectObject, Object, PdfVersion, Reference, Stream, Trailer, Xref,
    },
};

use self::error::{PwParseError, PwParseErrorKind};

pub mod error;
pub(crate) mod object;
mod trailer;
mod xref;

pub(crate) type Span<'a> = LocatedSpan<&'a [u8], TracableInfo>;
pub(crate) type PwParseResult<'a, O> = nom::IResult<Span<'a>, O, PwParseError<Span<'a>>>;

const HEADER_PREFIX: &[u8] = b"%PDF-";

/// Everything that was found in a file.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadBack {
    pub version: PdfVersion,
    /// Objects in the order of the xref table.
    pub objects: Vec<IndirectObject>,
    pub xref: Xref,
    pub trailer: Trailer,
    /// Value announced after the `startxref` keyword.
    pub startxref: usize,
}

impl ReadBack {
    pub fn dereference(&self, reference: &Reference) -> Option<&Object> {
        self.objects
            .iter()
            .find(|o| o.index == reference.index && o.generation == reference.generation)
            .map(|o| &*o.object)
    }

    pub fn catalog(&self) -> Option<&Dictionary> {
        let catalog = self.dereference(&self.trailer.root)?.dictionary()?;
        require_type(catalog, dict_types::CATALOG).then_some(catalog)
    }

    /// Content stream of the first page.
    pub fn page_content(&self) -> Option<&Stream> {
        let pages = self
            .dereference(self.catalog()?.get(K_PAGES)?.reference()?)?
            .dictionary()?;
        if !require_type(pages, dict_types::PAGES) {
            return None;
        }

        let page = self
            .dereference(pages.get(K_KIDS)?.array()?.first()?.reference()?)?
            .dictionary()?;
        if !require_type(page, dict_types::PAGE) {
            return None;
        }

        self.dereference(page.get(K_CONTENTS)?.reference()?)?.stream()
    }
}

/// Parse a complete file.
pub fn read(buf: &[u8]) -> Result<ReadBack, PwError> {
    let info = TracableInfo::new().forward(true).backward(true);
    let span = LocatedSpan::new_extra(buf, info);

    let (_, read_back) = parse_complete(span).map_err(|err| {
        if let nom::Err::Error(e) | nom::Err::Failure(e) = &err {
            let cause = e.root_cause();
            log::debug!("reading failed at byte {}: {}", cause.offset(), cause.kind);
        }
        err
    })?;

    Ok(read_back)
}

/// Search backwards from the end of `input`, at most `limit` bytes, for the
/// first position at which `parser` succeeds.
///
/// Returns the bytes in front of the match, the bytes the parser left over and
/// the parser output.
pub(crate) fn backward_search<'a, O, P>(
    limit: usize,
    mut parser: P,
) -> impl FnMut(Span<'a>) -> PwParseResult<'a, (Span<'a>, O)>
where
    P: Parser<Span<'a>, O, PwParseError<Span<'a>>>,
{
    move |input: Span<'a>| {
        let len = input.fragment().len();
        for position in (len.saturating_sub(limit)..len).rev() {
            let (tail, head) = input.take_split(position);
            if let Ok((trailing, output)) = parser.parse(tail) {
                return Ok((head, (trailing, output)));
            }
        }

        Err(PwParseError::error(input, PwParseErrorKind::BackwardSearchNotFound))
    }
}

#[tracable_parser]
fn version(input: Span) -> PwParseResult<PdfVersion> {
    let (remainder, _) = bytes::complete::tag(HEADER_PREFIX)(input)?;
    let (remainder, major) = character::complete::u8(remainder)?;
    let (remainder, _) = character::complete::char('.')(remainder)?;
    let (remainder, minor) = character::complete::u8(remainder)?;
    let (remainder, _) = character::complete::multispace0(remainder)?;

    Ok((remainder, PdfVersion::new(major, minor)))
}

#[tracable_parser]
pub(crate) fn parse_complete(input: Span) -> PwParseResult<ReadBack> {
    let (_, version) = version(input)?;
    let (_, _) = xref::eof_marker_tail(input)?;
    let (_, startxref) = xref::startxref_tail(input)?;

    let (xref_input, _) = bytes::complete::take(startxref)(input)?;
    let (_, xref) = xref::xref_table(xref_input)?;
    let (_, trailer) = trailer::trailer_tail(input)?;

    let mut objects = Vec::with_capacity(xref.len());
    for used in xref.used_objects() {
        let (object_input, _) = bytes::complete::take(used.byte_offset)(input)?;
        let (_, object) = object::indirect_object(object_input)?;
        if object.index as usize != used.number {
            log::warn!(
                "xref entry {} points to object {} at byte {}",
                used.number,
                object.index,
                used.byte_offset
            );
            return Err(PwParseError::failure(object_input, PwParseErrorKind::XrefInvalid));
        }
        objects.push(object);
    }

    Ok((
        input,
        ReadBack {
            version,
            objects,
            xref,
            trailer,
            startxref,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(input: &[u8]) -> Span {
        LocatedSpan::new_extra(input, TracableInfo::new())
    }

    #[test]
    fn test_parse_version() {
        let (remainder, version) = version(span(b"%PDF-1.4\n1 0 obj")).unwrap();
        assert_eq!(version, PdfVersion::new(1, 4));
        assert_eq!(*remainder.fragment(), &b"1 0 obj"[..]);
    }

    #[test]
    fn test_backward_search_finds_last_match() {
        let input = span(b"xref one xref two");
        let (head, (trailing, _)) =
            backward_search(64, bytes::complete::tag(&b"xref"[..]))(input).unwrap();
        assert_eq!(*head.fragment(), &b"xref one "[..]);
        assert_eq!(*trailing.fragment(), &b" two"[..]);
    }

    #[test]
    fn test_backward_search_respects_limit() {
        let input = span(b"xref and then some more bytes");
        assert!(backward_search(8, bytes::complete::tag(&b"xref"[..]))(input).is_err());
    }

    #[test]
    fn test_parse() {
        let file = b"%PDF-1.4
1 0 obj
<< /Type /Catalog /Pages 2 0 R >>
endobj
2 0 obj
<< /Type /Pages /Kids [] /Count 0 >>
endobj
xref
0 3
0000000000 65535 f 
0000000009 00000 n 
0000000058 00000 n 
trailer
<< /Root 1 0 R /Size 3 >>
startxref
110
%%EOF";
        let read_back = read(file).unwrap();
        assert_eq!(read_back.version, PdfVersion::new(1, 4));
        assert_eq!(read_back.startxref, 110);
        assert_eq!(read_back.trailer.size, 3);
        assert_eq!(read_back.objects.len(), 2);
        assert!(read_back.catalog().is_some());
        assert!(read_back.page_content().is_none());
    }

    #[test]
    fn test_wrong_offset_is_rejected() {
        let file = b"%PDF-1.4
1 0 obj
null
endobj
xref
0 2
0000000000 65535 f 
0000000010 00000 n 
trailer
<< /Root 1 0 R /Size 2 >>
startxref
29
%%EOF";
        assert!(read(file).is_err());

        match parse_complete(span(file)).unwrap_err() {
            nom::Err::Error(e) | nom::Err::Failure(e) => assert_eq!(e.root_cause().offset(), 10),
            nom::Err::Incomplete(_) => panic!("unexpected incomplete"),
        }
    }
}
