use nom::{branch, bytes, character, combinator, multi};
use nom_tracable::tracable_parser;

use super::{
    backward_search,
    error::{PwParseError, PwParseErrorKind},
    PwParseResult, Span,
};
use crate::pdf::xref::{EOF_MARKER, STARTXREF, XREF};
use crate::pdf::{FreeObject, UsedObject, Xref, XrefEntry};

#[tracable_parser]
pub(crate) fn startxref_tail(input: Span) -> PwParseResult<usize> {
    let (remainder, (trailing, _)) =
        backward_search(STARTXREF.len() + 2048, bytes::complete::tag(STARTXREF))(input)?;
    let (trailing, _) = character::complete::multispace0(trailing)?;
    let (_, xref_pos) = character::complete::u64(trailing)?;
    let xref_pos: usize = xref_pos
        .try_into()
        .map_err(|_| PwParseError::error(input, PwParseErrorKind::StartxrefInvalid))?;

    Ok((remainder, xref_pos))
}

fn invalid_entry(input: Span) -> nom::Err<PwParseError<Span>> {
    PwParseError::failure(input, PwParseErrorKind::XrefInvalid)
}

#[tracable_parser]
fn xref_subsection(input: Span) -> PwParseResult<Vec<XrefEntry>> {
    let (remainder, first) = character::complete::u32(input)?;
    let (remainder, _) = character::complete::multispace1(remainder)?;
    let (remainder, count) = character::complete::u32(remainder)?;
    let (mut remainder, _) = character::complete::multispace0(remainder)?;

    // A subsection never announces more entries than there are bytes left.
    let capacity = (count as usize).min(remainder.fragment().len() / 20);
    let mut entries = Vec::with_capacity(capacity);

    for i in 0..count {
        let (inner, offset) = character::complete::u64(remainder)?;
        let (inner, _) = character::complete::space1(inner)?;
        let (inner, generation) = character::complete::u32(inner)?;
        let (inner, _) = character::complete::space1(inner)?;
        let (inner, free) = branch::alt((
            combinator::value(false, bytes::complete::tag(b"n")),
            combinator::value(true, bytes::complete::tag(b"f")),
        ))(inner)?;
        let (inner, _) = character::complete::multispace0(inner)?;

        let number = first
            .checked_add(i)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| invalid_entry(remainder))?;
        let offset = usize::try_from(offset).map_err(|_| invalid_entry(remainder))?;
        let generation = generation as usize;

        entries.push(if free {
            FreeObject {
                number,
                generation,
                next_free: offset,
            }
            .into()
        } else {
            UsedObject {
                number,
                byte_offset: offset,
                generation,
            }
            .into()
        });
        remainder = inner;
    }

    Ok((remainder, entries))
}

#[tracable_parser]
pub(crate) fn xref_table(input: Span) -> PwParseResult<Xref> {
    let (remainder, _) = character::complete::multispace0(input)?;
    let (remainder, _) = bytes::complete::tag(XREF)(remainder)?;
    let (remainder, _) = character::complete::multispace0(remainder)?;
    let (remainder, subsections) = multi::many1(xref_subsection)(remainder)?;

    let entries: Vec<XrefEntry> = subsections.into_iter().flatten().collect();
    Ok((remainder, Xref::from(entries)))
}

#[tracable_parser]
pub(crate) fn eof_marker_tail(input: Span) -> PwParseResult<()> {
    // allow a line ending after the marker
    let (remainder, _) =
        backward_search(EOF_MARKER.len() + 2, bytes::complete::tag(EOF_MARKER))(input)?;

    Ok((remainder, ()))
}
