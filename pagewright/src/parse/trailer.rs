use nom::{bytes, character};
use nom_tracable::tracable_parser;

use super::{
    backward_search,
    error::PwParseError,
    object::dictionary,
    PwParseResult, Span,
};
use crate::pdf::{trailer::TRAILER, Trailer};

#[tracable_parser]
pub(crate) fn trailer_tail(input: Span) -> PwParseResult<Trailer> {
    // find `trailer` key word (start search from the end)
    let (remainder, (trailing, _)) =
        backward_search(TRAILER.len() + 4096, bytes::complete::tag(TRAILER))(input)?;

    let (trailing, _) = character::complete::multispace0(trailing)?;
    let (_, dict) = dictionary(trailing)?;

    let trailer = Trailer::try_from(dict).map_err(|err| PwParseError::failure(input, err))?;

    Ok((remainder, trailer))
}
