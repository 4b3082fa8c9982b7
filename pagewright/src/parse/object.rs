use nom::{
    branch, bytes, character, combinator,
    error::{ErrorKind, ParseError},
    multi, number, sequence, InputTake,
};
use nom_tracable::tracable_parser;

use super::{
    error::{PwParseError, PwParseErrorKind},
    PwParseResult, Span,
};
use crate::{
    pdf::{document::K_LENGTH, Array, Dictionary, IndirectObject, Name, Object, PwString, Reference, Stream},
    simple_encode::object::{
        indirect::{END_OBJ, START_OBJ},
        stream::{END_STREAM, START_STREAM},
    },
};

pub(crate) const TRUE_OBJECT: &[u8] = b"true";
pub(crate) const FALSE_OBJECT: &[u8] = b"false";
pub(crate) const NULL_OBJECT: &[u8] = b"null";
const DICT_START: &[u8] = b"<<";
const DICT_END: &[u8] = b">>";

pub(crate) fn is_delimiter(chr: u8) -> bool {
    matches!(
        chr,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

pub(crate) fn is_regular(chr: u8) -> bool {
    !is_delimiter(chr) && !chr.is_ascii_whitespace()
}

/// Consume all whitespace. If input doesn't start with a whitespace, peek the
/// next char and require it to be a delimiter.
fn require_termination(input: Span) -> PwParseResult<()> {
    let (remainder, whitespace) = character::complete::multispace0(input)?;
    if whitespace.fragment().is_empty() && !remainder.fragment().is_empty() {
        bytes::complete::take_while_m_n(1, 1, is_delimiter)(remainder)?;
    }
    Ok((remainder, ()))
}

/// Split off the content of a literal string, up to the closing parenthesis.
fn string_content(input: Span) -> PwParseResult<Span> {
    let mut open_parenthesis = 0usize;
    let mut escaped = false;

    for (index, &c) in input.fragment().iter().enumerate() {
        match c {
            _ if escaped => escaped = false,
            b'\\' => escaped = true,
            b'(' => open_parenthesis += 1,
            b')' if open_parenthesis == 0 => return Ok(input.take_split(index)),
            b')' => open_parenthesis -= 1,
            _ => {}
        }
    }

    Err(nom::Err::Error(PwParseError::from_error_kind(input, ErrorKind::Char)))
}

/// Resolve the escape sequences of a literal string.
pub fn unescape(content: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len());
    let mut bytes = content.iter().copied();
    while let Some(c) = bytes.next() {
        if c != b'\\' {
            out.push(c);
            continue;
        }
        match bytes.next() {
            Some(b'n') => out.push(b'\n'),
            Some(b'r') => out.push(b'\r'),
            Some(b't') => out.push(b'\t'),
            Some(b'b') => out.push(0x08),
            Some(b'f') => out.push(0x0c),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

pub(crate) fn string_object(input: Span) -> PwParseResult<Object> {
    let (remainder, content) = sequence::delimited(
        character::complete::char('('),
        string_content,
        character::complete::char(')'),
    )(input)?;

    let (remainder, _) = character::complete::multispace0(remainder)?;

    Ok((
        remainder,
        Object::String(PwString::from(unescape(content.fragment()))),
    ))
}

pub(crate) fn bool_object(input: Span) -> PwParseResult<Object> {
    let (remainder, obj) = branch::alt((
        combinator::value(Object::Bool(true), bytes::complete::tag(TRUE_OBJECT)),
        combinator::value(Object::Bool(false), bytes::complete::tag(FALSE_OBJECT)),
    ))(input)?;

    let (remainder, _) = require_termination(remainder)?;

    Ok((remainder, obj))
}

pub(crate) fn number_object(input: Span) -> PwParseResult<Object> {
    branch::alt((
        combinator::map(
            sequence::terminated(character::complete::i64, require_termination),
            Object::from,
        ),
        combinator::map(
            sequence::terminated(number::complete::float, require_termination),
            Object::from,
        ),
    ))(input)
}

pub(crate) fn null_object(input: Span) -> PwParseResult<Object> {
    let (remainder, _) = bytes::complete::tag(NULL_OBJECT)(input)?;
    let (remainder, _) = require_termination(remainder)?;

    Ok((remainder, Object::Null))
}

/// Replace all `#XX` sequences of a raw name.
fn decode_name(raw: &[u8]) -> Name {
    let mut name = Vec::with_capacity(raw.len());
    let mut index = 0;
    while index < raw.len() {
        let decoded = raw
            .get(index + 1..index + 3)
            .filter(|_| raw[index] == b'#')
            .and_then(|digits| hex::decode(digits).ok());
        match decoded {
            Some(byte) => {
                name.extend(byte);
                index += 3;
            }
            None => {
                name.push(raw[index]);
                index += 1;
            }
        }
    }
    Name::from(name)
}

pub(crate) fn name(input: Span) -> PwParseResult<Name> {
    let (remainder, _) = character::complete::char('/')(input)?;
    let (remainder, name) = bytes::complete::take_while(is_regular)(remainder)?;
    let (remainder, _) = require_termination(remainder)?;

    Ok((remainder, decode_name(name.fragment())))
}

pub(crate) fn name_object(input: Span) -> PwParseResult<Object> {
    combinator::map(name, Object::from)(input)
}

pub(crate) fn dictionary_entry(input: Span) -> PwParseResult<(Name, Object)> {
    let (remainder, name) = name(input)?;
    let (remainder, obj) = object(remainder)?;

    Ok((remainder, (name, obj)))
}

pub(crate) fn dictionary(input: Span) -> PwParseResult<Dictionary> {
    sequence::delimited(
        sequence::terminated(bytes::complete::tag(DICT_START), character::complete::multispace0),
        multi::fold_many0(dictionary_entry, Dictionary::default, |mut acc, (name, obj)| {
            acc.insert(name, obj);
            acc
        }),
        sequence::terminated(bytes::complete::tag(DICT_END), require_termination),
    )(input)
}

pub(crate) fn dictionary_object(input: Span) -> PwParseResult<Object> {
    combinator::map(dictionary, Object::Dictionary)(input)
}

pub(crate) fn array_object(input: Span) -> PwParseResult<Object> {
    let (remainder, array) = sequence::delimited(
        sequence::terminated(character::complete::char('['), character::complete::multispace0),
        multi::fold_many0(object, Array::new, |mut acc, obj| {
            acc.push(obj);
            acc
        }),
        sequence::terminated(character::complete::char(']'), require_termination),
    )(input)?;

    Ok((remainder, Object::Array(array)))
}

pub(crate) fn reference_object(input: Span) -> PwParseResult<Object> {
    let (remainder, index) = character::complete::u32(input)?;
    let (remainder, _) = character::complete::multispace1(remainder)?;
    let (remainder, generation) = character::complete::u32(remainder)?;
    let (remainder, _) = character::complete::multispace1(remainder)?;
    let (remainder, _) = character::complete::char('R')(remainder)?;
    let (remainder, _) = require_termination(remainder)?;

    Ok((remainder, Object::Reference(Reference::new(index, generation))))
}

pub(crate) fn object(input: Span) -> PwParseResult<Object> {
    // The order is important!
    branch::alt((
        dictionary_object,
        array_object,
        string_object,
        // references have to be tested before we try to parse an integer.
        // `0 0 R` is a reference while `0 0` are two integers.
        reference_object,
        number_object,
        bool_object,
        null_object,
        name_object,
    ))(input)
}

/// Data of a stream whose dictionary has already been parsed.
fn stream_data(input: Span, length: usize) -> PwParseResult<Span> {
    let (remainder, _) = bytes::complete::tag(START_STREAM)(input)?;
    let (remainder, _) = character::complete::line_ending(remainder)?;
    let (remainder, data) = bytes::complete::take(length)(remainder)?;
    let (remainder, _) = character::complete::multispace0(remainder)?;
    let (remainder, _) = bytes::complete::tag(END_STREAM)(remainder)?;
    let (remainder, _) = character::complete::multispace0(remainder)?;

    Ok((remainder, data))
}

#[tracable_parser]
pub(crate) fn indirect_object(input: Span) -> PwParseResult<IndirectObject> {
    let (remainder, index) = character::complete::u32(input)?;
    let (remainder, _) = character::complete::multispace1(remainder)?;
    let (remainder, generation) = character::complete::u32(remainder)?;
    let (remainder, _) = character::complete::multispace1(remainder)?;
    let (remainder, _) = bytes::complete::tag(START_OBJ)(remainder)?;
    let (remainder, _) = character::complete::multispace1(remainder)?;
    let (remainder, obj) = object(remainder)?;

    let (remainder, obj) = match obj {
        Object::Dictionary(dictionary) if remainder.fragment().starts_with(START_STREAM) => {
            let length = dictionary
                .get(K_LENGTH)
                .and_then(Object::integer)
                .and_then(|l| usize::try_from(l).ok())
                .ok_or_else(|| {
                    PwParseError::failure(remainder, PwParseErrorKind::StreamLength)
                })?;
            let (remainder, data) = stream_data(remainder, length)?;
            (
                remainder,
                Object::Stream(Stream::new(dictionary, data.fragment().to_vec())),
            )
        }
        obj => (remainder, obj),
    };

    let (remainder, _) = bytes::complete::tag(END_OBJ)(remainder)?;
    let (remainder, _) = require_termination(remainder)?;

    Ok((
        remainder,
        IndirectObject {
            index,
            generation,
            object: Box::new(obj),
        },
    ))
}
