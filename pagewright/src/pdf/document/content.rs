use crate::{
    pdf::{document::PageLayout, Dictionary, Object, PwString, Stream},
    simple_encode::SimpleEncoder,
    writer::{Encoder, Writer},
};

const BEGIN_TEXT: &[u8] = b"BT";
const SET_FONT: &[u8] = b"Tf";
const SET_LEADING: &[u8] = b"TL";
const SET_GRAY: &[u8] = b"g";
const MOVE_TEXT: &[u8] = b"Td";
const SHOW_TEXT: &[u8] = b"Tj";
const END_TEXT: &[u8] = b"ET";

/// Content stream that shows `text` as one string at the layout's origin.
///
/// With the default layout the stream data is the escaped text plus 44 bytes:
/// `BT /F1 24 Tf 28.8 TL 0 g 100 700 Td (...) Tj ET`.
pub fn content_stream(text: &str, layout: &PageLayout) -> Stream {
    let operations: [(Vec<Object>, &[u8]); 7] = [
        (vec![], BEGIN_TEXT),
        (
            vec![layout.font_resource.clone().into(), layout.font_size.into()],
            SET_FONT,
        ),
        (vec![layout.leading.into()], SET_LEADING),
        (vec![layout.gray.into()], SET_GRAY),
        (vec![layout.origin.0.into(), layout.origin.1.into()], MOVE_TEXT),
        (vec![PwString::from(text).into()], SHOW_TEXT),
        (vec![], END_TEXT),
    ];

    let mut data = Vec::<u8>::new();
    for (i, (operands, operator)) in operations.iter().enumerate() {
        if i != 0 {
            data.write(b" ");
        }
        for operand in operands {
            SimpleEncoder::write_to(operand, &mut data);
            data.write(b" ");
        }
        data.write(operator);
    }

    Stream::new(Dictionary::default(), data)
}
