use crate::{
    parse::object::is_regular,
    pdf::Name,
    writer::{Encoder, Writer},
};

use crate::simple_encode::SimpleEncoder;

/// Bytes that can't appear verbatim in a name and are written as `#XX`.
fn needs_escape(c: u8) -> bool {
    c == b'#' || !is_regular(c) || !(0x21..=0x7e).contains(&c)
}

impl Encoder<Name> for SimpleEncoder {
    fn encoded_len(n: &Name) -> usize {
        n.iter().map(|c| if needs_escape(*c) { 3 } else { 1 }).sum::<usize>() + 1
    }

    fn write_to(n: &Name, writer: &mut dyn Writer) {
        let mut last_write = 0;
        writer.write(b"/");
        for (index, &c) in n.iter().enumerate() {
            if needs_escape(c) {
                writer.write(&n[last_write..index]);
                last_write = index + 1;
                writer.write(b"#");
                writer.write(hex::encode_upper([c]).as_bytes())
            }
        }
        writer.write(&n[last_write..]);
    }
}
