use crate::{
    pdf::{document::K_LENGTH, Name, Object, Stream},
    writer::{Encoder, Writer},
};

use crate::simple_encode::SimpleEncoder;

pub(crate) const START_STREAM: &[u8] = b"stream";
pub(crate) const END_STREAM: &[u8] = b"endstream";

impl Encoder<Stream> for SimpleEncoder {
    fn write_to(s: &Stream, writer: &mut dyn Writer) {
        // the declared length always matches the data we write
        let mut updated_dict = s.dictionary.clone();
        updated_dict.insert(
            Name::from(K_LENGTH),
            Object::from(s.data.len()),
        );
        Self::write_to(&updated_dict, writer);
        writer.write(b"\n");
        writer.write(START_STREAM);
        writer.write(b"\n");
        writer.write(&s.data);
        writer.write(b"\n");
        writer.write(END_STREAM);
    }
}
