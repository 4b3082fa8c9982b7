use crate::{
    pdf::IndirectObject,
    writer::{Encoder, Writer},
};

use crate::simple_encode::SimpleEncoder;

pub(crate) const START_OBJ: &[u8] = b"obj";
pub(crate) const END_OBJ: &[u8] = b"endobj";

impl Encoder<IndirectObject> for SimpleEncoder {
    fn write_to(o: &IndirectObject, writer: &mut dyn Writer) {
        writer.write(o.index.to_string().as_bytes());
        writer.write(b" ");
        writer.write(o.generation.to_string().as_bytes());
        writer.write(b" ");
        writer.write(START_OBJ);
        writer.write(b"\n");
        Self::write_to(&*o.object, writer);
        writer.write(b"\n");
        writer.write(END_OBJ);
        writer.write(b"\n");
    }
}
