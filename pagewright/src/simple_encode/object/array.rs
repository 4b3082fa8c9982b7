use crate::{
    pdf::Array,
    writer::{Encoder, Writer},
};

use crate::simple_encode::SimpleEncoder;

impl Encoder<Array> for SimpleEncoder {
    fn encoded_len(array: &Array) -> usize {
        // 1 Byte each for opening and closing bracket
        let mut size = 2;

        // bytes for all contained objects
        for item in array.iter() {
            size += Self::encoded_len(item);
        }

        // 1 delimiter between 2 objects
        size += array.len().saturating_sub(1);

        size
    }

    fn write_to(array: &Array, writer: &mut dyn Writer) {
        writer.write(b"[");
        for (i, item) in array.iter().enumerate() {
            if i != 0 {
                writer.write(b" ");
            }
            Self::write_to(item, writer);
        }
        writer.write(b"]");
    }
}

#[cfg(test)]
mod tests {
    use crate::pdf::{Object, Reference};

    use super::*;

    #[test]
    fn empty_array() {
        let array = Array::from(vec![]);
        let encoded_len = SimpleEncoder::encoded_len(&array);
        assert_eq!(encoded_len, 2);

        let mut out = Vec::new();
        SimpleEncoder::write_to(&array, &mut out);
        assert_eq!(b"[]", &out[..]);
        assert_eq!(encoded_len, out.len())
    }

    #[test]
    fn media_box() {
        let array: Array = [0, 0, 612, 792].into_iter().map(Object::Integer).collect();
        let encoded_len = SimpleEncoder::encoded_len(&array);
        let expected_output = b"[0 0 612 792]";
        assert_eq!(encoded_len, expected_output.len());

        let mut out = Vec::new();
        SimpleEncoder::write_to(&array, &mut out);
        assert_eq!(expected_output, &out[..]);
        assert_eq!(encoded_len, out.len())
    }

    #[test]
    fn kids() {
        let array = Array::from(vec![Object::Reference(Reference::new(3, 0))]);
        let mut out = Vec::new();
        SimpleEncoder::write_to(&array, &mut out);
        assert_eq!(b"[3 0 R]", &out[..]);
        assert_eq!(SimpleEncoder::encoded_len(&array), out.len())
    }
}
