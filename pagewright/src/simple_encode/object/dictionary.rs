use crate::{
    pdf::Dictionary,
    writer::{Encoder, Writer},
};

use crate::simple_encode::SimpleEncoder;

impl Encoder<Dictionary> for SimpleEncoder {
    fn encoded_len(o: &Dictionary) -> usize {
        // `<< ` and ` >>`, empty dictionaries are written as `<< >>`
        let mut size = if o.is_empty() { 5 } else { 6 };
        size += o
            .iter()
            .map(|(n, o)| Self::encoded_len(n) + Self::encoded_len(o))
            .sum::<usize>();

        // For N entries we need N delimiters between key and value. We also need one
        // delimiter for each pair (N - 1). This leads to 2 * N - 1.
        size += (o.len() * 2).saturating_sub(1);

        size
    }

    fn write_to(o: &Dictionary, writer: &mut dyn Writer) {
        writer.write(b"<<");
        for (key, value) in o.iter() {
            writer.write(b" ");
            Self::write_to(key, writer);
            writer.write(b" ");
            Self::write_to(value, writer);
        }
        writer.write(b" >>");
    }
}

#[cfg(test)]
mod tests {
    use crate::pdf::{dictionary, Name, Object, Reference};

    use super::*;

    #[test]
    fn empty_dict() {
        let d = Dictionary::default();
        let expected_len = SimpleEncoder::encoded_len(&d);
        let expected_output = b"<< >>";
        assert_eq!(expected_len, expected_output.len());

        let mut out = Vec::new();
        SimpleEncoder::write_to(&d, &mut out);
        assert_eq!(expected_output, &out[..]);
        assert_eq!(out.len(), expected_len);
    }

    #[test]
    fn filled_dict() {
        let d = dictionary([
            (&b"Type"[..], Object::Name(Name::from_str("Catalog"))),
            (&b"Pages"[..], Object::Reference(Reference::new(2, 0))),
        ]);

        let expected_len = SimpleEncoder::encoded_len(&d);
        let expected_output = b"<< /Type /Catalog /Pages 2 0 R >>";
        assert_eq!(expected_len, expected_output.len());

        let mut out = Vec::new();
        SimpleEncoder::write_to(&d, &mut out);
        assert_eq!(
            expected_output,
            &out[..],
            "expected: {} got: {}",
            String::from_utf8_lossy(expected_output),
            String::from_utf8_lossy(&out[..])
        );
        assert_eq!(out.len(), expected_len);
    }

    #[test]
    fn nested_dict() {
        let fonts = dictionary([(&b"F1"[..], Object::Reference(Reference::new(5, 0)))]);
        let d = dictionary([(&b"Font"[..], Object::Dictionary(fonts))]);

        let mut out = Vec::new();
        SimpleEncoder::write_to(&d, &mut out);
        assert_eq!(b"<< /Font << /F1 5 0 R >> >>", &out[..]);
        assert_eq!(out.len(), SimpleEncoder::encoded_len(&d));
    }
}
