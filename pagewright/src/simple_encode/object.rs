use crate::{
    parse::object::{FALSE_OBJECT, NULL_OBJECT, TRUE_OBJECT},
    pdf::Object,
    writer::{Encoder, Writer},
};

use super::SimpleEncoder;

pub(crate) mod array;
pub(crate) mod dictionary;
pub(crate) mod indirect;
pub(crate) mod name;
pub(crate) mod stream;
pub(crate) mod string;

impl Encoder<Object> for SimpleEncoder {
    fn write_to(obj: &Object, writer: &mut dyn Writer) {
        match obj {
            Object::String(str) => Self::write_to(str, writer),
            Object::Float(f) => write_real(*f, writer),
            Object::Integer(i) => writer.write(i.to_string().as_bytes()),
            Object::Bool(true) => writer.write(TRUE_OBJECT),
            Object::Bool(false) => writer.write(FALSE_OBJECT),
            Object::Name(n) => Self::write_to(n, writer),
            Object::Array(a) => Self::write_to(a, writer),
            Object::Dictionary(d) => Self::write_to(d, writer),
            Object::Stream(s) => Self::write_to(s, writer),
            Object::Null => writer.write(NULL_OBJECT),
            Object::Reference(r) => writer.write(r.to_string().as_bytes()),
        }
    }
}

/// Real numbers are written with at most five decimals and without trailing
/// zeros, integral values without a decimal point.
pub(crate) fn write_real(value: f32, writer: &mut dyn Writer) {
    if value.fract() == 0.0 && value.abs() < i32::MAX as f32 {
        writer.write((value as i32).to_string().as_bytes());
    } else {
        let formatted = format!("{:.5}", value);
        writer.write(formatted.trim_end_matches('0').trim_end_matches('.').as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use crate::pdf::{Name, PwString, Reference};

    use super::*;

    fn encode(obj: &Object) -> String {
        let mut out = Vec::new();
        SimpleEncoder::write_to(obj, &mut out);
        assert_eq!(SimpleEncoder::encoded_len(obj), out.len());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn scalars() {
        assert_eq!(encode(&Object::Integer(-12)), "-12");
        assert_eq!(encode(&Object::Bool(true)), "true");
        assert_eq!(encode(&Object::Bool(false)), "false");
        assert_eq!(encode(&Object::Null), "null");
        assert_eq!(encode(&Object::Reference(Reference::new(4, 0))), "4 0 R");
        assert_eq!(encode(&Object::Name(Name::from_str("Helvetica"))), "/Helvetica");
        assert_eq!(encode(&Object::String(PwString::from("a(b)"))), r"(a\(b\))");
    }

    #[test]
    fn reals() {
        assert_eq!(encode(&Object::Float(24.0)), "24");
        assert_eq!(encode(&Object::Float(28.8)), "28.8");
        assert_eq!(encode(&Object::Float(0.0)), "0");
        assert_eq!(encode(&Object::Float(-0.5)), "-0.5");
        assert_eq!(encode(&Object::Float(0.125)), "0.125");
    }
}
