use crate::{
    pdf::PwString,
    simple_encode::SimpleEncoder,
    writer::{Encoder, Writer},
};

/// Escape sequence for a byte of a literal string, if it needs one.
fn escape_sequence(c: u8) -> Option<&'static str> {
    match c {
        b'\\' => Some(r"\\"),
        b'(' => Some(r"\("),
        b')' => Some(r"\)"),
        b'\n' => Some(r"\n"),
        _ => None,
    }
}

/// Escape `text` for use inside a literal string: `\` becomes `\\`, `(`
/// becomes `\(`, `)` becomes `\)` and a line feed becomes the two characters
/// `\n`.
///
/// Every character is looked at once, so the backslashes introduced for the
/// other characters are never escaped a second time.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match u8::try_from(c).ok().and_then(escape_sequence) {
            Some(sequence) => escaped.push_str(sequence),
            None => escaped.push(c),
        }
    }
    escaped
}

impl Encoder<PwString> for SimpleEncoder {
    fn encoded_len(str: &PwString) -> usize {
        let escapes = str.iter().filter(|&&c| escape_sequence(c).is_some()).count();

        // we need two additional bytes for the opening and closing paranthesis
        str.len() + escapes + 2
    }

    fn write_to(str: &PwString, writer: &mut dyn Writer) {
        writer.write(&b"("[..]);

        let mut last_written_index = 0;
        for (index, &c) in str.iter().enumerate() {
            if let Some(sequence) = escape_sequence(c) {
                writer.write(&str[last_written_index..index]);
                writer.write(sequence.as_bytes());
                last_written_index = index + 1;
            }
        }
        writer.write(&str[last_written_index..]);
        writer.write(&b")"[..]);
    }
}
