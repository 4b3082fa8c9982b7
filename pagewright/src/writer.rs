/// Byte sink that knows how many bytes went into it.
pub trait Writer {
    fn write(&mut self, buf: &[u8]);

    /// Number of bytes written so far.
    fn position(&self) -> usize;
}

impl Writer for Vec<u8> {
    fn write(&mut self, buf: &[u8]) {
        self.extend_from_slice(buf);
    }

    fn position(&self) -> usize {
        self.len()
    }
}

/// Writer that only counts bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct LengthCounter(usize);

impl Writer for LengthCounter {
    fn write(&mut self, buf: &[u8]) {
        self.0 += buf.len();
    }

    fn position(&self) -> usize {
        self.0
    }
}

pub trait Encoder<T: ?Sized> {
    /// Number of bytes `write_to` produces for `o`.
    fn encoded_len(o: &T) -> usize {
        let mut counter = LengthCounter::default();
        Self::write_to(o, &mut counter);
        counter.position()
    }

    fn write_to(o: &T, writer: &mut dyn Writer);
}
