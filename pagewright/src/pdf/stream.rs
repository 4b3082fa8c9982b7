use super::{Bytes, Dictionary};

/// Stream object. The `Length` entry of `dictionary` is recomputed from `data`
/// whenever the stream is encoded.
#[derive(Clone, Debug, PartialEq)]
pub struct Stream {
    pub dictionary: Dictionary,
    pub data: Bytes,
}

impl Stream {
    pub fn new(dictionary: Dictionary, data: Vec<u8>) -> Self {
        Self {
            dictionary,
            data: data.into(),
        }
    }
}
