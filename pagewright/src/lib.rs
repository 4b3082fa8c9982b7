use std::{fs::File, io::Read, path::Path};

pub use error::PwError;
pub use generator::Generator;
pub use markup::normalize;
pub use parse::{read, ReadBack};
pub use pdf::{document::PageLayout, PdfVersion};
pub use simple_encode::{encode, escape, Layout, SimpleEncoder};

mod error;
pub mod generator;
pub mod markup;
pub mod parse;
pub mod pdf;
pub mod simple_encode;
pub mod writer;

/// Read a PDF file written by this crate.
pub fn read_file(file_path: impl AsRef<Path>) -> Result<ReadBack, PwError> {
    let mut input_file = File::open(file_path)?;
    let mut buf = Vec::new();
    input_file.read_to_end(&mut buf)?;

    read(&buf)
}
