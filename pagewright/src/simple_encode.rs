//! Straightforward encoder: no compression, no object streams, classic xref
//! table.

pub use object::string::escape;
pub use section::{encode, Layout};

pub(crate) mod object;
mod section;

pub struct SimpleEncoder;
