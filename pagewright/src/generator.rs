use std::{fs::File, io::Write, path::Path};

use crate::{
    error::PwError,
    markup::normalize,
    pdf::{
        document::{self, PageLayout},
        PdfVersion,
    },
    simple_encode::{self, Layout},
};

/// Collects markup fragments and writes them as a single page document.
///
/// ```no_run
/// # fn main() -> Result<(), pagewright::PwError> {
/// pagewright::Generator::new()
///     .add_content("<h1>Report</h1>")
///     .add_content("<p>All systems <strong>nominal</strong>.</p>")
///     .generate("report.pdf")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Generator {
    content: String,
    layout: PageLayout,
    version: PdfVersion,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: PageLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: PdfVersion) -> Self {
        self.version = version;
        self
    }

    /// Normalize `markup` and append it, followed by a line break.
    pub fn add_content(&mut self, markup: &str) -> &mut Self {
        let text = normalize(markup);
        log::trace!("add content block {:?}", text);
        self.content.push_str(&text);
        self.content.push('\n');
        self
    }

    /// The accumulated plain text.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Build the object graph and encode it, without touching storage.
    pub fn encode(&self) -> Result<Layout, PwError> {
        let objects = document::build(&self.content, &self.layout)?;
        Ok(simple_encode::encode(&self.version.header(), &objects))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, PwError> {
        Ok(self.encode()?.bytes)
    }

    /// Write the document to `path`, replacing any existing file.
    ///
    /// Nothing is left behind if writing fails after the file was created.
    pub fn generate(&self, path: impl AsRef<Path>) -> Result<(), PwError> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;

        let mut file = File::create(path)?;
        let written = file.write_all(&bytes).and_then(|_| file.sync_all());
        drop(file);

        if let Err(err) = written {
            log::warn!("writing {} failed: {}", path.display(), err);
            if let Err(remove_err) = std::fs::remove_file(path) {
                log::warn!("could not remove {}: {}", path.display(), remove_err);
            }
            return Err(err.into());
        }

        log::info!("PDF generated at {}", path.display());
        Ok(())
    }
}
