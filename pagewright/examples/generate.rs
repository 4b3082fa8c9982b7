use std::{fs, path::PathBuf};

use pagewright::{Generator, PageLayout};
use structopt::StructOpt;

/// Write markup fragments into a single page PDF.
#[derive(StructOpt, Debug)]
#[structopt(name = "pagewright-generate")]
struct Opt {
    /// Output file
    #[structopt(short, long, parse(from_os_str))]
    output: PathBuf,

    /// Read one fragment per line from this file
    #[structopt(short, long, parse(from_os_str))]
    input: Option<PathBuf>,

    /// Font size in points
    #[structopt(long, default_value = "24")]
    font_size: f32,

    /// Markup fragments, added in order
    fragments: Vec<String>,
}

pub fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    let mut generator = Generator::with_layout(PageLayout::new().with_font_size(opt.font_size));

    if let Some(input) = &opt.input {
        let markup = match fs::read_to_string(input) {
            Ok(markup) => markup,
            Err(e) => {
                log::error!("Could not read {}: {}", input.display(), e);
                return;
            }
        };
        for line in markup.lines() {
            generator.add_content(line);
        }
    }
    for fragment in &opt.fragments {
        generator.add_content(fragment);
    }

    if let Err(e) = generator.generate(&opt.output) {
        log::error!("Error while writing: {}", e);
    }
}
