use std::path::PathBuf;

use structopt::StructOpt;

/// Print the xref table, trailer and page text of a PDF written by pagewright.
#[derive(StructOpt, Debug)]
#[structopt(name = "pagewright-inspect")]
struct Opt {
    /// Input file
    #[structopt(short, long, parse(from_os_str))]
    input: PathBuf,
}

pub fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    let read_back = match pagewright::read_file(&opt.input) {
        Ok(read_back) => read_back,
        Err(e) => {
            log::error!("Error while parsing: {}", e);
            return;
        }
    };

    #[cfg(feature = "trace")]
    nom_tracable::histogram();

    println!("version {}", read_back.version);
    println!("xref at byte {}", read_back.startxref);
    for entry in read_back.xref.entries() {
        println!(
            "  {:>3} {:010} {:05} {}",
            entry.number(),
            entry.offset_field(),
            entry.generation(),
            if entry.is_free() { "f" } else { "n" }
        );
    }
    println!(
        "trailer: root {} size {}",
        read_back.trailer.root, read_back.trailer.size
    );
    for object in &read_back.objects {
        println!("  {} {} obj {}", object.index, object.generation, object.object);
    }
    if let Some(stream) = read_back.page_content() {
        println!("page content: {}", String::from_utf8_lossy(&stream.data));
    }
}
