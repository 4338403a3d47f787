use std::env;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use iso639_loader::{emit, load_tables, EmitConfig};

// The SIL release carries roughly 7,900 active codes.
const MIN_EXPECTED_RECORDS: usize = 7_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-env-changed=ISO639_DATA");

    let source = match env::var_os("ISO639_DATA") {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(env::var("CARGO_MANIFEST_DIR")?)
            .join("data")
            .join("iso-639-3.tab"),
    };
    println!("cargo:rerun-if-changed={}", source.display());

    let tables = load_tables(&fs::read(&source)?)?;
    let records = tables.records().len();
    if records < MIN_EXPECTED_RECORDS {
        println!(
            "cargo:warning={} holds only {} languages; lookups of codes missing from it return None",
            source.display(),
            records
        );
    }

    let config = EmitConfig {
        type_path: "crate".to_string(),
        source_label: source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned()),
    };

    let out = PathBuf::from(env::var("OUT_DIR")?).join("lang_db.rs");
    emit(&tables, &config, BufWriter::new(File::create(out)?))?;
    Ok(())
}
