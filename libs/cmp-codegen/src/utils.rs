//! Small text and filesystem helpers shared by the generator and the CLI.

use anyhow::{Context, Result};
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::descriptor::ComponentDescriptor;
use crate::generator::{self, CLASS_SUFFIX};

/// Capitalize the first character, leaving the rest of the string untouched.
pub fn init_cap(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replace attribute names that collide with reserved words of the generated
/// language. `class` would produce `getClass`, which every generated class
/// already inherits, so it is emitted as `Clazz`.
pub fn escape_reserved(name: &str) -> &str {
    if name == "class" {
        "Clazz"
    } else {
        name
    }
}

/// Run the generator for `descriptor` and write the artifact into
/// `output_dir`, creating the directory if it does not exist.
///
/// Returns the path of the written file.
pub fn write_class_file(output_dir: &Path, descriptor: &ComponentDescriptor) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    let file_name = format!("{}{}.java", init_cap(&descriptor.name), CLASS_SUFFIX);
    let path = output_dir.join(file_name);
    let file = fs::File::create(&path)
        .with_context(|| format!("creating generated file {}", path.display()))?;
    generator::generate(descriptor, BufWriter::new(file))
        .with_context(|| format!("writing generated file {}", path.display()))?;

    Ok(path)
}
