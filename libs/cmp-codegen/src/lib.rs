//! Trellis component class generator.
//!
//! Translates declarative component markup into generated server-side
//! classes through a three-stage pipeline:
//! 1. **Parser**: reads component markup into a descriptor
//! 2. **Descriptor**: the component's identifier/metadata bundle
//! 3. **Generator**: deterministic class emission from the descriptor
//!
//! The parser and generator are independent ends of the pipeline; either can
//! be used on its own. Descriptors may arrive from other definition sources,
//! and generated output goes to any `io::Write` sink.

pub mod descriptor;
pub mod error;
pub mod generator;
pub mod parser;
pub mod utils;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use descriptor::ComponentDescriptor;

/// Parse a component markup file into a descriptor. The file stem becomes
/// the component name.
pub fn parse_markup_file(markup_path: &Path, namespace: &str) -> Result<ComponentDescriptor> {
    let name = markup_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("no usable component name in {}", markup_path.display()))?;

    let file = File::open(markup_path)
        .with_context(|| format!("opening markup {}", markup_path.display()))?;
    parser::parse_component(namespace, name, BufReader::new(file))
        .with_context(|| format!("parsing component markup {}", markup_path.display()))
}

/// Convenience helper: parse a component markup file and emit its generated
/// class under `output_dir`.
///
/// Returns the path of the written artifact.
pub fn generate_class_from_markup(
    markup_path: &Path,
    namespace: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    let descriptor = parse_markup_file(markup_path, namespace)?;
    utils::write_class_file(output_dir, &descriptor)
}
