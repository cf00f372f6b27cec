//! Server-side class generation from component descriptors.
//!
//! One descriptor in, one generated class out: a fixed header, the package
//! and import declarations, a class line carrying the inheritance chain, and
//! a null-returning getter per declared attribute. Generated artifacts are
//! diffed and cached by outside tooling, so output must be byte-stable for a
//! given descriptor — nothing time- or host-dependent may appear in it.

use std::io::{self, Write};

use crate::descriptor::{AttributeDescriptor, ComponentDescriptor};
use crate::error::GenerateError;
use crate::utils::{escape_reserved, init_cap};

/// Package prefix for all generated classes.
pub const PACKAGE_PREFIX: &str = "cmp";

/// Suffix appended to the capitalized component name to form the class name.
pub const CLASS_SUFFIX: &str = "Cmp";

const HEADER: &str = "/*\n * Copyright (c) Trellis contributors. All rights reserved.\n *\n * DO NOT MODIFY. THIS FILE IS GENERATED.\n */\n";

const RUNTIME_IMPORT: &str = "import trellis.runtime.Component;";

/// Write the generated class for `descriptor` into `sink`.
///
/// The sink is flushed on every exit path and released on return, success or
/// failure. Output already written before a failure is not rolled back;
/// callers that need atomic publication should write to a temporary sink and
/// rename on success.
pub fn generate<W: Write>(
    descriptor: &ComponentDescriptor,
    mut sink: W,
) -> Result<(), GenerateError> {
    descriptor.validate()?;
    tracing::debug!(
        namespace = %descriptor.namespace,
        name = %descriptor.name,
        "generating component class"
    );

    let written = write_class(descriptor, &mut sink);
    let flushed = sink.flush();
    written?;
    flushed?;
    Ok(())
}

fn write_class<W: Write>(descriptor: &ComponentDescriptor, out: &mut W) -> io::Result<()> {
    out.write_all(HEADER.as_bytes())?;
    write!(out, "package {}.{};", PACKAGE_PREFIX, descriptor.namespace)?;
    write_line_breaks(out, 2)?;
    out.write_all(RUNTIME_IMPORT.as_bytes())?;
    write_line_breaks(out, 2)?;
    write_class_begin(out, descriptor)?;
    write_line_breaks(out, 2)?;
    for attribute in &descriptor.attributes {
        write_getter(out, attribute)?;
        write_line_breaks(out, 2)?;
    }
    write_block_end(out)
}

fn write_class_begin<W: Write>(out: &mut W, descriptor: &ComponentDescriptor) -> io::Result<()> {
    write!(
        out,
        "public class {}{}",
        init_cap(&descriptor.name),
        CLASS_SUFFIX
    )?;
    if let Some(parent) = &descriptor.extends {
        write!(
            out,
            " extends {}.{}.{}{}",
            PACKAGE_PREFIX,
            parent.namespace,
            init_cap(&parent.name),
            CLASS_SUFFIX
        )?;
    }
    // every generated class carries the runtime contract, inherited or not
    write!(out, " implements Component")?;
    write_block_begin(out)
}

fn write_getter<W: Write>(out: &mut W, attribute: &AttributeDescriptor) -> io::Result<()> {
    let name = escape_reserved(&attribute.name);
    write!(
        out,
        "\tpublic /*{}*/Object get{}()",
        attribute.type_name,
        init_cap(name)
    )?;
    write_block_begin(out)?;
    write!(out, "\t\treturn null;")?;
    write_line_breaks(out, 1)?;
    out.write_all(b"\t")?;
    write_block_end(out)
}

fn write_block_begin<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(b"{")?;
    write_line_breaks(out, 1)
}

fn write_block_end<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(b"}")?;
    write_line_breaks(out, 1)
}

fn write_line_breaks<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    for _ in 0..count {
        out.write_all(b"\n")?;
    }
    Ok(())
}
