//! Markup front end: reads a component definition document into a
//! [`ComponentDescriptor`].
//!
//! The document's root element is `<component>`, optionally carrying an
//! `extends="namespace:name"` reference to a parent definition. Each direct
//! child `<attribute name="…" type="…"/>` declares one attribute, in
//! document order. Everything else in the document is body markup the class
//! generator has no use for and is skipped.
//!
//! Input is routed through [`EntityReader`] so the named HTML character
//! references component markup uses freely are declared ahead of the
//! content; attribute values additionally resolve them through the entity
//! table, since the event reader only knows XML's five built-ins.

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use trellis_markup::{resolve, EntityReader};

use crate::descriptor::{ComponentDescriptor, DescriptorRef};
use crate::error::ParseError;

/// Type assigned to attribute declarations that do not name one.
const DEFAULT_ATTRIBUTE_TYPE: &str = "String";

/// Parse one component markup document.
///
/// `namespace` and `name` identify the component being defined; they come
/// from the surrounding definition system (for files, the file's location),
/// not from the document itself.
pub fn parse_component<R: BufRead>(
    namespace: &str,
    name: &str,
    input: R,
) -> Result<ComponentDescriptor, ParseError> {
    let mut reader = Reader::from_reader(EntityReader::new(input));
    let mut buf = Vec::new();
    let mut descriptor = ComponentDescriptor::new(namespace, name);
    let mut seen_root = false;
    let mut depth: usize = 0;

    loop {
        let event = reader.read_event_into(&mut buf)?;
        match event {
            Event::Start(ref element) | Event::Empty(ref element) => {
                let tag = element.name();
                if depth == 0 && !seen_root && tag.as_ref() == b"component" {
                    seen_root = true;
                    descriptor.extends = read_extends(element)?;
                } else if depth == 1 && seen_root && tag.as_ref() == b"attribute" {
                    push_attribute(&mut descriptor, element)?;
                }
                if matches!(event, Event::Start(_)) {
                    depth += 1;
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(ParseError::MissingRoot);
    }

    tracing::debug!(
        namespace,
        name,
        attributes = descriptor.attributes.len(),
        "parsed component markup"
    );
    Ok(descriptor)
}

fn read_extends(element: &BytesStart<'_>) -> Result<Option<DescriptorRef>, ParseError> {
    for attribute in element.attributes() {
        let attribute = attribute?;
        if attribute.key.as_ref() != b"extends" {
            continue;
        }
        let value = attribute.unescape_value_with(|entity| resolve(entity))?;
        let Some((parent_namespace, parent_name)) = value.split_once(':') else {
            return Err(ParseError::MalformedExtends(value.to_string()));
        };
        if parent_namespace.is_empty() || parent_name.is_empty() {
            return Err(ParseError::MalformedExtends(value.to_string()));
        }
        return Ok(Some(DescriptorRef::new(parent_namespace, parent_name)));
    }
    Ok(None)
}

fn push_attribute(
    descriptor: &mut ComponentDescriptor,
    element: &BytesStart<'_>,
) -> Result<(), ParseError> {
    let mut name: Option<String> = None;
    let mut type_name: Option<String> = None;

    for attribute in element.attributes() {
        let attribute = attribute?;
        let value = attribute.unescape_value_with(|entity| resolve(entity))?;
        match attribute.key.as_ref() {
            b"name" => name = Some(value.into_owned()),
            b"type" => type_name = Some(value.into_owned()),
            _ => {}
        }
    }

    let name = name.ok_or(ParseError::UnnamedAttribute)?;
    if descriptor.attributes.iter().any(|a| a.name == name) {
        return Err(ParseError::DuplicateAttribute(name));
    }

    descriptor.push_attribute(
        name,
        type_name.unwrap_or_else(|| DEFAULT_ATTRIBUTE_TYPE.to_string()),
    );
    Ok(())
}
