//! Error types for the markup front end and the class generator.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("failed to write generated class: {0}")]
    Write(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("markup is not well formed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed attribute list: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("missing root <component> element")]
    MissingRoot,

    #[error("attribute declaration is missing a name")]
    UnnamedAttribute,

    #[error("duplicate attribute `{0}`")]
    DuplicateAttribute(String),

    #[error("malformed extends reference `{0}`: expected `namespace:name`")]
    MalformedExtends(String),
}
