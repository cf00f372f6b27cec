//! Component descriptor model.
//!
//! Descriptors are identifier/metadata bundles for component definitions:
//! namespace, name, an optional parent reference, and the ordered attribute
//! declarations. They carry no behavior of their own. Resolution of parent
//! references across definitions — including rejecting cyclic inheritance
//! chains — belongs to the surrounding definition system, not to this crate.

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// Namespace + name pair identifying another component definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorRef {
    pub namespace: String,
    pub name: String,
}

impl DescriptorRef {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

/// A named, typed field declared on a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    pub name: String,
    /// Declared type name. Documentation-only in generated output; the
    /// generated accessor is untyped.
    pub type_name: String,
}

/// A component definition as the generator consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub namespace: String,
    pub name: String,
    /// Parent component this one extends, if any.
    pub extends: Option<DescriptorRef>,
    /// Declared attributes, in declaration order. The order is a contract:
    /// generated output must be byte-stable for a given descriptor, so
    /// accessors are emitted exactly in this order.
    pub attributes: Vec<AttributeDescriptor>,
}

impl ComponentDescriptor {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            extends: None,
            attributes: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: DescriptorRef) -> Self {
        self.extends = Some(parent);
        self
    }

    /// Append an attribute declaration. Name uniqueness is the caller's
    /// responsibility; the markup parser enforces it for parsed input.
    pub fn push_attribute(&mut self, name: impl Into<String>, type_name: impl Into<String>) {
        self.attributes.push(AttributeDescriptor {
            name: name.into(),
            type_name: type_name.into(),
        });
    }

    /// Reject descriptors the generator cannot name a class for.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.namespace.is_empty() {
            return Err(GenerateError::InvalidDescriptor(
                "namespace is empty".into(),
            ));
        }
        if self.name.is_empty() {
            return Err(GenerateError::InvalidDescriptor("name is empty".into()));
        }
        Ok(())
    }
}
