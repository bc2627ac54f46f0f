use std::collections::HashSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The kind of values an attribute takes
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeKind {
    /// Categorical values from an ordered domain, stored in examples as domain indices
    Nominal(Vec<String>),
    /// Real values, stored verbatim
    Numeric,
}

/// A named column of a data set
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    kind: AttributeKind,
}

impl Attribute {
    /// Creates a nominal attribute from its ordered domain
    pub fn nominal<S: Into<String>, V: Into<String>>(
        name: S,
        domain: impl IntoIterator<Item = V>,
    ) -> Self {
        Attribute {
            name: name.into(),
            kind: AttributeKind::Nominal(domain.into_iter().map(Into::into).collect()),
        }
    }

    /// Creates a numeric attribute
    pub fn numeric<S: Into<String>>(name: S) -> Self {
        Attribute {
            name: name.into(),
            kind: AttributeKind::Numeric,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &AttributeKind {
        &self.kind
    }

    pub fn is_nominal(&self) -> bool {
        matches!(self.kind, AttributeKind::Nominal(_))
    }

    /// Returns the number of values in the domain, `None` for numeric attributes
    pub fn domain_size(&self) -> Option<usize> {
        match &self.kind {
            AttributeKind::Nominal(domain) => Some(domain.len()),
            AttributeKind::Numeric => None,
        }
    }

    /// Returns the domain index of `value`, `None` for numeric attributes or unknown values
    pub fn index_of(&self, value: &str) -> Option<usize> {
        match &self.kind {
            AttributeKind::Nominal(domain) => domain.iter().position(|v| v == value),
            AttributeKind::Numeric => None,
        }
    }

    /// Returns the domain value at `index`, `None` for numeric attributes or out-of-range indices
    pub fn value_at(&self, index: usize) -> Option<&str> {
        match &self.kind {
            AttributeKind::Nominal(domain) => domain.get(index).map(String::as_str),
            AttributeKind::Numeric => None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            AttributeKind::Nominal(domain) => {
                write!(f, "@attribute {} {}", self.name, domain.join(" "))
            }
            AttributeKind::Numeric => write!(f, "@attribute {} numeric", self.name),
        }
    }
}

/// Ordered attributes of a data set
///
/// The last attribute is the class attribute. It has to be nominal with at least one value, the
/// remaining attributes may be of any kind.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeCatalog {
    attributes: Vec<Attribute>,
}

impl AttributeCatalog {
    /// Creates a catalog, validating that it is non-empty, that attribute names are unique and
    /// that the class attribute is nominal with a non-empty domain
    pub fn new(attributes: Vec<Attribute>) -> Result<Self> {
        let class_attribute = attributes
            .last()
            .ok_or_else(|| Error::InvalidInput("catalog without attributes".to_string()))?;

        match class_attribute.domain_size() {
            Some(0) => {
                return Err(Error::InvalidInput(format!(
                    "class attribute `{}` has an empty domain",
                    class_attribute.name()
                )))
            }
            None => {
                return Err(Error::NotNominal {
                    index: attributes.len() - 1,
                })
            }
            Some(_) => {}
        }

        let mut names = HashSet::new();
        if let Some(duplicate) = attributes.iter().find(|attr| !names.insert(attr.name())) {
            return Err(Error::InvalidInput(format!(
                "attribute `{}` declared twice",
                duplicate.name()
            )));
        }

        Ok(AttributeCatalog { attributes })
    }

    /// Number of attributes, class attribute included
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Always false, an empty catalog cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn attribute(&self, index: usize) -> Result<&Attribute> {
        self.attributes.get(index).ok_or(Error::AttributeOutOfRange {
            index,
            len: self.attributes.len(),
        })
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attributes.iter()
    }

    pub fn class_index(&self) -> usize {
        self.attributes.len() - 1
    }

    pub fn class_attribute(&self) -> &Attribute {
        &self.attributes[self.class_index()]
    }

    /// Size of the class attribute's domain
    pub fn n_classes(&self) -> usize {
        self.class_attribute().domain_size().unwrap_or(0)
    }

    /// Returns the domain size of the nominal attribute at `index`
    pub fn nominal_domain_size(&self, index: usize) -> Result<usize> {
        self.attribute(index)?
            .domain_size()
            .ok_or(Error::NotNominal { index })
    }
}

impl fmt::Display for AttributeCatalog {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for attribute in &self.attributes {
            writeln!(f, "{}", attribute)?;
        }

        Ok(())
    }
}
