use std::collections::BTreeMap;

/// Property name to value. Absent values are kept so they can be skipped on output.
pub type PropertyMap = BTreeMap<String, Option<String>>;

/// One entry of the canonical input: a section name and its ordered properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    properties: Vec<Property>,
}

impl Section {
    #[must_use]
    pub fn new(name: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    value: Option<String>,
}

impl Property {
    #[must_use]
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// A property with no value. It is accepted by validation but never written.
    #[must_use]
    pub fn absent(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl<K, V> From<(K, V)> for Property
where
    K: Into<String>,
    V: Into<String>,
{
    fn from((name, value): (K, V)) -> Self {
        Self::new(name, Some(value.into()))
    }
}

/// The properties of one section before normalization.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Properties {
    Map(PropertyMap),
    List(Vec<Property>),
}

impl From<PropertyMap> for Properties {
    fn from(value: PropertyMap) -> Self {
        Properties::Map(value)
    }
}

impl From<Vec<Property>> for Properties {
    fn from(value: Vec<Property>) -> Self {
        Properties::List(value)
    }
}

/// A document in either of the two accepted shapes.
///
/// `Map` has no intrinsic section order; `Pairs` is written exactly in the order given and may
/// name the same section more than once.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Map(BTreeMap<String, Option<PropertyMap>>),
    Pairs(Vec<(String, Properties)>),
}

impl From<BTreeMap<String, Option<PropertyMap>>> for Input {
    fn from(value: BTreeMap<String, Option<PropertyMap>>) -> Self {
        Input::Map(value)
    }
}

impl From<BTreeMap<String, PropertyMap>> for Input {
    fn from(value: BTreeMap<String, PropertyMap>) -> Self {
        Input::Map(value.into_iter().map(|(k, v)| (k, Some(v))).collect())
    }
}

impl From<Vec<(String, Properties)>> for Input {
    fn from(value: Vec<(String, Properties)>) -> Self {
        Input::Pairs(value)
    }
}

impl From<Vec<Section>> for Input {
    fn from(value: Vec<Section>) -> Self {
        Input::Pairs(
            value
                .into_iter()
                .map(|section| (section.name, Properties::List(section.properties)))
                .collect(),
        )
    }
}
