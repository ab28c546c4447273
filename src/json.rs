use serde_json::{Map, Value};

use crate::error::WriteError;
use crate::section::{Input, Properties, Property, PropertyMap};

/// Read a document out of JSON.
///
/// An object maps section names to property objects (`null` drops the section). An array holds
/// `[name, properties]` pairs in output order, where `properties` is an object or a flat array
/// alternating property names and values. Strings, numbers and booleans are written as their
/// text; `null` leaves the property out.
impl TryFrom<Value> for Input {
    type Error = WriteError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(sections) => sections
                .into_iter()
                .map(|(name, properties)| -> Result<_, WriteError> {
                    let properties = match properties {
                        Value::Null => None,
                        Value::Object(map) => Some(property_map(&name, map)?),
                        other => {
                            return Err(WriteError::unsupported(format!(
                                "section {name:?} must map to an object or null, found {}",
                                kind(&other)
                            )));
                        }
                    };
                    Ok((name, properties))
                })
                .collect::<Result<_, _>>()
                .map(Input::Map),
            Value::Array(pairs) => pairs
                .into_iter()
                .map(section_pair)
                .collect::<Result<_, _>>()
                .map(Input::Pairs),
            other => Err(WriteError::unsupported(format!(
                "expected an object or an array of pairs, found {}",
                kind(&other)
            ))),
        }
    }
}

fn section_pair(pair: Value) -> Result<(String, Properties), WriteError> {
    let Value::Array(pair) = pair else {
        return Err(WriteError::unsupported(format!(
            "expected a [name, properties] pair, found {}",
            kind(&pair)
        )));
    };

    let [name, properties]: [Value; 2] = pair.try_into().map_err(|pair: Vec<Value>| {
        WriteError::unsupported(format!(
            "expected a [name, properties] pair, found an array of {} elements",
            pair.len()
        ))
    })?;

    let Value::String(name) = name else {
        return Err(WriteError::unsupported(format!(
            "section name must be a string, found {}",
            kind(&name)
        )));
    };

    let properties = match properties {
        Value::Object(map) => Properties::Map(property_map(&name, map)?),
        Value::Array(list) => Properties::List(property_list(&name, list)?),
        other => {
            return Err(WriteError::unsupported(format!(
                "properties of section {name:?} must be an object or an array, found {}",
                kind(&other)
            )));
        }
    };

    Ok((name, properties))
}

fn property_map(section: &str, map: Map<String, Value>) -> Result<PropertyMap, WriteError> {
    map.into_iter()
        .map(|(name, value)| -> Result<_, WriteError> {
            let value = scalar(section, &name, value)?;
            Ok((name, value))
        })
        .collect()
}

fn property_list(section: &str, list: Vec<Value>) -> Result<Vec<Property>, WriteError> {
    if list.len() % 2 != 0 {
        return Err(WriteError::unsupported(format!(
            "properties of section {section:?} must alternate names and values, found {} elements",
            list.len()
        )));
    }

    let mut properties = Vec::<Property>::with_capacity(list.len() / 2);
    let mut list = list.into_iter();

    while let (Some(name), Some(value)) = (list.next(), list.next()) {
        let Value::String(name) = name else {
            return Err(WriteError::unsupported(format!(
                "property names in section {section:?} must be strings, found {}",
                kind(&name)
            )));
        };
        let value = scalar(section, &name, value)?;
        properties.push(Property::new(name, value));
    }

    Ok(properties)
}

fn scalar(section: &str, property: &str, value: Value) -> Result<Option<String>, WriteError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(WriteError::unsupported(format!(
            "value for {section}.{property} must be a scalar, found {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
