use crate::section::{Input, Properties, Property, PropertyMap, Section};

/// Turn either input shape into the ordered list of sections the writer walks.
///
/// Map input has no order of its own: the starting section (when present) comes first, followed
/// by every other section in ascending name order. Property maps are likewise written in
/// ascending name order. Pairs input keeps its order, repeated sections included.
#[must_use]
pub fn normalize(input: Input, starting_section: Option<&str>) -> Vec<Section> {
    match input {
        Input::Map(mut map) => {
            let mut sections = Vec::<Section>::with_capacity(map.len());

            // Sections mapped to nothing are dropped outright.
            if let Some((name, Some(properties))) =
                starting_section.and_then(|name| map.remove_entry(name))
            {
                sections.push(Section::new(name, from_map(properties)));
            }

            sections.extend(
                map.into_iter()
                    .filter_map(|(name, properties)| Some(Section::new(name, from_map(properties?)))),
            );

            sections
        }
        Input::Pairs(pairs) => pairs
            .into_iter()
            .map(|(name, properties)| {
                let properties = match properties {
                    Properties::Map(map) => from_map(map),
                    Properties::List(list) => list,
                };
                Section::new(name, properties)
            })
            .collect(),
    }
}

fn from_map(map: PropertyMap) -> Vec<Property> {
    map.into_iter()
        .map(|(name, value)| Property::new(name, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn props(entries: &[(&str, Option<&str>)]) -> PropertyMap {
        entries
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.map(str::to_owned)))
            .collect()
    }

    #[test]
    fn starting_section_comes_first() {
        let mut map = BTreeMap::new();
        map.insert("Alpha".to_owned(), Some(props(&[("x", Some("1"))])));
        map.insert("_".to_owned(), Some(props(&[("admin", Some("rjbs"))])));
        map.insert("zeta".to_owned(), Some(props(&[])));

        let sections = normalize(Input::Map(map), Some("_"));
        let names = sections.iter().map(Section::name).collect::<Vec<_>>();

        assert_eq!(names, vec!["_", "Alpha", "zeta"]);
    }

    #[test]
    fn map_without_starting_section_is_sorted() {
        let mut map = BTreeMap::new();
        map.insert("b".to_owned(), Some(props(&[])));
        map.insert("_".to_owned(), Some(props(&[])));
        map.insert("a".to_owned(), Some(props(&[])));

        let sections = normalize(Input::Map(map), None);
        let names = sections.iter().map(Section::name).collect::<Vec<_>>();

        assert_eq!(names, vec!["_", "a", "b"]);
    }

    #[test]
    fn absent_sections_are_skipped() {
        let mut map = BTreeMap::new();
        map.insert("_".to_owned(), None);
        map.insert("gone".to_owned(), None);
        map.insert("kept".to_owned(), Some(props(&[("k", None)])));

        let sections = normalize(Input::Map(map), Some("_"));

        assert_eq!(
            sections,
            vec![Section::new("kept", vec![Property::absent("k")])]
        );
    }

    #[test]
    fn pairs_keep_their_order_and_repeats() {
        let input = Input::Pairs(vec![
            (
                "z".to_owned(),
                Properties::List(vec![("b", "2").into(), ("a", "1").into()]),
            ),
            ("_".to_owned(), Properties::Map(props(&[("k", Some("v"))]))),
            ("z".to_owned(), Properties::List(vec![])),
        ]);

        let sections = normalize(input, Some("_"));

        assert_eq!(
            sections,
            vec![
                Section::new("z", vec![("b", "2").into(), ("a", "1").into()]),
                Section::new("_", vec![("k", "v").into()]),
                Section::new("z", vec![]),
            ]
        );
    }
}
