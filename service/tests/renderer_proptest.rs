//! Property tests for document ordering

use ormgen_core::types::TypeName;
use ormgen_service::renderer::{AttributeMapping, MappingRenderer, XmlMappingRenderer};
use ormgen_service::strategy::RenderKind;
use proptest::prelude::*;

fn render_kind() -> impl Strategy<Value = RenderKind> {
    prop_oneof![
        Just(RenderKind::MappedSuperclass),
        Just(RenderKind::Entity),
        Just(RenderKind::Embeddable),
    ]
}

/// Expected `(tag, class)` openings: grouped by kind, then first-seen order
fn expected_openings(calls: &[(usize, RenderKind)]) -> Vec<(String, String)> {
    let mut seen: Vec<(usize, RenderKind)> = Vec::new();
    for &(index, kind) in calls {
        match seen.iter_mut().find(|(i, _)| *i == index) {
            Some(entry) => entry.1 = kind,
            None => seen.push((index, kind)),
        }
    }

    let mut openings = Vec::new();
    for kind in RenderKind::ORDERED {
        for (index, _) in seen.iter().filter(|(_, k)| *k == kind) {
            openings.push((kind.tag().to_string(), format!("m.T{index}")));
        }
    }
    openings
}

fn actual_openings(document: &str) -> Vec<(String, String)> {
    document
        .lines()
        .map(str::trim)
        .filter_map(|line| {
            let rest = line.strip_prefix('<')?;
            let (tag, rest) = rest.split_once(" class=\"")?;
            let (class, _) = rest.split_once('"')?;
            Some((tag.to_string(), class.to_string()))
        })
        .collect()
}

proptest! {
    #[test]
    fn test_records_group_by_kind_in_encounter_order(
        calls in prop::collection::vec((0usize..6, render_kind()), 0..24)
    ) {
        let mut renderer = XmlMappingRenderer::new("orm.xml");
        for (index, kind) in &calls {
            let ty = TypeName::new(format!("m.T{index}"));
            renderer.set_rendering_kind(&ty, *kind);
            renderer
                .add_attribute(&ty, &AttributeMapping::Transient { name: format!("f{index}") })
                .expect("Test operation failed");
        }

        let files = renderer.serialize_all().expect("Test operation failed");
        prop_assert_eq!(actual_openings(&files["orm.xml"]), expected_openings(&calls));
    }

    #[test]
    fn test_serialize_all_is_stable(
        calls in prop::collection::vec((0usize..4, render_kind()), 1..12)
    ) {
        let mut renderer = XmlMappingRenderer::new("orm.xml");
        for (index, kind) in &calls {
            renderer.set_rendering_kind(&TypeName::new(format!("m.T{index}")), *kind);
        }

        let first = renderer.serialize_all().expect("Test operation failed");
        let second = renderer.serialize_all().expect("Test operation failed");
        prop_assert_eq!(first, second);
    }
}
