//! Tests for plugin manifest normalization

use proptest::prelude::*;
use serde_json::json;
use skillpack_meta::{AuthorField, PathSpec, PluginManifest};
use std::convert::Infallible;

fn discover_none(_: &str) -> Result<Option<Vec<String>>, Infallible> {
    Ok(None)
}

#[test]
fn legacy_generator_output_becomes_canonical() {
    let mut manifest: PluginManifest = serde_json::from_value(json!({
        "name": "gsap-scrolltrigger",
        "version": "1.0.0",
        "description": "GSAP",
        "author": "Claude Design Skillstack",
        "license": "Apache-2.0",
        "homepage": "https://example.com",
        "repository": { "type": "git", "url": "https://example.com/repo.git" },
        "keywords": ["gsap"],
        "category": "animation",
        "skills": "skills/",
        "commands": "commands/",
        "agents": "agents/"
    }))
    .unwrap();

    let changes = manifest
        .normalize(Some("team@example.com"), |dir| -> Result<Option<Vec<String>>, Infallible> {
            let dir = dir.trim_end_matches('/');
            Ok(Some(vec![format!("./{dir}/a.md"), format!("./{dir}/b.md")]))
        })
        .unwrap();

    assert_eq!(changes.len(), 6);
    let value = serde_json::to_value(&manifest).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "gsap-scrolltrigger",
            "version": "1.0.0",
            "description": "GSAP",
            "author": { "name": "Claude Design Skillstack", "email": "team@example.com" },
            "license": "Apache-2.0",
            "homepage": "https://example.com",
            "repository": "https://example.com/repo.git",
            "keywords": ["gsap"],
            "skills": "./skills/",
            "commands": ["./commands/a.md", "./commands/b.md"],
            "agents": ["./agents/a.md", "./agents/b.md"]
        })
    );
}

#[test]
fn author_name_is_readable_in_both_shapes() {
    let plain = AuthorField::Name("a".into());
    let detailed: AuthorField = serde_json::from_value(json!({ "name": "b", "url": "u" })).unwrap();
    assert_eq!(plain.name(), "a");
    assert_eq!(detailed.name(), "b");
}

proptest! {
    #[test]
    fn normalize_is_idempotent(
        author in "[A-Za-z ]{1,20}",
        skills in "(\\./)?[a-z]{1,8}/",
        files in prop::collection::vec("(\\./)?commands/[a-z_]{1,8}\\.md", 0..4),
        legacy in any::<bool>(),
    ) {
        let mut manifest = PluginManifest::named("p");
        manifest.author = Some(AuthorField::Name(author));
        manifest.skills = Some(PathSpec::Dir(skills));
        manifest.commands = Some(PathSpec::Files(files));
        if legacy {
            manifest.extra.insert("category".into(), json!("animation"));
        }

        manifest.normalize(None, discover_none).unwrap();
        let first = serde_json::to_string_pretty(&manifest).unwrap();

        let changes = manifest.normalize(None, discover_none).unwrap();
        let second = serde_json::to_string_pretty(&manifest).unwrap();

        prop_assert!(changes.is_empty(), "second pass changed: {:?}", changes);
        prop_assert_eq!(first, second);
    }
}
