//! Tests for the manifest fixer

use pretty_assertions::assert_eq;
use serde_json::json;
use skillpack_core::{FixOutcome, ManifestFixer, MarketplaceValidator, PluginGenerator, PluginKind, Workspace};
use skillpack_fs::NormalizedPath;
use skillpack_meta::Catalog;
use skillpack_test_utils::TestWorkspace;

const CATALOG_WITH_EMAIL: &str = r#"
[publisher]
name = "Claude Design Skillstack"
email = "team@example.com"

[marketplace]
name = "m"
description = "d"
"#;

fn workspace(test: &TestWorkspace) -> Workspace {
    Workspace::new(NormalizedPath::new(test.root()), Catalog::builtin().unwrap())
}

#[test]
fn legacy_manifest_becomes_canonical() {
    let test = TestWorkspace::new();
    test.write("skillpack.toml", CATALOG_WITH_EMAIL);
    test.add_legacy_plugin("individual", "gsap-scrolltrigger", &["timeline", "animate"], &["gsap-choreographer"]);
    let ws = Workspace::discover(NormalizedPath::new(test.root()), None).unwrap();

    let report = ManifestFixer::new(&ws).fix_all().unwrap();

    assert_eq!(report.fixed_count(), 1);
    let manifest = test.read_json("plugins/individual/gsap-scrolltrigger/.claude-plugin/plugin.json");
    assert_eq!(
        manifest,
        json!({
            "name": "gsap-scrolltrigger",
            "version": "1.0.0",
            "description": "gsap-scrolltrigger plugin",
            "author": { "name": "Claude Design Skillstack", "email": "team@example.com" },
            "license": "Apache-2.0",
            "repository": "https://example.com/repo.git",
            "keywords": ["gsap-scrolltrigger"],
            "skills": "./skills/",
            "commands": ["./commands/animate.md", "./commands/timeline.md"],
            "agents": ["./agents/gsap-choreographer.md"]
        })
    );
}

#[test]
fn fixer_is_idempotent() {
    let test = TestWorkspace::new();
    test.add_legacy_plugin("individual", "animejs", &["setup"], &[]);
    test.add_legacy_plugin("bundles", "meta-skills", &["a-help"], &["meta-skills-integration"]);
    let ws = workspace(&test);
    let path = "plugins/bundles/meta-skills/.claude-plugin/plugin.json";

    let first = ManifestFixer::new(&ws).fix_all().unwrap();
    assert_eq!(first.fixed_count(), 2);
    let after_first = test.read(path);

    let second = ManifestFixer::new(&ws).fix_all().unwrap();

    assert_eq!(second.fixed_count(), 0);
    assert_eq!(second.unchanged_count(), 2);
    assert_eq!(test.read(path), after_first);
}

#[test]
fn empty_agents_directory_is_dropped() {
    let test = TestWorkspace::new();
    test.add_legacy_plugin("individual", "animejs", &["setup"], &[]);
    let ws = workspace(&test);

    ManifestFixer::new(&ws).fix_all().unwrap();

    let manifest = test.read_json("plugins/individual/animejs/.claude-plugin/plugin.json");
    assert!(manifest.get("agents").is_none());
    assert!(manifest.get("category").is_none());
    assert_eq!(manifest["author"], json!({ "name": "Claude Design Skillstack" }));
}

#[test]
fn dry_run_writes_nothing() {
    let test = TestWorkspace::new();
    test.add_legacy_plugin("individual", "animejs", &["setup"], &[]);
    let ws = workspace(&test);
    let path = "plugins/individual/animejs/.claude-plugin/plugin.json";
    let before = test.read(path);

    let report = ManifestFixer::new(&ws).dry_run(true).fix_all().unwrap();

    assert!(report.dry_run);
    match &report.plugins[0].outcome {
        FixOutcome::Fixed { changes } => {
            assert!(changes.iter().any(|c| c.contains("author")), "{changes:?}");
            assert!(changes.iter().any(|c| c.contains("category")), "{changes:?}");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(test.read(path), before);
}

#[test]
fn generated_plugins_need_no_fixing() {
    let test = TestWorkspace::new();
    test.add_skill("animejs", "Anime", &["timeline"]);
    let ws = workspace(&test);
    PluginGenerator::new(&ws).unwrap().generate("animejs").unwrap();

    let report = ManifestFixer::new(&ws).fix_all().unwrap();

    assert_eq!(report.unchanged_count(), 1);
}

#[test]
fn outcomes_for_missing_and_broken_manifests() {
    let test = TestWorkspace::new();
    test.write("plugins/individual/no-manifest/skills/x/SKILL.md", "---\nname: x\n---\n");
    test.write("plugins/bundles/broken/.claude-plugin/plugin.json", "{ broken");
    let ws = workspace(&test);

    let report = ManifestFixer::new(&ws).fix_all().unwrap();

    assert_eq!(report.plugins.len(), 2);
    assert_eq!(report.plugins[0].kind, PluginKind::Individual);
    assert_eq!(report.plugins[0].outcome, FixOutcome::Skipped);
    assert_eq!(report.plugins[1].name, "broken");
    assert!(matches!(report.plugins[1].outcome, FixOutcome::Failed { .. }));
    assert_eq!(report.failed_count(), 1);
}

#[test]
fn fixed_tree_passes_path_checks() {
    let test = TestWorkspace::new();
    test.add_legacy_plugin("individual", "animejs", &["setup"], &["animejs-choreographer"]);
    let ws = workspace(&test);

    let before = MarketplaceValidator::new(&ws).validate();
    assert!(before.errors.iter().any(|e| e.contains("must start with ./")));

    ManifestFixer::new(&ws).fix_all().unwrap();

    let after = MarketplaceValidator::new(&ws).validate();
    let plugin_errors: Vec<_> = after.errors.iter().filter(|e| e.starts_with("animejs")).collect();
    assert!(plugin_errors.is_empty(), "{plugin_errors:?}");
}

#[test]
fn single_file_command_string_becomes_list() {
    let test = TestWorkspace::new();
    test.write("plugins/individual/animejs/commands/setup.md", "# setup\n");
    test.write_plugin_manifest(
        "individual",
        "animejs",
        &json!({ "name": "animejs", "commands": "./commands/setup.md" }),
    );
    let ws = workspace(&test);

    let report = ManifestFixer::new(&ws).fix_all().unwrap();

    assert_eq!(
        report.plugins[0].outcome,
        FixOutcome::Fixed {
            changes: vec!["commands: file './commands/setup.md' -> list".to_string()]
        }
    );
    let manifest = test.read_json("plugins/individual/animejs/.claude-plugin/plugin.json");
    assert_eq!(manifest["commands"], json!(["./commands/setup.md"]));
}

#[test]
fn unresolvable_path_string_is_kept() {
    let test = TestWorkspace::new();
    test.write_plugin_manifest(
        "individual",
        "animejs",
        &json!({ "name": "animejs", "agents": "agents.json" }),
    );
    let ws = workspace(&test);

    ManifestFixer::new(&ws).fix_all().unwrap();

    let manifest = test.read_json("plugins/individual/animejs/.claude-plugin/plugin.json");
    assert_eq!(manifest["agents"], json!("./agents.json"));
}

#[test]
fn author_keys_survive_fixing() {
    let test = TestWorkspace::new();
    let author = json!({ "name": "a", "email": "e", "organization": "org" });
    test.write_plugin_manifest("individual", "animejs", &json!({ "name": "animejs", "author": author }));
    let ws = workspace(&test);

    let report = ManifestFixer::new(&ws).fix_all().unwrap();

    assert_eq!(
        report.plugins[0].outcome,
        FixOutcome::Fixed {
            changes: vec!["reformatted".to_string()]
        }
    );
    let manifest = test.read_json("plugins/individual/animejs/.claude-plugin/plugin.json");
    assert_eq!(manifest["author"], author);
}
