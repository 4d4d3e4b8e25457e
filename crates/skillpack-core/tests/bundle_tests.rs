//! Tests for bundle generation

use pretty_assertions::assert_eq;
use skillpack_core::{BundleGenerator, Error, PluginGenerator, Workspace};
use skillpack_fs::NormalizedPath;
use skillpack_meta::Catalog;
use skillpack_test_utils::TestWorkspace;

const CATALOG: &str = r#"
[publisher]
name = "Studio"
email = "studio@example.com"

[marketplace]
name = "studio"
description = "Studio plugins"

[skills.shader-lab]
title = "Shader Lab"
category = "3d-graphics"
tags = ["glsl"]

[skills.tween-kit]
category = "animation"
tags = ["tween"]

[bundles.motion-pack]
title = "Motion Pack"
description = "Shaders and tweens"
skills = ["shader-lab", "tween-kit", "ghost-skill"]
tags = ["bundle", "motion"]

[bundles.solo]
title = "Solo"
description = "One skill"
skills = ["tween-kit"]
"#;

fn studio(test: &TestWorkspace) -> Workspace {
    test.write("skillpack.toml", CATALOG);
    Workspace::discover(NormalizedPath::new(test.root()), None).unwrap()
}

#[test]
fn bundle_aggregates_generated_plugins() {
    let test = TestWorkspace::new();
    test.add_skill("shader-lab", "Shaders", &["compile_shader"]);
    test.add_skill("tween-kit", "Tweens", &[]);
    let ws = studio(&test);
    let plugins = PluginGenerator::new(&ws).unwrap();
    plugins.generate("shader-lab").unwrap();
    plugins.generate("tween-kit").unwrap();

    let bundle = BundleGenerator::new(&ws).unwrap().generate("motion-pack").unwrap();

    assert_eq!(bundle.included, vec!["shader-lab", "tween-kit"]);
    assert_eq!(bundle.missing, vec!["ghost-skill"]);
    assert_eq!(
        bundle.commands,
        vec![
            "./commands/shader-lab-compile_shader.md",
            "./commands/tween-kit-help.md",
            "./commands/tween-kit-setup.md",
        ]
    );
    assert_eq!(
        bundle.agents,
        vec![
            "./agents/motion-pack-integration.md",
            "./agents/shader-lab-architect.md",
            "./agents/tween-kit-choreographer.md",
        ]
    );

    let base = "plugins/bundles/motion-pack";
    test.assert_file_exists(&format!("{base}/skills/shader-lab/SKILL.md"));
    test.assert_file_exists(&format!("{base}/skills/tween-kit/SKILL.md"));
    test.assert_file_contains(
        &format!("{base}/agents/motion-pack-integration.md"),
        "This bundle includes:\n- shader-lab\n- tween-kit\n- ghost-skill\n",
    );

    let manifest = test.read_json(&format!("{base}/.claude-plugin/plugin.json"));
    assert_eq!(manifest["name"], "motion-pack");
    assert_eq!(manifest["description"], "Shaders and tweens");
    assert_eq!(manifest["keywords"], serde_json::json!(["bundle", "motion"]));
    assert_eq!(manifest["author"]["email"], "studio@example.com");
    assert!(manifest.get("includes").is_none());
    assert!(manifest.get("bundle").is_none());
}

#[test]
fn bundle_renders_commands_without_individual_plugins() {
    let test = TestWorkspace::new();
    test.add_skill("tween-kit", "Tweens", &["ease_curve"]);
    let ws = studio(&test);

    let bundle = BundleGenerator::new(&ws).unwrap().generate("solo").unwrap();

    assert_eq!(bundle.commands, vec!["./commands/tween-kit-ease_curve.md"]);
    test.assert_file_contains(
        "plugins/bundles/solo/commands/tween-kit-ease_curve.md",
        "# /tween-kit-ease_curve",
    );
    test.assert_file_exists("plugins/bundles/solo/agents/tween-kit-choreographer.md");
    test.assert_file_not_exists("plugins/individual/tween-kit");
}

#[test]
fn member_without_skill_md_is_packaged_without_commands() {
    let test = TestWorkspace::new();
    test.add_skill("shader-lab", "Shaders", &["compile_shader"]);
    test.write(".claude/skills/tween-kit/README.md", "# notes\n");
    test.write("plugins/bundles/motion-pack/commands/stale.md", "# stale\n");
    let ws = studio(&test);

    let bundle = BundleGenerator::new(&ws).unwrap().generate("motion-pack").unwrap();

    assert_eq!(bundle.included, vec!["shader-lab", "tween-kit"]);
    assert_eq!(bundle.commands, vec!["./commands/shader-lab-compile_shader.md"]);
    let base = "plugins/bundles/motion-pack";
    test.assert_file_exists(&format!("{base}/skills/tween-kit/README.md"));
    test.assert_file_exists(&format!("{base}/.claude-plugin/plugin.json"));
    test.assert_file_not_exists(&format!("{base}/commands/stale.md"));
}

#[test]
fn unknown_bundle_lists_available_keys() {
    let test = TestWorkspace::new();
    let ws = studio(&test);

    let err = BundleGenerator::new(&ws).unwrap().generate("nope").unwrap_err();

    match &err {
        Error::UnknownBundle { name, available } => {
            assert_eq!(name, "nope");
            assert_eq!(available, &vec!["motion-pack".to_string(), "solo".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.to_string(), "Unknown bundle: nope (available: motion-pack, solo)");
}

#[test]
fn generate_all_covers_every_catalog_bundle() {
    let test = TestWorkspace::new();
    test.add_skill("shader-lab", "Shaders", &[]);
    test.add_skill("tween-kit", "Tweens", &[]);
    let ws = studio(&test);

    let report = BundleGenerator::new(&ws).unwrap().generate_all().unwrap();

    assert!(report.is_success());
    assert_eq!(report.succeeded, vec!["motion-pack", "solo"]);
    test.assert_file_exists("plugins/bundles/solo/.claude-plugin/plugin.json");
}

#[test]
fn builtin_bundles_are_available() {
    let test = TestWorkspace::new();
    let ws = Workspace::new(NormalizedPath::new(test.root()), Catalog::builtin().unwrap());
    assert_eq!(
        ws.catalog().bundle_keys(),
        vec![
            "animation-components",
            "authoring-motion",
            "core-3d-animation",
            "extended-3d-scroll",
            "meta-skills",
        ]
    );
}

#[test]
fn generate_all_follows_catalog_order() {
    let test = TestWorkspace::new();
    test.add_skill("tween-kit", "Tweens", &[]);
    test.write(
        "skillpack.toml",
        r#"
[publisher]
name = "Studio"

[marketplace]
name = "studio"
description = "Studio plugins"

[bundles.zeta]
title = "Zeta"
description = "Last alphabetically"
skills = ["tween-kit"]

[bundles.alpha]
title = "Alpha"
description = "First alphabetically"
skills = ["tween-kit"]
"#,
    );
    let ws = Workspace::discover(NormalizedPath::new(test.root()), None).unwrap();

    let report = BundleGenerator::new(&ws).unwrap().generate_all().unwrap();

    assert_eq!(report.succeeded, vec!["zeta", "alpha"]);
}
