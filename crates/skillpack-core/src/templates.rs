//! Markdown rendered into a plugin's `commands/` and `agents/` directories.

use skillpack_meta::{BundleDefinition, CategoryFamily, Skill, title_case};

/// A markdown file to be written into a plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
    pub content: String,
}

impl Document {
    fn new(stem: &str, content: String) -> Self {
        Self {
            file_name: format!("{stem}.md"),
            content,
        }
    }
}

/// Commands for a skill: one per `scripts/*.py`, else `setup` and `help`.
pub fn skill_commands(skill: &Skill, title: &str) -> Vec<Document> {
    let stems = skill.script_stems();
    if stems.is_empty() {
        return generic_commands(&skill.slug, title);
    }
    stems
        .iter()
        .map(|stem| script_command(&skill.slug, title, stem))
        .collect()
}

/// Command wrapping one helper script.
pub fn script_command(skill: &str, title: &str, script: &str) -> Document {
    let words = script.replace('_', " ");
    let heading = title_case(&words);
    let content = format!(
        r#"# /{skill}-{script}

{title} - {heading}

## Description

Executes the {script} script for {title}.

## Usage

```bash
/{skill}-{script}
```

## Implementation

This command runs the `{script}.py` script from the {title} skill, which provides automated assistance for {words}.

## Notes

- This command leverages the skill's built-in automation scripts
- For interactive mode, the script will prompt for required information
- Check the skill documentation for detailed script usage
"#
    );
    Document::new(script, content)
}

/// `setup` and `help` for skills that ship no scripts.
pub fn generic_commands(skill: &str, title: &str) -> Vec<Document> {
    let setup = format!(
        r#"# /{skill}-setup

Initialize {title} project

## Description

Provides setup guidance and boilerplate code for starting a new {title} project.

## Usage

```bash
/{skill}-setup
```

## What it does

- Analyzes your project structure
- Provides installation instructions
- Generates boilerplate code
- Offers configuration guidance
"#
    );
    let help = format!(
        r#"# /{skill}-help

Get help with {title}

## Description

Provides comprehensive help and documentation for {title}.

## Usage

```bash
/{skill}-help
```

## What it does

- Shows common patterns and examples
- Links to official documentation
- Provides troubleshooting guidance
- Explains key concepts
"#
    );
    vec![Document::new("setup", setup), Document::new("help", help)]
}

/// Agent file name suffix for a category family.
pub fn agent_suffix(family: CategoryFamily) -> &'static str {
    match family {
        CategoryFamily::Graphics => "architect",
        CategoryFamily::Animation => "choreographer",
        CategoryFamily::Authoring => "pipeline",
        CategoryFamily::Generic => "specialist",
    }
}

/// The domain agent of an individual plugin.
pub fn skill_agent(skill: &str, title: &str, family: CategoryFamily) -> Document {
    let content = match family {
        CategoryFamily::Graphics => format!(
            r#"# {title} Architect

## Role

Expert 3D/graphics architect specializing in {title} scene design, optimization, and best practices.

## Expertise

- Scene architecture and organization
- Performance optimization techniques
- Material and lighting setup
- Asset management and loading strategies
- Rendering optimization
- Cross-browser compatibility

## When to use

Activate this agent when working on:
- Complex 3D scene architecture
- Performance optimization challenges
- Advanced rendering techniques
- Large-scale 3D applications
- Graphics pipeline optimization

## Approach

1. Analyze scene requirements and constraints
2. Design optimal architecture for performance
3. Implement best practices from {title} ecosystem
4. Optimize for target platforms and devices
5. Provide detailed implementation guidance

## Tools

This agent has access to:
- {title} skill knowledge
- Optimization checklists and patterns
- Performance profiling guidance
- Asset pipeline recommendations
"#
        ),
        CategoryFamily::Animation => format!(
            r#"# {title} Animation Choreographer

## Role

Expert animation choreographer specializing in {title} animation design, timing, and orchestration.

## Expertise

- Animation timing and easing
- Timeline sequencing
- Performance-optimized animations
- Cross-library animation integration
- Interactive animation patterns
- Scroll-driven animation design

## When to use

Activate this agent when working on:
- Complex animation sequences
- Multi-element choreography
- Scroll-triggered animations
- Interactive animation systems
- Animation performance optimization

## Approach

1. Understand animation goals and user experience
2. Design animation timing and sequencing
3. Implement using {title} best practices
4. Optimize for smooth 60fps performance
5. Test across devices and browsers

## Tools

This agent has access to:
- {title} skill knowledge
- Animation pattern libraries
- Performance optimization techniques
- Timeline management strategies
"#
        ),
        CategoryFamily::Authoring => format!(
            r#"# {title} Pipeline Specialist

## Role

Expert pipeline specialist for {title} workflows, asset optimization, and web integration.

## Expertise

- Asset export and optimization
- Web-ready format conversion
- Texture and material optimization
- Automated pipeline workflows
- Quality assurance and validation
- Cross-platform compatibility

## When to use

Activate this agent when working on:
- Asset export pipelines
- Batch processing workflows
- Optimization for web delivery
- Integration with web frameworks
- Automated quality checks

## Approach

1. Analyze asset requirements and constraints
2. Design optimal export pipeline
3. Implement automation scripts
4. Optimize for web performance
5. Validate output quality

## Tools

This agent has access to:
- {title} skill knowledge
- Pipeline automation scripts
- Optimization guidelines
- Quality validation checklists
"#
        ),
        CategoryFamily::Generic => format!(
            r#"# {title} Specialist

## Role

Expert specialist in {title} implementation, patterns, and best practices.

## Expertise

- {title} core concepts and patterns
- Integration with other libraries and frameworks
- Performance optimization
- Common pitfalls and solutions
- Best practices and conventions

## When to use

Activate this agent when working on:
- {title} implementation challenges
- Integration with other technologies
- Performance optimization
- Troubleshooting and debugging
- Architecture decisions

## Approach

1. Understand project requirements and context
2. Apply {title} best practices
3. Recommend optimal implementation patterns
4. Identify and solve common issues
5. Provide detailed guidance and examples

## Tools

This agent has access to:
- {title} skill knowledge
- Pattern libraries and examples
- Troubleshooting guides
- Integration patterns
"#
        ),
    };
    Document::new(&format!("{skill}-{}", agent_suffix(family)), content)
}

/// The `<key>-integration` agent of a bundle.
pub fn integration_agent(key: &str, bundle: &BundleDefinition) -> Document {
    let title = &bundle.title;
    let members = bundle
        .skills
        .iter()
        .map(|s| format!("- {s}"))
        .collect::<Vec<_>>()
        .join("\n");
    let content = format!(
        r#"# {title} Integration Specialist

## Role

Expert integration specialist for combining {title} technologies into cohesive applications.

## Expertise

- Cross-library integration patterns
- Technology stack orchestration
- Performance optimization across libraries
- Unified architecture design
- Best practices for combined workflows

## Bundle Contents

This bundle includes:
{members}

## When to use

Activate this agent when working on:
- Projects using multiple libraries from this bundle
- Cross-library integration challenges
- Architecture decisions spanning multiple technologies
- Performance optimization across the stack
- Unified workflow design

## Approach

1. Understand project requirements across all technologies
2. Design cohesive architecture leveraging each library's strengths
3. Implement integration patterns proven for this stack
4. Optimize for overall system performance
5. Provide guidance on library coordination

## Tools

This agent has access to:
- All skills in the {title} bundle
- Cross-library integration patterns
- Performance optimization techniques
- Architecture best practices
"#
    );
    Document::new(&format!("{key}-integration"), content)
}
