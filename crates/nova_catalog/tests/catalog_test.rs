use nova_catalog::{Catalog, Prompt};
use nova_core::ReasoningEffort;
use nova_error::CatalogErrorKind;
use std::collections::HashMap;

#[test]
fn test_builtin_catalog_loads_every_prompt() {
    let catalog = Catalog::builtin().expect("built-in prompts are valid");
    assert_eq!(catalog.len(), 8);

    let names: Vec<String> = catalog
        .list()
        .iter()
        .map(|p| p.metadata().qualified_name())
        .collect();
    assert_eq!(
        names,
        vec![
            "reasoning/event_detection",
            "reasoning/long_context",
            "reasoning/question_answer_reasoning",
            "reasoning/tool_calling_grounding",
            "software_engineering/architecture_review",
            "software_engineering/code_refactoring",
            "software_engineering/function_generator",
            "software_engineering/microservices_architecture",
        ]
    );
}

#[test]
fn test_builtin_prompts_share_tool_declarations() {
    let catalog = Catalog::builtin().expect("built-in prompts are valid");
    for prompt in catalog.list() {
        assert_eq!(
            prompt.tools(),
            &vec!["nova_grounding".to_string(), "nova_code_interpreter".to_string()],
            "unexpected tools for {}",
            prompt.name()
        );
    }
}

#[test]
fn test_lookup_by_name_and_qualified_name() {
    let catalog = Catalog::builtin().expect("built-in prompts are valid");

    let short = catalog.get("event_detection").expect("found by name");
    let qualified = catalog
        .get("reasoning/event_detection")
        .expect("found by qualified name");
    assert_eq!(short, qualified);
    assert!(short
        .system_text()
        .starts_with("You are an expert cybersecurity analyst"));
    assert!(catalog.get("nonexistent").is_none());
}

#[test]
fn test_microservices_prompt_uses_high_effort_without_inference() {
    let catalog = Catalog::builtin().expect("built-in prompts are valid");
    let prompt = catalog
        .get("microservices_architecture")
        .expect("prompt exists");

    assert_eq!(*prompt.reasoning_effort(), Some(ReasoningEffort::High));
    assert!(prompt.inference().is_none());

    let request = prompt.to_request().expect("valid request");
    assert!(request.inference_config().is_none());
}

#[test]
fn test_long_context_placeholder_rendering() {
    let catalog = Catalog::builtin().expect("built-in prompts are valid");
    let prompt = catalog.get("long_context").expect("prompt exists");

    assert!(prompt.placeholders().contains("domain"));
    assert!(prompt.system_text().contains("{domain}"));

    let vars = HashMap::from([("domain".to_string(), "legal".to_string())]);
    let rendered = prompt.render(&vars);

    assert!(rendered.system_text().starts_with("You are an expert legal assistant."));
    assert!(prompt.system_text().contains("{domain}"), "original untouched");
    assert_eq!(rendered.user_text(), prompt.user_text());
    assert!(rendered.placeholders().is_empty());
}

#[test]
fn test_code_samples_are_not_placeholders() {
    let catalog = Catalog::builtin().expect("built-in prompts are valid");
    let prompt = catalog.get("code_refactoring").expect("prompt exists");

    assert!(prompt.user_text().contains("user={user}"));
    assert!(prompt.placeholders().is_empty());

    let vars = HashMap::from([
        ("user".to_string(), "alice".to_string()),
        ("userId".to_string(), "42".to_string()),
    ]);
    assert_eq!(&prompt.render(&vars), prompt);
}

#[test]
fn test_only_long_context_declares_placeholders() {
    let catalog = Catalog::builtin().expect("built-in prompts are valid");
    for prompt in catalog.list() {
        let expected: Vec<String> = if prompt.name() == "long_context" {
            vec!["domain".to_string()]
        } else {
            Vec::new()
        };
        assert_eq!(
            prompt.placeholders().into_iter().collect::<Vec<_>>(),
            expected,
            "unexpected placeholders for {}",
            prompt.name()
        );
    }
}

#[test]
fn test_resolve_unknown_prompt() {
    let catalog = Catalog::builtin().expect("built-in prompts are valid");
    let err = catalog.resolve("no_such_prompt").expect_err("unknown prompt");
    assert_eq!(
        err.kind,
        CatalogErrorKind::UnknownPrompt("no_such_prompt".to_string())
    );
}

#[test]
fn test_from_dir_and_merge() {
    let dir = tempfile::tempdir().expect("temp dir");
    let nested = dir.path().join("custom");
    std::fs::create_dir(&nested).expect("create nested dir");
    std::fs::write(
        nested.join("haiku.toml"),
        r#"
[prompt]
name = "haiku"
category = "creative"

[system]
text = "You write haiku."

[user]
text = "Write one about {topic}."
"#,
    )
    .expect("write prompt");
    std::fs::write(dir.path().join("notes.txt"), "ignored").expect("write notes");

    let custom = Catalog::from_dir(dir.path()).expect("directory loads");
    assert_eq!(custom.len(), 1);

    let mut catalog = Catalog::builtin().expect("built-in prompts are valid");
    catalog.merge(custom).expect("no duplicates");
    assert_eq!(catalog.len(), 9);
    assert_eq!(catalog.list()[0].metadata().qualified_name(), "creative/haiku");

    let duplicate = Catalog::from_dir(dir.path()).expect("directory loads");
    let err = catalog.merge(duplicate).expect_err("duplicate name");
    assert_eq!(err.kind, CatalogErrorKind::DuplicatePrompt("haiku".to_string()));
}

#[test]
fn test_resolve_prompt_file_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("one_off.toml");
    std::fs::write(
        &path,
        "[prompt]\nname = \"one_off\"\n\n[system]\ntext = \"Be brief.\"\n\n[user]\ntext = \"Hi\"\n",
    )
    .expect("write prompt");

    let catalog = Catalog::default();
    let prompt = catalog
        .resolve(path.to_str().expect("utf-8 path"))
        .expect("file resolves");
    assert_eq!(prompt.name(), "one_off");
    assert!(prompt.tools().is_empty());
}

#[test]
fn test_from_dir_missing_directory() {
    let err = Catalog::from_dir("/definitely/not/here").expect_err("missing dir");
    assert!(matches!(err.kind, CatalogErrorKind::FileRead(_)));
}

#[test]
fn test_prompt_from_str_round_trip_fields() {
    let prompt: Prompt = r#"
[prompt]
name = "p"

[system]
text = "s"

[user]
text = "u"
"#
    .parse()
    .expect("valid prompt");
    assert_eq!(prompt.metadata().qualified_name(), "p");
    assert!(prompt.reasoning_effort().is_none());
}
