//! Prompt files compiled into the crate.

/// `(relative path, contents)` for every built-in prompt.
pub(crate) const BUILTIN_PROMPTS: &[(&str, &str)] = &[
    (
        "reasoning/event_detection.toml",
        include_str!("../prompts/reasoning/event_detection.toml"),
    ),
    (
        "reasoning/long_context.toml",
        include_str!("../prompts/reasoning/long_context.toml"),
    ),
    (
        "reasoning/question_answer_reasoning.toml",
        include_str!("../prompts/reasoning/question_answer_reasoning.toml"),
    ),
    (
        "reasoning/tool_calling_grounding.toml",
        include_str!("../prompts/reasoning/tool_calling_grounding.toml"),
    ),
    (
        "software_engineering/architecture_review.toml",
        include_str!("../prompts/software_engineering/architecture_review.toml"),
    ),
    (
        "software_engineering/code_refactoring.toml",
        include_str!("../prompts/software_engineering/code_refactoring.toml"),
    ),
    (
        "software_engineering/function_generator.toml",
        include_str!("../prompts/software_engineering/function_generator.toml"),
    ),
    (
        "software_engineering/microservices_architecture.toml",
        include_str!("../prompts/software_engineering/microservices_architecture.toml"),
    ),
];
