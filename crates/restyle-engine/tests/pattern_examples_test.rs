//! Every example a built-in pattern declares resolves, through the full
//! pipeline and with a fresh session, to that pattern's processor and property.

use restyle_core::config::ResolverConfig;
use restyle_core::types::{
    CommandResult, ComponentType, ContextTypes, PatternAction, Prompt, Property, StyleContext,
};
use restyle_engine::{CommandRegistry, EditingSession, PatternLibrary};

fn first_component(types: &ContextTypes) -> ComponentType {
    match types {
        ContextTypes::All => ComponentType::Container,
        ContextTypes::Only(types) => types.first().copied().unwrap_or(ComponentType::Container),
    }
}

/// Every option of a prompt, fed back through its follow-up template,
/// resolves to the prompted property.
async fn answers_resolve(
    registry: &CommandRegistry,
    prompt: &Prompt,
    ctx: &StyleContext,
    property: Property,
) -> bool {
    if prompt.options.is_empty() {
        return false;
    }
    for option in &prompt.options {
        let command = prompt.follow_up.render(option);
        let mut session = EditingSession::new();
        let answered = registry.resolve(&command, ctx, &mut session).await;
        if answered.as_ref().and_then(|r| r.patch()).and_then(|p| p.primary_property()) != Some(property) {
            return false;
        }
    }
    true
}

#[tokio::test]
async fn test_every_example_resolves_to_its_pattern() {
    let registry =
        CommandRegistry::with_builtins(&PatternLibrary::with_builtins(), ResolverConfig::default());
    let mut failures = Vec::new();
    let mut checked = 0;

    for processor in registry.processors() {
        let metadata = processor.metadata();
        for rule in processor.patterns() {
            let component = rule
                .context_types()
                .map_or_else(|| first_component(&metadata.context_types), first_component);
            for example in rule.examples() {
                checked += 1;
                let ctx = StyleContext::new(component);
                let mut session = EditingSession::new();
                let resolution = registry.resolve(example, &ctx, &mut session).await;
                let ok = match &resolution {
                    Some(r) if r.processor_id == metadata.id => match &r.result {
                        CommandResult::Applied(applied) => {
                            applied.patch.primary_property() == Some(rule.property())
                        }
                        CommandResult::Prompt(prompt) => {
                            rule.action() == PatternAction::Prompt
                                && answers_resolve(&registry, prompt, &ctx, rule.property()).await
                        }
                    },
                    _ => false,
                };
                if !ok {
                    failures.push(format!("{} [{component:?}] {example:?} -> {resolution:?}", rule.id()));
                }
            }
        }
    }

    assert!(checked > 300, "only {checked} examples checked");
    assert!(failures.is_empty(), "{} failures:\n{}", failures.len(), failures.join("\n"));
}
