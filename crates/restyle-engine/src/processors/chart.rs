//! Chart type, legend, grid, labels, series styling and title.

use restyle_core::types::{Domain, Property};

use super::{DomainRules, PatternProcessor, PromptSpec};

#[derive(Debug, Clone, Copy, Default)]
pub struct ChartRules;

pub type ChartProcessor = PatternProcessor<ChartRules>;

impl DomainRules for ChartRules {
    fn domain(&self) -> Domain {
        Domain::Chart
    }

    fn prompt(&self, property: Property) -> Option<PromptSpec> {
        (property == Property::ChartType).then_some(PromptSpec {
            message: "Which chart type would you like?",
            options: &["bar", "line", "pie", "area", "donut", "scatter"],
            template: "change to a {value} chart",
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::processors::test_support::{patch, run};
    use restyle_core::types::{ComponentType, Domain, PatchValue, Property, StyleContext};

    fn chart() -> StyleContext {
        StyleContext::new(ComponentType::Chart)
    }

    #[test]
    fn test_type_aliases() {
        let p = patch(Domain::Chart, "make it a doughnut chart", &chart());
        assert_eq!(p.value_of(Property::ChartType), Some(&PatchValue::Keyword("donut".into())));
    }

    #[test]
    fn test_type_prompt_round_trips() {
        let result = run(Domain::Chart, "change chart type", &chart()).unwrap();
        let command = result.as_prompt().unwrap().follow_up.render("line");
        let p = patch(Domain::Chart, &command, &chart());
        assert_eq!(p.value_of(Property::ChartType), Some(&PatchValue::Keyword("line".into())));
    }

    #[test]
    fn test_legend_position_shows_legend() {
        let p = patch(Domain::Chart, "move the legend to the bottom", &chart());
        assert_eq!(p.value_of(Property::LegendPosition), Some(&PatchValue::Keyword("bottom".into())));
        assert_eq!(p.value_of(Property::ShowLegend), Some(&PatchValue::Flag(true)));
    }

    #[test]
    fn test_title_text() {
        let p = patch(Domain::Chart, "set the title to \"Q3 Revenue\"", &chart());
        assert_eq!(p.value_of(Property::Title), Some(&PatchValue::Text("Q3 Revenue".into())));
    }

    #[test]
    fn test_chart_patterns_need_a_chart() {
        let text = StyleContext::new(ComponentType::Text);
        assert!(run(Domain::Chart, "add a legend", &text).is_none());
    }
}
