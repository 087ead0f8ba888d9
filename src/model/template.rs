use crate::model::db::{
    LanceModel, LanceTemplateModel, LanceTemplatePatternModel, MiniatureModel,
};

/// Input for creating or replacing a lance template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTemplate {
    pub name: String,
    pub description: Option<String>,
    pub chassis_patterns: Vec<String>,
}

/// A template with its chassis patterns in template order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateAggregate {
    pub template: LanceTemplateModel,
    pub patterns: Vec<LanceTemplatePatternModel>,
}

impl TemplateAggregate {
    pub fn chassis_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .map(|pattern| pattern.chassis_pattern.clone())
            .collect()
    }
}

/// One pattern paired with the miniature it consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateMatch {
    pub pattern: String,
    pub miniature: MiniatureModel,
}

/// Result of matching a template against the inventory.
///
/// Both lists preserve template order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    pub matches: Vec<TemplateMatch>,
    pub missing: Vec<String>,
}

impl MatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Options for building a lance from a template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateLanceOptions {
    /// Skip miniatures already placed anywhere in the target force.
    pub exclude_already_assigned: bool,
    /// Create the lance even when some patterns found no miniature.
    pub confirm_partial: bool,
    /// Lance name, defaults to the template name.
    pub name: Option<String>,
}

impl Default for TemplateLanceOptions {
    fn default() -> Self {
        Self {
            exclude_already_assigned: true,
            confirm_partial: false,
            name: None,
        }
    }
}

/// Outcome of [`create_lance_from_template`](crate::service::lance_template::TemplateService::create_lance_from_template).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateLanceOutcome {
    /// Some patterns are unmatched and the caller has not confirmed; nothing was written.
    NeedsConfirmation {
        template_name: String,
        matched_count: usize,
        missing: Vec<String>,
    },
    /// The lance was created with one assignment per match.
    Created {
        lance: LanceModel,
        matched_count: usize,
        missing: Vec<String>,
    },
}
