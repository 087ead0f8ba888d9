mod crud;

use mechbay_test_utils::prelude::*;

use crate::{
    error::ErrorKind,
    model::template::{NewTemplate, TemplateLanceOptions, TemplateLanceOutcome},
    service::lance_template::TemplateService,
};

fn new_template(name: &str, patterns: &[&str]) -> NewTemplate {
    NewTemplate {
        name: name.to_string(),
        description: None,
        chassis_patterns: patterns.iter().map(|p| p.to_string()).collect(),
    }
}
