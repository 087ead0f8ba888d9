//! Lance template service layer.
//!
//! Templates are named, ordered lists of chassis patterns. Besides plain CRUD the service
//! matches a template against the inventory and builds a new lance from the result.

pub mod matcher;

#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet};

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use tracing::{debug, info};

use crate::{
    data::{
        force::{force_miniature::ForceMiniatureRepository, ForceRepository},
        lance_template::{pattern::LanceTemplatePatternRepository, LanceTemplateRepository},
        miniature::MiniatureRepository,
    },
    error::{not_found::NotFoundError, validation::ValidationError, Error},
    model::{
        db::LanceTemplateModel,
        template::{
            MatchOutcome, NewTemplate, TemplateAggregate, TemplateLanceOptions,
            TemplateLanceOutcome,
        },
    },
    service::force::{assign_miniature, create_lance_in_force},
};

pub struct TemplateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TemplateService<'a> {
    /// Creates a new instance of [`TemplateService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists templates ordered by name, each with its patterns
    pub async fn list_templates(&self) -> Result<Vec<TemplateAggregate>, Error> {
        let txn = self.db.begin().await?;
        let templates = load_all_templates(&txn).await?;
        txn.commit().await?;

        debug!("Listed {} lance templates", templates.len());

        Ok(templates)
    }

    pub async fn get_template(&self, id: i32) -> Result<TemplateAggregate, Error> {
        let txn = self.db.begin().await?;
        let template = self.get_template_in(&txn, id).await?;
        txn.commit().await?;

        Ok(template)
    }

    /// Creates a template
    ///
    /// Blank patterns are dropped, a template without any remaining pattern is rejected.
    pub async fn create_template(&self, template: NewTemplate) -> Result<TemplateAggregate, Error> {
        let template = normalize_template(template)?;

        let txn = self.db.begin().await?;
        let created = store_template(&txn, None, template).await?;
        txn.commit().await?;

        info!(
            "Created lance template {:?} with {} patterns",
            created.template.name,
            created.patterns.len()
        );

        Ok(created)
    }

    /// Replaces a template's name, description and full pattern list
    pub async fn update_template(
        &self,
        id: i32,
        template: NewTemplate,
    ) -> Result<TemplateAggregate, Error> {
        let template = normalize_template(template)?;

        let txn = self.db.begin().await?;
        let template_repo = LanceTemplateRepository::new(&txn);

        let existing = template_repo
            .get_by_id(id)
            .await?
            .ok_or(NotFoundError::Template(id))?;
        let updated = store_template(&txn, Some(existing), template).await?;

        txn.commit().await?;

        info!(
            "Updated lance template ID {} with {} patterns",
            id,
            updated.patterns.len()
        );

        Ok(updated)
    }

    /// Deletes a template together with its patterns
    pub async fn delete_template(&self, id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let template_repo = LanceTemplateRepository::new(&txn);
        let pattern_repo = LanceTemplatePatternRepository::new(&txn);

        let template = template_repo
            .get_by_id(id)
            .await?
            .ok_or(NotFoundError::Template(id))?;

        pattern_repo.delete_by_template_id(id).await?;
        template_repo.delete(id).await?;

        txn.commit().await?;

        info!("Deleted lance template {:?} (ID {})", template.name, id);

        Ok(())
    }

    /// Matches a template against the current inventory, skipping the excluded miniature ids
    pub async fn match_template(
        &self,
        template_id: i32,
        exclude: &HashSet<i32>,
    ) -> Result<MatchOutcome, Error> {
        let txn = self.db.begin().await?;
        let template = self.get_template_in(&txn, template_id).await?;
        let available = MiniatureRepository::new(&txn).list(None, None).await?;
        txn.commit().await?;

        Ok(matcher::match_template(
            &template.chassis_patterns(),
            &available,
            exclude,
        ))
    }

    /// Builds a new lance in the force from a template
    ///
    /// # Behavior
    /// - Miniatures already placed in the force are excluded from matching unless
    ///   `exclude_already_assigned` is false
    /// - When some patterns are unmatched and `confirm_partial` is false, nothing is written
    ///   and [`TemplateLanceOutcome::NeedsConfirmation`] lists the missing patterns
    /// - Otherwise the lance is appended to the force with one assignment per match, numbered
    ///   1..n in template order
    ///
    /// # Returns
    /// - `Err(Error::NotFoundError(_))`: Force or template does not exist
    /// - `Err(Error::ConflictError(_))`: With `exclude_already_assigned` false, a match is
    ///   already placed in the force; the lance is not created
    pub async fn create_lance_from_template(
        &self,
        force_id: i32,
        template_id: i32,
        options: TemplateLanceOptions,
    ) -> Result<TemplateLanceOutcome, Error> {
        let txn = self.db.begin().await?;
        let force_repo = ForceRepository::new(&txn);
        let assignment_repo = ForceMiniatureRepository::new(&txn);
        let miniature_repo = MiniatureRepository::new(&txn);

        if force_repo.get_by_id(force_id).await?.is_none() {
            return Err(NotFoundError::Force(force_id).into());
        }

        let template = self.get_template_in(&txn, template_id).await?;

        let exclude: HashSet<i32> = if options.exclude_already_assigned {
            assignment_repo
                .get_miniature_ids_by_force_id(force_id)
                .await?
                .into_iter()
                .collect()
        } else {
            HashSet::new()
        };
        let available = miniature_repo.list(None, None).await?;

        let outcome =
            matcher::match_template(&template.chassis_patterns(), &available, &exclude);
        let matched_count = outcome.matches.len();

        if !outcome.is_complete() && !options.confirm_partial {
            debug!(
                "Template {:?} matched {} of {} patterns, awaiting confirmation",
                template.template.name,
                matched_count,
                template.patterns.len()
            );

            return Ok(TemplateLanceOutcome::NeedsConfirmation {
                template_name: template.template.name,
                matched_count,
                missing: outcome.missing,
            });
        }

        let name = options
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| template.template.name.clone());
        let lance = create_lance_in_force(&txn, force_id, Some(name)).await?;

        for (position, matched) in (1..).zip(outcome.matches.iter()) {
            assign_miniature(&txn, &lance, matched.miniature.id, Some(position)).await?;
        }
        force_repo.touch(force_id).await?;

        txn.commit().await?;

        info!(
            "Created lance ID {} in force ID {} from template {:?} with {} miniatures",
            lance.id, force_id, template.template.name, matched_count
        );

        Ok(TemplateLanceOutcome::Created {
            lance,
            matched_count,
            missing: outcome.missing,
        })
    }

    async fn get_template_in<C: ConnectionTrait>(
        &self,
        db: &C,
        id: i32,
    ) -> Result<TemplateAggregate, Error> {
        let template_repo = LanceTemplateRepository::new(db);
        let pattern_repo = LanceTemplatePatternRepository::new(db);

        let template = template_repo
            .get_by_id(id)
            .await?
            .ok_or(NotFoundError::Template(id))?;
        let patterns = pattern_repo.get_many_by_template_id(id).await?;

        Ok(TemplateAggregate { template, patterns })
    }
}

/// Loads every template with its patterns, ordered by template name
pub(crate) async fn load_all_templates<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<TemplateAggregate>, DbErr> {
    let template_repo = LanceTemplateRepository::new(db);
    let pattern_repo = LanceTemplatePatternRepository::new(db);

    let templates = template_repo.get_all().await?;
    let template_ids: Vec<i32> = templates.iter().map(|template| template.id).collect();

    let mut patterns_by_template = HashMap::new();
    for pattern in pattern_repo.get_many_by_template_ids(&template_ids).await? {
        patterns_by_template
            .entry(pattern.template_id)
            .or_insert_with(Vec::new)
            .push(pattern);
    }

    Ok(templates
        .into_iter()
        .map(|template| TemplateAggregate {
            patterns: patterns_by_template
                .remove(&template.id)
                .unwrap_or_default(),
            template,
        })
        .collect())
}

/// Creates the template, or overwrites `existing` and replaces all of its patterns
pub(crate) async fn store_template<C: ConnectionTrait>(
    db: &C,
    existing: Option<LanceTemplateModel>,
    template: NewTemplate,
) -> Result<TemplateAggregate, DbErr> {
    let template_repo = LanceTemplateRepository::new(db);
    let pattern_repo = LanceTemplatePatternRepository::new(db);

    let model = match existing {
        Some(existing) => {
            pattern_repo.delete_by_template_id(existing.id).await?;
            template_repo
                .update(existing, template.name, template.description)
                .await?
        }
        None => {
            template_repo
                .create(template.name, template.description)
                .await?
        }
    };

    let patterns = pattern_repo
        .create_many(model.id, &template.chassis_patterns)
        .await?;

    Ok(TemplateAggregate {
        template: model,
        patterns,
    })
}

/// Trims the template fields and drops blank patterns
pub(crate) fn normalize_template(template: NewTemplate) -> Result<NewTemplate, Error> {
    let name = template.name.trim().to_string();
    if name.is_empty() {
        return Err(ValidationError::MissingField("template name").into());
    }

    let chassis_patterns: Vec<String> = template
        .chassis_patterns
        .iter()
        .map(|pattern| pattern.trim())
        .filter(|pattern| !pattern.is_empty())
        .map(str::to_string)
        .collect();
    if chassis_patterns.is_empty() {
        return Err(ValidationError::EmptyPatternList.into());
    }

    Ok(NewTemplate {
        name,
        description: template
            .description
            .map(|description| description.trim().to_string())
            .filter(|description| !description.is_empty()),
        chassis_patterns,
    })
}
