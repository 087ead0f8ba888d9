//! JSON import/export documents and import reports.
//!
//! Exported documents round-trip through the same types. Fields that only matter on export
//! (`id`, `exported_at`, `template_count`) are optional on import, and miniatures are always
//! referenced by `(series, unique_id)` because internal ids differ between databases.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::db::MiniatureModel;

/// Flat miniature record of the inventory export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniatureRecord {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub series: String,
    pub unique_id: i32,
    #[serde(default)]
    pub prefix: String,
    pub chassis: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tray_id: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl From<MiniatureModel> for MiniatureRecord {
    fn from(miniature: MiniatureModel) -> Self {
        Self {
            id: Some(miniature.id),
            series: miniature.series,
            unique_id: miniature.unique_id,
            prefix: miniature.prefix,
            chassis: miniature.chassis,
            kind: miniature.kind,
            status: miniature.status,
            tray_id: miniature.tray_id,
            notes: miniature.notes,
            created_at: Some(miniature.created_at),
        }
    }
}

/// How an inventory import treats existing records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportMode {
    /// Remove every miniature (and its assignments) before inserting the records.
    Replace,
    /// Update records whose `(series, unique_id)` already exists and insert the rest.
    Merge,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MiniatureImportReport {
    pub inserted: usize,
    pub updated: usize,
    /// Miniatures removed before inserting, only non-zero in replace mode.
    pub removed: u64,
}

fn default_force_name() -> String {
    "Imported Force".to_string()
}

/// Force export document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceDocument {
    #[serde(default = "default_force_name")]
    pub force_name: String,
    #[serde(default)]
    pub exported_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub lances: Vec<LanceDocument>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanceDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub miniatures: Vec<MiniatureReference>,
}

/// Reference to an inventory miniature inside a force document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniatureReference {
    #[serde(default)]
    pub series: String,
    pub unique_id: i32,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub chassis: String,
    #[serde(default)]
    pub tray_id: Option<String>,
    #[serde(default)]
    pub order: i32,
}

impl MiniatureReference {
    /// Human-readable identifier used in import reports, e.g. `A-12 (Atlas AS7-D)`.
    pub fn label(&self) -> String {
        format!("{}-{} ({})", self.series, self.unique_id, self.chassis)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LanceImportReport {
    pub lance_id: i32,
    pub name: Option<String>,
    pub imported_count: usize,
    /// References with no matching `(series, unique_id)` in the inventory.
    pub missing: Vec<String>,
    /// References to a miniature already placed earlier in the same document.
    pub duplicates: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForceImportReport {
    pub force_id: i32,
    pub force_name: String,
    pub imported_count: usize,
    pub missing_miniatures: Vec<String>,
    pub lances: Vec<LanceImportReport>,
}

/// Template export document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDocument {
    #[serde(default)]
    pub exported_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub template_count: usize,
    #[serde(default)]
    pub templates: Vec<TemplateRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub chassis_patterns: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TemplateImportReport {
    pub created: usize,
    pub updated: usize,
    /// Records without a name or without any pattern.
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miniature_record_uses_type_key() {
        let json = r#"{"series":"B","unique_id":3,"prefix":"LCT","chassis":"Locust","type":"Mech"}"#;

        let record: MiniatureRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.kind, "Mech");
        assert_eq!(record.id, None);
        assert_eq!(record.created_at, None);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "Mech");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn miniature_record_requires_integer_unique_id() {
        let json = r#"{"series":"A","unique_id":"WHM-001","chassis":"Warhammer"}"#;

        assert!(serde_json::from_str::<MiniatureRecord>(json).is_err());
    }

    #[test]
    fn force_document_defaults_missing_fields() {
        let document: ForceDocument = serde_json::from_str(r#"{"lances":[{}]}"#).unwrap();

        assert_eq!(document.force_name, "Imported Force");
        assert_eq!(document.lances.len(), 1);
        assert_eq!(document.lances[0].order, 0);
        assert!(document.lances[0].miniatures.is_empty());
    }

    #[test]
    fn labels_reference_by_series_and_unique_id() {
        let reference = MiniatureReference {
            series: "A".to_string(),
            unique_id: 12,
            prefix: "AS7".to_string(),
            chassis: "Atlas AS7-D".to_string(),
            tray_id: None,
            order: 1,
        };

        assert_eq!(reference.label(), "A-12 (Atlas AS7-D)");
    }
}
