use std::str::FromStr;

use crate::{
    error::{validation::ValidationError, Error},
    model::db::MiniatureModel,
};

/// Series applied when none is given.
pub const DEFAULT_SERIES: &str = "A";

/// Input for creating a miniature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMiniature {
    pub series: String,
    pub unique_id: i32,
    pub prefix: String,
    pub chassis: String,
    pub kind: String,
    pub status: Option<String>,
    pub tray_id: Option<String>,
    pub notes: Option<String>,
}

/// Explicit set of mutable miniature fields.
///
/// `None` leaves a field untouched. For nullable columns the inner `Option` is the new
/// value, so `Some(None)` clears the field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MiniatureUpdate {
    pub series: Option<String>,
    pub unique_id: Option<i32>,
    pub prefix: Option<String>,
    pub chassis: Option<String>,
    pub kind: Option<String>,
    pub status: Option<Option<String>>,
    pub tray_id: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

impl MiniatureUpdate {
    /// Whether no field is listed for change.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Columns the inventory list may be sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MiniatureSortKey {
    UniqueId,
    Prefix,
    Chassis,
    Type,
    Status,
    TrayId,
}

impl FromStr for MiniatureSortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unique_id" => Ok(Self::UniqueId),
            "prefix" => Ok(Self::Prefix),
            "chassis" => Ok(Self::Chassis),
            "type" => Ok(Self::Type),
            "status" => Ok(Self::Status),
            "tray_id" => Ok(Self::TrayId),
            other => Err(ValidationError::UnknownSortKey(other.to_string()).into()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ValidationError::UnknownSortDirection(other.to_string()).into()),
        }
    }
}

/// Filters and ordering for listing the inventory.
///
/// Without a sort the list is ordered by internal id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MiniatureQuery {
    /// Case-insensitive substring matched against unique_id, prefix, chassis and type.
    pub search: Option<String>,
    pub series: Option<String>,
    pub sort: Option<(MiniatureSortKey, SortDirection)>,
}

impl MiniatureQuery {
    /// Whether the miniature passes the free-text search filter.
    pub fn matches_search(&self, miniature: &MiniatureModel) -> bool {
        let needle = match self.search.as_deref().map(str::trim) {
            None | Some("") => return true,
            Some(needle) => needle.to_lowercase(),
        };

        miniature.unique_id.to_string().contains(&needle)
            || miniature.prefix.to_lowercase().contains(&needle)
            || miniature.chassis.to_lowercase().contains(&needle)
            || miniature.kind.to_lowercase().contains(&needle)
    }
}

/// A lance a deleted miniature was pulled out of.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovedAssignment {
    pub force_id: i32,
    pub force_name: String,
    pub lance_id: i32,
    pub lance_name: Option<String>,
}

/// Result of deleting a miniature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MiniatureDeletion {
    pub miniature: MiniatureModel,
    /// Assignments removed together with the miniature, empty when it wasn't in any force.
    pub removed_from: Vec<RemovedAssignment>,
}

impl MiniatureDeletion {
    /// Names of the affected forces, for surfacing a warning to the user.
    pub fn affected_forces(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for removed in &self.removed_from {
            if !names.contains(&removed.force_name.as_str()) {
                names.push(&removed.force_name);
            }
        }
        names
    }
}

/// Parse a unique_id typed in by a user.
pub fn parse_unique_id(raw: &str) -> Result<i32, Error> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidUniqueId(raw.to_string()).into())
}
