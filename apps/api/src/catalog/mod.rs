//! Role Catalog — immutable mapping from role id to its keyword list.
//!
//! Built once at startup (built-in table or a JSON file) and shared read-only
//! through `AppState`. No mutation operations are exposed.

mod builtin;
pub mod handlers;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::builtin::BUILTIN_ROLES;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Role '{0}' has no keywords")]
    EmptyRole(String),

    #[error("Role '{0}' contains a blank keyword")]
    BlankKeyword(String),

    #[error("Catalog defines no roles")]
    EmptyCatalog,

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A job category and the keywords a well-matched resume should mention.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Role {
    pub id: String,
    /// Lowercase, non-empty. Order is kept for reporting only.
    pub keywords: Vec<String>,
}

/// On-disk shape of one catalog entry: `{ "keywords": [...] }`.
#[derive(Debug, Deserialize)]
struct RoleDefinition {
    keywords: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<Role>,
}

impl RoleCatalog {
    /// The five roles of the reference deployment.
    pub fn builtin() -> Self {
        let roles = BUILTIN_ROLES
            .iter()
            .map(|(id, keywords)| Role {
                id: id.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            })
            .collect();
        Self { roles }
    }

    /// Parses `{ "<role_id>": { "keywords": [..] } }`. Keywords are trimmed and
    /// lowercased; roles end up ordered by id.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let definitions: BTreeMap<String, RoleDefinition> = serde_json::from_str(json)?;
        if definitions.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut roles = Vec::with_capacity(definitions.len());
        for (id, definition) in definitions {
            if definition.keywords.is_empty() {
                return Err(CatalogError::EmptyRole(id));
            }
            let mut keywords = Vec::with_capacity(definition.keywords.len());
            for keyword in definition.keywords {
                let normalized = keyword.trim().to_lowercase();
                if normalized.is_empty() {
                    return Err(CatalogError::BlankKeyword(id));
                }
                keywords.push(normalized);
            }
            roles.push(Role { id, keywords });
        }

        Ok(Self { roles })
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Looks up a role by its exact id.
    pub fn get(&self, role_id: &str) -> Result<&Role, CatalogError> {
        self.roles
            .iter()
            .find(|r| r.id == role_id)
            .ok_or_else(|| CatalogError::UnknownRole(role_id.to_string()))
    }

    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.roles.iter()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_has_reference_roles_in_order() {
        let catalog = RoleCatalog::builtin();
        let ids: Vec<&str> = catalog.roles().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "frontend",
                "backend",
                "fullstack",
                "data-scientist",
                "product-manager"
            ]
        );
    }

    #[test]
    fn test_builtin_keyword_lists_are_sized_and_lowercase() {
        for role in RoleCatalog::builtin().roles() {
            let n = role.keywords.len();
            assert!((14..=18).contains(&n), "{} has {n} keywords", role.id);
            for kw in &role.keywords {
                assert_eq!(kw, &kw.to_lowercase(), "{} keyword {kw}", role.id);
                assert!(!kw.trim().is_empty());
            }
        }
    }

    #[test]
    fn test_get_known_role() {
        let catalog = RoleCatalog::builtin();
        let role = catalog.get("data-scientist").unwrap();
        assert!(role.keywords.contains(&"machine learning".to_string()));
    }

    #[test]
    fn test_get_unknown_role() {
        let catalog = RoleCatalog::builtin();
        let err = catalog.get("astronaut").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownRole(ref id) if id == "astronaut"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(RoleCatalog::builtin().get("Frontend").is_err());
    }

    #[test]
    fn test_from_json_normalizes_keywords() {
        let catalog = RoleCatalog::from_json_str(
            r#"{"sre": {"keywords": ["  Kubernetes ", "On-Call", "terraform"]}}"#,
        )
        .unwrap();
        let role = catalog.get("sre").unwrap();
        assert_eq!(role.keywords, vec!["kubernetes", "on-call", "terraform"]);
    }

    #[test]
    fn test_from_json_orders_roles_by_id() {
        let catalog = RoleCatalog::from_json_str(
            r#"{"zeta": {"keywords": ["a"]}, "alpha": {"keywords": ["b"]}}"#,
        )
        .unwrap();
        let ids: Vec<&str> = catalog.roles().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_from_json_rejects_empty_role() {
        let err = RoleCatalog::from_json_str(r#"{"qa": {"keywords": []}}"#).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyRole(ref id) if id == "qa"));
    }

    #[test]
    fn test_from_json_rejects_blank_keyword() {
        let err = RoleCatalog::from_json_str(r#"{"qa": {"keywords": ["selenium", "  "]}}"#)
            .unwrap_err();
        assert!(matches!(err, CatalogError::BlankKeyword(_)));
    }

    #[test]
    fn test_from_json_rejects_empty_catalog() {
        let err = RoleCatalog::from_json_str("{}").unwrap_err();
        assert!(matches!(err, CatalogError::EmptyCatalog));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = RoleCatalog::from_json_str(r#"{"qa": ["selenium"]}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"devops": {{"keywords": ["docker", "ci/cd"]}}}}"#).unwrap();

        let catalog = RoleCatalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.get("devops").unwrap().keywords.len(), 2);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = RoleCatalog::from_path(Path::new("/nonexistent/roles.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
