//! Offline-aware access to the four tables.
//!
//! Listings fall back to empty when there is no connection; saves refuse
//! with `NotConnected` so the caller can tell the user nothing was written.

use crate::db::{Connection, queries};
use crate::errors::{AppError, AppResult};
use crate::models::{Project, SheetRecord};

use super::forms;

pub fn load<T: SheetRecord>(conn: &Connection) -> Vec<T> {
    match conn.handle() {
        Some(handle) => queries::list(handle),
        None => Vec::new(),
    }
}

/// Validate, then append. Validation runs before the connection check so
/// an incomplete form is reported the same way online and offline.
pub fn save<T: SheetRecord>(conn: &Connection, record: &T) -> AppResult<()> {
    forms::validate(record)?;
    let handle = conn.handle().ok_or(AppError::NotConnected)?;
    queries::insert(handle, record)?;
    Ok(())
}

/// Project names offered by the forms.
pub fn project_choices(conn: &Connection, fallback: &[String]) -> Vec<String> {
    let projects: Vec<Project> = load(conn);
    super::listing::project_choices(&projects, fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ConnectSettings, connect};
    use crate::errors::{ConnectionError, StoreError};
    use crate::models::{DailyUpdate, Retrospective};
    use crate::store::MemoryStore;

    fn online() -> (MemoryStore, Connection) {
        let store = MemoryStore::new();
        let handle = connect(Box::new(store.clone()), &ConnectSettings::default()).unwrap();
        (store, Connection::Online(handle))
    }

    #[test]
    fn offline_lists_nothing_and_refuses_saves() {
        let conn = Connection::Offline(ConnectionError::CredentialsMissing);
        assert!(load::<DailyUpdate>(&conn).is_empty());

        let retro = Retrospective {
            sprint: "Sprint 2".into(),
            ..Default::default()
        };
        assert!(matches!(save(&conn, &retro), Err(AppError::NotConnected)));
        assert!(matches!(
            save(&conn, &Retrospective::default()),
            Err(AppError::Validation(_))
        ));

        let fallback = vec!["Beehiiv + TinyEmail".to_string()];
        assert_eq!(project_choices(&conn, &fallback), fallback);
    }

    #[test]
    fn invalid_form_is_not_appended() {
        let (_, conn) = online();
        let before = load::<Project>(&conn).len();
        let err = save(
            &conn,
            &Project {
                project: "Half done".into(),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(load::<Project>(&conn).len(), before);
    }

    #[test]
    fn write_failure_surfaces_as_store_error() {
        let (store, conn) = online();
        store.fail_writes(true);
        let err = save(
            &conn,
            &Retrospective {
                sprint: "Sprint 2".into(),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Store(StoreError::WriteFailed { .. })
        ));
    }

    #[test]
    fn seeded_projects_become_the_choices() {
        let (_, conn) = online();
        assert_eq!(
            project_choices(&conn, &[]),
            vec!["Beehiiv + TinyEmail Automation", "Slack AI Assistant"]
        );
    }
}
