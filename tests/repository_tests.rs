use chrono::{Local, SubsecRound};
use sprint_tracker::db::connector::DEFAULT_SPREADSHEET_NAME;
use sprint_tracker::db::queries::{append, insert, list, read_all, try_read_all};
use sprint_tracker::db::{
    ConnectSettings, Origin, Session, ShareOutcome, StoreHandle, StoreOpener, Table, connect,
};
use sprint_tracker::errors::{ConnectionError, StoreError};
use sprint_tracker::models::{DailyUpdate, Project, Retrospective, SprintGoal};
use sprint_tracker::store::{MemoryStore, Role, TableStore};
use sprint_tracker::utils::time::parse_timestamp;

fn seeded() -> (MemoryStore, StoreHandle) {
    let store = MemoryStore::new();
    let handle = connect(Box::new(store.clone()), &ConnectSettings::default()).unwrap();
    (store, handle)
}

fn opener_for(store: &MemoryStore) -> StoreOpener {
    let store = store.clone();
    Box::new(move || Ok(Box::new(store.clone()) as Box<dyn TableStore>))
}

fn share_settings() -> ConnectSettings {
    ConnectSettings {
        share_with: Some("owner@example.com".into()),
        ..ConnectSettings::default()
    }
}

#[test]
fn test_first_connect_creates_shares_and_seeds() {
    let store = MemoryStore::new();
    let handle = connect(Box::new(store.clone()), &share_settings()).unwrap();

    assert_eq!(
        handle.origin(),
        &Origin::Created {
            share: ShareOutcome::Shared("owner@example.com".into())
        }
    );
    assert_eq!(handle.collection().title, DEFAULT_SPREADSHEET_NAME);
    assert_eq!(
        store.permissions(handle.collection()),
        vec![("owner@example.com".to_string(), Role::Writer)]
    );
    let projects = store
        .read_values(handle.collection(), Table::ProjectOverview.title())
        .unwrap();
    assert_eq!(projects.len(), 3);
}

#[test]
fn test_second_connect_opens_without_reseeding() {
    let store = MemoryStore::new();
    let settings = ConnectSettings::default();
    connect(Box::new(store.clone()), &settings).unwrap();
    let handle = connect(Box::new(store.clone()), &settings).unwrap();

    assert_eq!(handle.origin(), &Origin::Opened);
    assert_eq!(store.collection_count(), 1);
    let daily = store
        .read_values(handle.collection(), Table::DailyUpdates.title())
        .unwrap();
    assert_eq!(daily.len(), 4);
}

#[test]
fn test_failed_header_rewrite_keeps_existing_spreadsheet_online() {
    let store = MemoryStore::new();
    connect(Box::new(store.clone()), &ConnectSettings::default()).unwrap();

    store.fail_writes(true);
    let handle = connect(Box::new(store.clone()), &ConnectSettings::default())
        .expect("existing spreadsheet stays reachable");
    assert_eq!(handle.origin(), &Origin::Opened);
    assert_eq!(try_read_all(&handle, Table::DailyUpdates).unwrap().len(), 3);

    let session = Session::open(opener_for(&store), ConnectSettings::default());
    assert!(session.connection().is_online());
}

#[test]
fn test_share_failure_is_not_fatal() {
    let store = MemoryStore::new();
    store.fail_sharing(true);
    let handle = connect(Box::new(store), &share_settings()).unwrap();
    match handle.origin() {
        Origin::Created {
            share: ShareOutcome::Failed(StoreError::ShareFailed { email, .. }),
        } => assert_eq!(email, "owner@example.com"),
        other => panic!("unexpected origin {other:?}"),
    }
}

#[test]
fn test_full_drive_is_quota_exceeded() {
    let store = MemoryStore::new();
    store.exhaust_quota(true);
    let err = connect(Box::new(store), &ConnectSettings::default())
        .err()
        .unwrap();
    assert_eq!(err, ConnectionError::QuotaExceeded);
}

#[test]
fn test_missing_credentials_leave_session_offline() {
    let session = Session::open(
        Box::new(|| -> Result<Box<dyn TableStore>, ConnectionError> {
            Err(ConnectionError::CredentialsMissing)
        }),
        ConnectSettings::default(),
    );
    assert!(!session.connection().is_online());
}

#[test]
fn test_refresh_reconnects_to_the_same_data() {
    let store = MemoryStore::new();
    let mut session = Session::open(opener_for(&store), ConnectSettings::default());
    let first_id = session.handle().unwrap().collection().id.clone();

    session.refresh();
    assert_eq!(session.generation(), 2);
    let handle = session.handle().unwrap();
    assert_eq!(handle.collection().id, first_id);
    assert_eq!(handle.origin(), &Origin::Opened);
}

#[test]
fn test_fresh_collection_reads_back_the_samples() {
    let (_, handle) = seeded();

    let projects = try_read_all(&handle, Table::ProjectOverview).unwrap();
    assert_eq!(projects.len(), 2);
    let first: Vec<&str> = projects[0].values().collect();
    assert_eq!(
        &first[..5],
        &[
            "Beehiiv + TinyEmail Automation",
            "Automate daily campaign stats to Sheets",
            "Aug 28",
            "Sept 6",
            "In Progress",
        ]
    );
    assert!(parse_timestamp(projects[0].get("Created At")).is_some());

    let retro: Vec<Retrospective> = list(&handle);
    assert_eq!(retro.len(), 1);
    assert_eq!(retro[0].went_well, "Clear roadmap, strong API division");

    let goals: Vec<SprintGoal> = list(&handle);
    assert_eq!(goals[1].success_criteria, "Answers accurate within ±10%");
    let updates: Vec<DailyUpdate> = list(&handle);
    assert_eq!(updates[2].next_milestone, "Slackbot responds to `/ask`");
}

#[test]
fn test_appended_row_comes_back_last_and_verbatim() {
    let (_, handle) = seeded();
    let project = Project {
        project: "  Billing Revamp ".into(),
        goal: "Move invoices to Stripe, finally".into(),
        status: "Planned".into(),
        notes: "line one\nline two".into(),
        created_at: "ignored".into(),
        ..Default::default()
    };

    let before = Local::now().naive_local().trunc_subsecs(6);
    insert(&handle, &project).unwrap();

    let rows: Vec<Project> = list(&handle);
    assert_eq!(rows.len(), 3);
    let last = rows.last().unwrap();
    assert_eq!(last.project, "  Billing Revamp ");
    assert_eq!(last.target_end_date, "");
    assert_eq!(last.notes, "line one\nline two");

    let stamped = parse_timestamp(&last.created_at).expect("timestamp");
    assert!(stamped >= before, "{stamped} < {before}");
}

#[test]
fn test_failed_write_leaves_rows_untouched() {
    let (store, handle) = seeded();
    let before = try_read_all(&handle, Table::Retrospective).unwrap();

    store.fail_writes(true);
    let err = insert(
        &handle,
        &Retrospective {
            sprint: "Sprint 2".into(),
            ..Default::default()
        },
    )
    .unwrap_err();
    store.fail_writes(false);

    assert!(
        matches!(err, StoreError::WriteFailed { ref table, .. } if table == "Results & Retrospective")
    );
    assert_eq!(try_read_all(&handle, Table::Retrospective).unwrap(), before);
}

#[test]
fn test_wrong_value_count_is_rejected() {
    let (_, handle) = seeded();
    let err = append(&handle, Table::SprintGoals, vec!["Sprint 3".into()]).unwrap_err();
    assert!(matches!(err, StoreError::WriteFailed { .. }));
    assert_eq!(try_read_all(&handle, Table::SprintGoals).unwrap().len(), 2);
}

#[test]
fn test_missing_worksheet_reads_as_empty() {
    let store = MemoryStore::new();
    let info = store.create_collection("Bare").unwrap();
    let handle = StoreHandle::new(Box::new(store), info);

    assert!(matches!(
        try_read_all(&handle, Table::DailyUpdates),
        Err(StoreError::TableNotFound(_))
    ));
    assert!(read_all(&handle, Table::DailyUpdates).is_empty());
}

#[test]
fn test_header_only_worksheet_has_no_records() {
    let store = MemoryStore::new();
    let info = store.create_collection("Bare").unwrap();
    store.add_table(&info, "Sprint Goals", 100, 8).unwrap();
    let handle = StoreHandle::new(Box::new(store), info);
    assert!(try_read_all(&handle, Table::SprintGoals).unwrap().is_empty());
}
