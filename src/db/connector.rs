//! Store connector: resolve the tracker spreadsheet and keep the handle.
//!
//! `connect` opens the spreadsheet by name or creates it (sharing it and
//! seeding the sample rows on creation). `Session` owns the resulting
//! `Connection` for the lifetime of the process; `refresh` drops it and
//! connects again.

use super::schema::{Seed, ensure_schema};
use crate::errors::{ConnectionError, StoreError};
use crate::store::{CollectionInfo, Role, TableStore};

pub const DEFAULT_SPREADSHEET_NAME: &str = "Sprint Tracker Data";

/// An authenticated store plus the resolved spreadsheet.
pub struct StoreHandle {
    store: Box<dyn TableStore>,
    collection: CollectionInfo,
    origin: Origin,
}

/// How the spreadsheet was obtained during `connect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Opened,
    Created { share: ShareOutcome },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    NotConfigured,
    Shared(String),
    Failed(StoreError),
}

impl StoreHandle {
    pub fn new(store: Box<dyn TableStore>, collection: CollectionInfo) -> Self {
        Self {
            store,
            collection,
            origin: Origin::Opened,
        }
    }

    pub fn store(&self) -> &dyn TableStore {
        self.store.as_ref()
    }

    pub fn collection(&self) -> &CollectionInfo {
        &self.collection
    }

    pub fn url(&self) -> &str {
        &self.collection.url
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }
}

#[derive(Debug, Clone)]
pub struct ConnectSettings {
    pub spreadsheet_name: String,
    pub share_with: Option<String>,
}

impl Default for ConnectSettings {
    fn default() -> Self {
        Self {
            spreadsheet_name: DEFAULT_SPREADSHEET_NAME.to_string(),
            share_with: None,
        }
    }
}

/// Open the configured spreadsheet, creating, sharing and seeding it if absent.
pub fn connect(
    store: Box<dyn TableStore>,
    settings: &ConnectSettings,
) -> Result<StoreHandle, ConnectionError> {
    let name = settings.spreadsheet_name.as_str();

    if let Some(collection) = store.find_collection(name)? {
        tracing::debug!(id = %collection.id, "opened existing spreadsheet");
        let handle = StoreHandle::new(store, collection);
        // worksheets deleted by hand are put back, without samples; the data
        // stays readable when this pass fails, so it does not end the connection
        if let Err(e) = ensure_schema(&handle, Seed::None) {
            tracing::warn!(error = %e, "schema repair on existing spreadsheet failed");
        }
        return Ok(handle);
    }

    let collection = store.create_collection(name)?;
    tracing::info!(id = %collection.id, %name, "created spreadsheet");

    let share = match settings.share_with.as_deref().map(str::trim) {
        Some(email) if !email.is_empty() => {
            match store.share(&collection, email, Role::Writer) {
                Ok(()) => ShareOutcome::Shared(email.to_string()),
                Err(e) => {
                    tracing::warn!(%email, error = %e, "sharing failed");
                    ShareOutcome::Failed(StoreError::ShareFailed {
                        email: email.to_string(),
                        reason: e.to_string(),
                    })
                }
            }
        }
        _ => ShareOutcome::NotConfigured,
    };

    let mut handle = StoreHandle::new(store, collection);
    handle.origin = Origin::Created { share };
    ensure_schema(&handle, Seed::Samples)?;
    Ok(handle)
}

/// Result of trying to connect; the offline branch carries the reason.
pub enum Connection {
    Online(StoreHandle),
    Offline(ConnectionError),
}

impl Connection {
    pub fn handle(&self) -> Option<&StoreHandle> {
        match self {
            Connection::Online(h) => Some(h),
            Connection::Offline(_) => None,
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, Connection::Online(_))
    }
}

/// Builds a fresh, authenticated store for each (re)connection.
pub type StoreOpener = Box<dyn Fn() -> Result<Box<dyn TableStore>, ConnectionError>>;

fn no_store() -> Result<Box<dyn TableStore>, ConnectionError> {
    Err(ConnectionError::Disabled)
}

pub struct Session {
    opener: StoreOpener,
    settings: ConnectSettings,
    connection: Connection,
    generation: u32,
}

impl Session {
    pub fn open(opener: StoreOpener, settings: ConnectSettings) -> Self {
        let connection = Self::establish(&opener, &settings);
        Self {
            opener,
            settings,
            connection,
            generation: 1,
        }
    }

    /// A session that never touches the store.
    pub fn offline(reason: ConnectionError) -> Self {
        Self {
            opener: Box::new(no_store),
            settings: ConnectSettings::default(),
            connection: Connection::Offline(reason),
            generation: 1,
        }
    }

    fn establish(opener: &StoreOpener, settings: &ConnectSettings) -> Connection {
        match opener().and_then(|store| connect(store, settings)) {
            Ok(handle) => Connection::Online(handle),
            Err(e) => {
                tracing::warn!(error = %e, "working offline");
                Connection::Offline(e)
            }
        }
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn handle(&self) -> Option<&StoreHandle> {
        self.connection.handle()
    }

    /// How many connections this session has made, refreshes included.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Discard the current handle (and any cached token) and reconnect.
    pub fn refresh(&mut self) -> &Connection {
        // drop the old handle before building the new one
        self.connection = Connection::Offline(ConnectionError::Disabled);
        self.connection = Self::establish(&self.opener, &self.settings);
        self.generation += 1;
        &self.connection
    }
}
