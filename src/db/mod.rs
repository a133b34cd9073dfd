//! Data layer over the remote store: connection, schema, rows.

pub mod connector;
pub mod queries;
pub mod samples;
pub mod schema;

pub use connector::{
    ConnectSettings, Connection, Origin, Session, ShareOutcome, StoreHandle, StoreOpener, connect,
};
pub use schema::{CREATED_AT, Seed, Table, ensure_schema};
