//! Google Sheets v4 / Drive v3 backend.

use super::auth::TokenSource;
use super::range::quote_title;
use super::{CellRange, CollectionInfo, Role, ServiceAccountKey, TableStore};
use crate::errors::{StoreError, StoreResult};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::time::Duration;
use url::Url;

const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const DRIVE_FILES_API: &str = "https://www.googleapis.com/drive/v3/files";
const SPREADSHEET_MIME: &str = "application/vnd.google-apps.spreadsheet";
const SPREADSHEET_URL: &str = "https://docs.google.com/spreadsheets/d";

pub struct SheetsStore {
    agent: ureq::Agent,
    tokens: TokenSource,
}

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Spreadsheet {
    spreadsheet_id: String,
    #[serde(default)]
    spreadsheet_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SheetList {
    #[serde(default)]
    sheets: Vec<Sheet>,
}

#[derive(Debug, Deserialize)]
struct Sheet {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

/// `base` followed by `segments`, each percent-encoded as a path segment.
pub(crate) fn endpoint(base: &str, segments: &[&str]) -> StoreResult<Url> {
    let mut url = Url::parse(base).map_err(|e| StoreError::Decode(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| StoreError::Decode(format!("{base} cannot be a base URL")))?
        .extend(segments);
    Ok(url)
}

/// Drive search expression for a spreadsheet with exactly this name.
pub(crate) fn name_query(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('\'', "\\'");
    format!("name = '{escaped}' and mimeType = '{SPREADSHEET_MIME}' and trashed = false")
}

/// Turn an HTTP error body into a `StoreError`.
pub(crate) fn classify_error(status: u16, body: &str) -> StoreError {
    if body.contains("storageQuotaExceeded") {
        return StoreError::QuotaExceeded;
    }
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    if status == 401 || (status == 403 && message.contains("insufficient authentication scopes")) {
        return StoreError::Auth(message);
    }
    StoreError::Api { status, message }
}

fn map_ureq_error(err: ureq::Error) -> StoreError {
    match err {
        ureq::Error::Status(code, resp) => {
            let body = resp.into_string().unwrap_or_default();
            classify_error(code, &body)
        }
        ureq::Error::Transport(t) => StoreError::Transport(t.to_string()),
    }
}

/// A missing worksheet shows up as an unparsable range.
fn missing_table(err: StoreError, title: &str) -> StoreError {
    match err {
        StoreError::Api { status: 400, message } if message.contains("Unable to parse range") => {
            StoreError::TableNotFound(title.to_string())
        }
        other => other,
    }
}

fn cell_to_string(v: Value) -> String {
    match v {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn spreadsheet_url(id: &str) -> String {
    format!("{SPREADSHEET_URL}/{id}")
}

impl SheetsStore {
    pub fn new(key: ServiceAccountKey, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            tokens: TokenSource::new(key, agent.clone()),
            agent,
        }
    }

    fn send(&self, method: &str, url: &Url, body: Option<&Value>) -> StoreResult<ureq::Response> {
        tracing::debug!(%method, url = %url, "sheets request");

        let token = self.tokens.token()?;
        let req = self
            .agent
            .request(method, url.as_str())
            .set("Authorization", &format!("Bearer {token}"));

        let result = match body {
            Some(b) => req.send_json(b),
            None => req.call(),
        };
        result.map_err(map_ureq_error)
    }

    fn send_for<T: DeserializeOwned>(
        &self,
        method: &str,
        url: &Url,
        body: Option<&Value>,
    ) -> StoreResult<T> {
        self.send(method, url, body)?
            .into_json()
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

impl TableStore for SheetsStore {
    fn find_collection(&self, name: &str) -> StoreResult<Option<CollectionInfo>> {
        let mut url = endpoint(DRIVE_FILES_API, &[])?;
        url.query_pairs_mut()
            .append_pair("q", &name_query(name))
            .append_pair("fields", "files(id,name)")
            .append_pair("supportsAllDrives", "true")
            .append_pair("includeItemsFromAllDrives", "true");

        let list: FileList = self.send_for("GET", &url, None)?;
        Ok(list.files.into_iter().next().map(|f| CollectionInfo {
            url: spreadsheet_url(&f.id),
            id: f.id,
            title: f.name,
        }))
    }

    fn create_collection(&self, name: &str) -> StoreResult<CollectionInfo> {
        let url = endpoint(SHEETS_API, &[])?;
        let body = json!({ "properties": { "title": name } });
        let created: Spreadsheet = self.send_for("POST", &url, Some(&body))?;

        tracing::info!(id = %created.spreadsheet_id, "created spreadsheet");
        Ok(CollectionInfo {
            url: created
                .spreadsheet_url
                .unwrap_or_else(|| spreadsheet_url(&created.spreadsheet_id)),
            id: created.spreadsheet_id,
            title: name.to_string(),
        })
    }

    fn share(&self, collection: &CollectionInfo, email: &str, role: Role) -> StoreResult<()> {
        let mut url = endpoint(DRIVE_FILES_API, &[&collection.id, "permissions"])?;
        url.query_pairs_mut()
            .append_pair("sendNotificationEmail", "true")
            .append_pair("supportsAllDrives", "true");

        let body = json!({ "type": "user", "role": role.as_str(), "emailAddress": email });
        self.send("POST", &url, Some(&body))?;
        Ok(())
    }

    fn table_titles(&self, collection: &CollectionInfo) -> StoreResult<Vec<String>> {
        let mut url = endpoint(SHEETS_API, &[&collection.id])?;
        url.query_pairs_mut()
            .append_pair("fields", "sheets.properties.title");

        let list: SheetList = self.send_for("GET", &url, None).map_err(|e| match e {
            StoreError::Api { status: 404, .. } => {
                StoreError::CollectionNotFound(collection.title.clone())
            }
            other => other,
        })?;

        Ok(list.sheets.into_iter().map(|s| s.properties.title).collect())
    }

    fn add_table(
        &self,
        collection: &CollectionInfo,
        title: &str,
        rows: usize,
        cols: usize,
    ) -> StoreResult<()> {
        let url = endpoint(SHEETS_API, &[&format!("{}:batchUpdate", collection.id)])?;
        let body = json!({
            "requests": [{
                "addSheet": {
                    "properties": {
                        "title": title,
                        "gridProperties": { "rowCount": rows, "columnCount": cols }
                    }
                }
            }]
        });
        self.send("POST", &url, Some(&body))?;
        Ok(())
    }

    fn write_range(
        &self,
        collection: &CollectionInfo,
        title: &str,
        range: &CellRange,
        values: &[Vec<String>],
    ) -> StoreResult<()> {
        let a1 = range.qualified(title);
        let mut url = endpoint(SHEETS_API, &[&collection.id, "values", &a1])?;
        url.query_pairs_mut().append_pair("valueInputOption", "RAW");

        let body = json!({ "range": a1, "majorDimension": "ROWS", "values": values });
        self.send("PUT", &url, Some(&body))
            .map_err(|e| missing_table(e, title))?;
        Ok(())
    }

    fn read_values(
        &self,
        collection: &CollectionInfo,
        title: &str,
    ) -> StoreResult<Vec<Vec<String>>> {
        let url = endpoint(SHEETS_API, &[&collection.id, "values", &quote_title(title)])?;
        let range: ValueRange = self
            .send_for("GET", &url, None)
            .map_err(|e| missing_table(e, title))?;

        Ok(range
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect())
    }

    fn append_row(
        &self,
        collection: &CollectionInfo,
        title: &str,
        values: &[String],
    ) -> StoreResult<()> {
        let target = format!("{}:append", quote_title(title));
        let mut url = endpoint(SHEETS_API, &[&collection.id, "values", &target])?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", "RAW")
            .append_pair("insertDataOption", "INSERT_ROWS");

        let body = json!({ "majorDimension": "ROWS", "values": [values] });
        self.send("POST", &url, Some(&body))
            .map_err(|e| missing_table(e, title))?;
        Ok(())
    }
}
