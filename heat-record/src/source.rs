//! Where the daily table comes from: a local file (optionally gzip
//! compressed) or, with the `api` feature, an HTTP(S) URL.

use crate::{
    error::LoadError,
    record::{parse_records, ParseOptions, ParsedRecords},
};
use flate2::read::GzDecoder;
use std::{
    fmt,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

#[cfg(feature = "api")]
use log::info;
#[cfg(feature = "api")]
use reqwest::Client;
#[cfg(feature = "api")]
use std::time::Duration;

/// Request timeout for remote tables.
#[cfg(feature = "api")]
const HTTP_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum DataSource {
    Path(PathBuf),
    Url(String),
}

impl DataSource {
    /// Classify a command-line input string.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::Path(PathBuf::from(trimmed))
        }
    }

    /// Load and parse the table. Any failure here is terminal for the view.
    pub async fn load(&self, options: &ParseOptions) -> Result<ParsedRecords, LoadError> {
        match self {
            DataSource::Path(path) => load_path(path, options),
            DataSource::Url(url) => load_url(url, options).await,
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Path(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => f.write_str(url),
        }
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Read a local table, decompressing it first if it ends in `.gz`.
pub fn load_path(path: &Path, options: &ParseOptions) -> Result<ParsedRecords, LoadError> {
    let file = BufReader::new(File::open(path)?);
    if is_gzip(path) {
        parse_records(GzDecoder::new(file), options)
    } else {
        parse_records(file, options)
    }
}

#[cfg(feature = "api")]
async fn load_url(url: &str, options: &ParseOptions) -> Result<ParsedRecords, LoadError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;

    info!("Fetching {}", url);
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(LoadError::HttpStatus(response.status()));
    }
    let body = response.bytes().await?;
    info!("Fetched {} bytes from {}", body.len(), url);

    if url.ends_with(".gz") {
        parse_records(GzDecoder::new(body.as_ref()), options)
    } else {
        parse_records(body.as_ref(), options)
    }
}

#[cfg(not(feature = "api"))]
async fn load_url(url: &str, _options: &ParseOptions) -> Result<ParsedRecords, LoadError> {
    Err(LoadError::UnsupportedSource(format!(
        "{} (built without the `api` feature)",
        url
    )))
}
