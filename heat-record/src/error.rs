use std::fmt;

/// Errors that make a data load fail as a whole.
///
/// Row-level problems (bad dates, non-numeric temperatures) are not errors;
/// they surface as `None` fields on [`crate::record::DailyRecord`].
#[derive(Debug)]
pub enum LoadError {
    /// The source could not be read.
    Io(std::io::Error),
    /// The table could not be framed as delimited records.
    Csv(csv::Error),
    /// The header row does not name a required column.
    MissingColumn(String),
    /// The source string names something this build cannot load.
    UnsupportedSource(String),
    /// The HTTP request itself failed.
    #[cfg(feature = "api")]
    Http(reqwest::Error),
    /// The server answered with a non-success status.
    #[cfg(feature = "api")]
    HttpStatus(reqwest::StatusCode),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read data source: {}", e),
            LoadError::Csv(e) => write!(f, "malformed table: {}", e),
            LoadError::MissingColumn(name) => {
                write!(f, "header row has no column named `{}`", name)
            }
            LoadError::UnsupportedSource(source) => {
                write!(f, "unsupported data source: {}", source)
            }
            #[cfg(feature = "api")]
            LoadError::Http(e) => write!(f, "request failed: {}", e),
            #[cfg(feature = "api")]
            LoadError::HttpStatus(status) => write!(f, "bad response status: {}", status),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Csv(e) => Some(e),
            #[cfg(feature = "api")]
            LoadError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Csv(e)
    }
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        LoadError::Http(e)
    }
}

#[cfg(test)]
mod tests {
    use super::LoadError;
    use std::error::Error;

    #[test]
    fn missing_column_message_names_the_column() {
        let e = LoadError::MissingColumn("max_temperature".to_string());
        assert_eq!(
            e.to_string(),
            "header row has no column named `max_temperature`"
        );
        assert!(e.source().is_none());
    }

    #[test]
    fn io_error_keeps_its_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let e: LoadError = io.into();
        assert!(e.to_string().contains("no such file"));
        assert!(e.source().is_some());
    }
}
