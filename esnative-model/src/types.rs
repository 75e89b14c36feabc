//! Enum constants and small value types of the native API

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Serialization format of a request body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentType {
    #[default]
    Json,
    Smile,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => "json",
            ContentType::Smile => "smile",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How document versions are compared on write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VersionType {
    #[default]
    Internal,
    External,
}

impl VersionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionType::Internal => "internal",
            VersionType::External => "external",
        }
    }
}

impl fmt::Display for VersionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Index operation type. Parsing is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpType {
    /// Create or replace
    #[default]
    Index,
    /// Fail if the document already exists
    Create,
}

impl FromStr for OpType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "index" => Ok(OpType::Index),
            "create" => Ok(OpType::Create),
            other => Err(Error::InvalidOpType(other.to_string())),
        }
    }
}

/// Search execution strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchType {
    DfsQueryThenFetch,
    DfsQueryAndFetch,
    #[default]
    QueryThenFetch,
    QueryAndFetch,
    Scan,
    Count,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::DfsQueryThenFetch => "dfs_query_then_fetch",
            SearchType::DfsQueryAndFetch => "dfs_query_and_fetch",
            SearchType::QueryThenFetch => "query_then_fetch",
            SearchType::QueryAndFetch => "query_and_fetch",
            SearchType::Scan => "scan",
            SearchType::Count => "count",
        }
    }
}

impl FromStr for SearchType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfs_query_then_fetch" | "dfsQueryThenFetch" => Ok(SearchType::DfsQueryThenFetch),
            "dfs_query_and_fetch" | "dfsQueryAndFetch" => Ok(SearchType::DfsQueryAndFetch),
            "query_then_fetch" | "queryThenFetch" => Ok(SearchType::QueryThenFetch),
            "query_and_fetch" | "queryAndFetch" => Ok(SearchType::QueryAndFetch),
            "scan" => Ok(SearchType::Scan),
            "count" => Ok(SearchType::Count),
            other => Err(Error::InvalidSearchType(other.to_string())),
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A duration expressed the way the native API writes it (`"30s"`, `"1m"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeValue {
    millis: u64,
}

impl TimeValue {
    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    pub const fn from_secs(secs: u64) -> Self {
        Self {
            millis: secs * 1000,
        }
    }

    pub fn millis(&self) -> u64 {
        self.millis
    }
}

impl FromStr for TimeValue {
    type Err = Error;

    /// Accepts `ms`, `s`, `m`, `h`, `d` and `w` suffixes, or a bare number
    /// of milliseconds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();
        let invalid = || Error::InvalidTimeValue(s.to_string());

        let (digits, factor) = if let Some(n) = trimmed.strip_suffix("ms") {
            (n, 1)
        } else if let Some(n) = trimmed.strip_suffix('s') {
            (n, 1_000)
        } else if let Some(n) = trimmed.strip_suffix('m') {
            (n, 60_000)
        } else if let Some(n) = trimmed.strip_suffix('h') {
            (n, 3_600_000)
        } else if let Some(n) = trimmed.strip_suffix('d') {
            (n, 86_400_000)
        } else if let Some(n) = trimmed.strip_suffix('w') {
            (n, 7 * 86_400_000)
        } else {
            (trimmed.as_str(), 1)
        };

        let amount: u64 = digits.trim().parse().map_err(|_| invalid())?;
        let millis = amount.checked_mul(factor).ok_or_else(invalid)?;
        Ok(Self { millis })
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const UNITS: [(u64, &str); 4] = [
            (86_400_000, "d"),
            (3_600_000, "h"),
            (60_000, "m"),
            (1_000, "s"),
        ];
        for (size, suffix) in UNITS {
            if self.millis >= size && self.millis % size == 0 {
                return write!(f, "{}{}", self.millis / size, suffix);
            }
        }
        write!(f, "{}ms", self.millis)
    }
}
