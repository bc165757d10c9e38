use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;
use std::fmt;

/// A diagnostic record attached to an error report, as received from the
/// backend. Everything is optional on the wire; coercion into the closed
/// enums happens during normalization.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RawCrumb {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
    pub message: Option<String>,
    pub level: Option<String>,
    pub timestamp: Option<String>,
    pub data: Option<Value>,
}

/// Known breadcrumb kinds. Anything else coming off the wire lands in
/// `Default`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BreadcrumbType {
    Debug,
    Error,
    Exception,
    Http,
    Info,
    Init,
    Message,
    Navigation,
    Query,
    Session,
    System,
    Transaction,
    Ui,
    User,
    Warning,
    #[serde(other)]
    Default,
}

impl Default for BreadcrumbType {
    fn default() -> Self {
        Self::Default
    }
}

impl BreadcrumbType {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "debug" => Self::Debug,
            "error" => Self::Error,
            "exception" => Self::Exception,
            "http" => Self::Http,
            "info" => Self::Info,
            "init" => Self::Init,
            "message" => Self::Message,
            "navigation" => Self::Navigation,
            "query" => Self::Query,
            "session" => Self::Session,
            "system" => Self::System,
            "transaction" => Self::Transaction,
            "ui" => Self::Ui,
            "user" => Self::User,
            "warning" => Self::Warning,
            _ => Self::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Default => "default",
            Self::Error => "error",
            Self::Exception => "exception",
            Self::Http => "http",
            Self::Info => "info",
            Self::Init => "init",
            Self::Message => "message",
            Self::Navigation => "navigation",
            Self::Query => "query",
            Self::Session => "session",
            Self::System => "system",
            Self::Transaction => "transaction",
            Self::Ui => "ui",
            Self::User => "user",
            Self::Warning => "warning",
        }
    }

    /// Human label shown for this kind in the timeline and the type facet.
    pub fn description(self) -> &'static str {
        match self {
            Self::User | Self::Ui => "User Action",
            Self::Navigation => "Navigation",
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Error => "Error",
            Self::Http => "HTTP request",
            Self::Warning => "Warning",
            Self::Query => "Query",
            Self::System => "System",
            Self::Session => "Session",
            Self::Transaction => "Transaction",
            Self::Default | Self::Exception | Self::Init | Self::Message => "Default",
        }
    }

    /// Theme token used when rendering this kind. Kinds in the generic
    /// bucket have no dedicated color.
    pub fn color(self) -> Option<&'static str> {
        match self {
            Self::User | Self::Ui | Self::Debug => Some("purple300"),
            Self::Navigation | Self::Http => Some("green300"),
            Self::Info | Self::Query => Some("blue300"),
            Self::Error => Some("red300"),
            Self::Warning => Some("yellow300"),
            Self::System => Some("pink200"),
            Self::Session | Self::Transaction => Some("pink300"),
            Self::Default | Self::Exception | Self::Init | Self::Message => None,
        }
    }
}

impl fmt::Display for BreadcrumbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity attached to a breadcrumb. A record with no recognizable level
/// keeps its own `Undefined` bucket so it stays filterable.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BreadcrumbLevel {
    Fatal,
    Error,
    Warning,
    Info,
    Debug,
    #[serde(other)]
    Undefined,
}

impl Default for BreadcrumbLevel {
    fn default() -> Self {
        Self::Undefined
    }
}

impl BreadcrumbLevel {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("fatal") => Self::Fatal,
            Some("error") => Self::Error,
            Some("warning") => Self::Warning,
            Some("info") => Self::Info,
            Some("debug") => Self::Debug,
            _ => Self::Undefined,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Undefined => "undefined",
        }
    }
}

impl fmt::Display for BreadcrumbLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-ready breadcrumb derived from a [`RawCrumb`] (or synthesized
/// from the parent event). `id` is the record's index in the pre-reversal
/// sequence and stays stable across filtering.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Crumb {
    pub id: usize,
    #[serde(rename = "type")]
    pub kind: BreadcrumbType,
    pub level: BreadcrumbLevel,
    pub description: &'static str,
    pub color: Option<&'static str>,
    pub category: Option<String>,
    pub message: Option<String>,
    pub timestamp: Option<String>,
    pub data: Option<Value>,
}
