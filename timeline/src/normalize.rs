use crumbline_protocol::BreadcrumbLevel;
use crumbline_protocol::BreadcrumbType;
use crumbline_protocol::Crumb;
use crumbline_protocol::ExceptionValue;
use crumbline_protocol::ParentEvent;
use crumbline_protocol::RawCrumb;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde_json::Value;

/// Matches `path/to/file.c:123`-style module locations; capture 1 is the
/// file name.
static MODULE_LOCATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.*/(.*?):\d+")
        .unwrap_or_else(|err| unreachable!("module location pattern is valid: {err}"))
});

/// Converts the raw records (plus at most one virtual crumb derived from
/// the parent event) into the normalized, newest-first display sequence.
/// Pure: the same inputs always produce the same output.
pub fn normalize(raw_crumbs: &[RawCrumb], event: &ParentEvent) -> Vec<Crumb> {
    let mut raw = raw_crumbs.to_vec();
    if let Some(virtual_crumb) = virtual_crumb(event) {
        raw.push(virtual_crumb);
    }
    let mut crumbs: Vec<Crumb> = raw
        .iter()
        .enumerate()
        .map(|(id, record)| transform(id, record))
        .collect();
    crumbs.reverse();
    crumbs
}

fn transform(id: usize, raw: &RawCrumb) -> Crumb {
    let kind = convert_type(raw);
    Crumb {
        id,
        kind,
        level: BreadcrumbLevel::from_raw(raw.level.as_deref()),
        description: kind.description(),
        color: kind.color(),
        category: raw.category.clone(),
        message: raw.message.clone(),
        timestamp: raw.timestamp.clone(),
        data: raw.data.clone(),
    }
}

/// Coerces the raw `type` string into the closed enum. `exception` records
/// display as errors, and `default`-typed records are refined by their
/// category prefix, which is how the SDKs tag console, navigation, and UI
/// activity.
fn convert_type(raw: &RawCrumb) -> BreadcrumbType {
    let kind = raw
        .kind
        .as_deref()
        .map_or(BreadcrumbType::Default, BreadcrumbType::from_raw);
    if kind == BreadcrumbType::Exception {
        return BreadcrumbType::Error;
    }
    if kind != BreadcrumbType::Default {
        return kind;
    }
    let Some(category) = raw.category.as_deref() else {
        return kind;
    };
    let mut parts = category.splitn(2, '.');
    match (parts.next(), parts.next()) {
        (Some("ui"), _) => BreadcrumbType::Ui,
        (Some("console"), _) => BreadcrumbType::Debug,
        (Some("navigation"), _) => BreadcrumbType::Navigation,
        (Some("crumbline"), Some("transaction" | "event")) => BreadcrumbType::Transaction,
        _ => BreadcrumbType::Default,
    }
}

/// Synthesizes the breadcrumb representing the event itself: the first
/// exception value when one exists, otherwise the event's log message.
/// Returns `None` when the event carries neither.
fn virtual_crumb(event: &ParentEvent) -> Option<RawCrumb> {
    if let Some(exception) = event.exception_values.first() {
        return Some(exception_crumb(event, exception));
    }
    let message = event.message.as_deref().filter(|text| !text.is_empty())?;
    Some(RawCrumb {
        kind: Some(BreadcrumbType::Message.to_string()),
        category: Some("message".to_string()),
        message: Some(message.to_string()),
        level: event.level_tag().map(str::to_string),
        timestamp: event.date_created.clone(),
        data: None,
    })
}

fn exception_crumb(event: &ParentEvent, exception: &ExceptionValue) -> RawCrumb {
    let mut data = serde_json::Map::new();
    if let Some(kind) = &exception.kind {
        data.insert("type".to_string(), Value::String(kind.clone()));
    }
    if let Some(value) = &exception.value {
        data.insert("value".to_string(), Value::String(value.clone()));
    }
    RawCrumb {
        kind: Some(BreadcrumbType::Error.to_string()),
        category: Some(
            module_category(exception.module.as_deref())
                .unwrap_or_else(|| "exception".to_string()),
        ),
        message: None,
        level: Some(BreadcrumbLevel::Error.to_string()),
        timestamp: event.date_created.clone(),
        data: Some(Value::Object(data)),
    }
}

/// Derives a category from the exception's module: the file name for
/// `path/file.c:123`-style locations, otherwise the first dotted segment.
fn module_category(module: Option<&str>) -> Option<String> {
    let module = module?;
    if module.is_empty() {
        return None;
    }
    if let Some(captures) = MODULE_LOCATION.captures(module) {
        return captures.get(1).map(|found| found.as_str().to_string());
    }
    module.split('.').next().map(str::to_string)
}
