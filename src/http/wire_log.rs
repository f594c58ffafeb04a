//! Wire-level debugging via the `LOUD_WIRE` environment variable.
//!
//! When `LOUD_WIRE` is set to any value, every request and response that
//! passes through the client is printed to stderr: method, URL, headers
//! (bearer token redacted) and pretty, colored JSON bodies.
//!
//! ```bash
//! LOUD_WIRE=1 cargo test --test albums_tests
//! ```
//!
//! - Green `>>>` for outgoing requests
//! - Red `<<<` for incoming responses
//!
//! Market lists are collapsed to a count; they're hundreds of country codes
//! long on almost every catalog object.

use super::common::AUTHORIZATION_HEADER;
use super::{Request, Response};
use colored::Colorize;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Request ID counter for correlating requests with responses
static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(1);

static ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if LOUD_WIRE debugging is enabled.
///
/// Cached after the first call; set `LOUD_WIRE` before the first request.
#[must_use]
pub fn is_enabled() -> bool {
    *ENABLED.get_or_init(|| std::env::var("LOUD_WIRE").is_ok())
}

#[must_use]
pub fn next_request_id() -> usize {
    REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Array fields replaced by their length.
const COLLAPSE_FIELDS: &[&str] = &["available_markets"];

/// Maximum bytes of a non-JSON body to print.
const RAW_BODY_LIMIT: usize = 1000;

fn collapse_long_fields(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                if COLLAPSE_FIELDS.contains(&key.as_str())
                    && let serde_json::Value::Array(items) = val
                {
                    *val = serde_json::Value::String(format!("[{} markets]", items.len()));
                } else {
                    collapse_long_fields(val);
                }
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                collapse_long_fields(item);
            }
        }
        _ => {}
    }
}

fn redact(name: &str, value: &str) -> String {
    if name.eq_ignore_ascii_case(AUTHORIZATION_HEADER) {
        match value.split_once(' ') {
            Some((scheme, _)) => format!("{scheme} <redacted>"),
            None => "<redacted>".to_string(),
        }
    } else {
        value.to_string()
    }
}

fn prefix(request_id: usize) -> String {
    let ts = chrono::Utc::now()
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
        .dimmed();
    format!(
        "{} {} {}",
        "[LOUD_WIRE]".bold(),
        ts,
        format!("[REQ#{}]", request_id).cyan()
    )
}

fn print_body(prefix: &str, label: &str, body: &[u8]) {
    if body.is_empty() {
        return;
    }
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(mut parsed) => {
            collapse_long_fields(&mut parsed);
            eprintln!("{prefix} {label}:");
            let rendered = colored_json::to_colored_json_auto(&parsed)
                .ok()
                .or_else(|| serde_json::to_string_pretty(&parsed).ok());
            if let Some(rendered) = rendered {
                for line in rendered.lines() {
                    eprintln!("{prefix} {line}");
                }
            }
        }
        Err(_) => {
            let text = String::from_utf8_lossy(body);
            let truncated = super::error_helpers::truncate_for_context(&text, RAW_BODY_LIMIT);
            eprintln!("{prefix} {label}: {truncated}");
        }
    }
}

/// Log an outgoing HTTP request.
pub fn log_request(request_id: usize, request: &Request) {
    if !is_enabled() {
        return;
    }

    let prefix = prefix(request_id);
    let direction = ">>>".green().bold();

    eprintln!("{prefix} {direction} {} {}", request.method(), request.url());
    for (name, values) in request.headers() {
        for value in values {
            eprintln!("{prefix} {name}: {}", redact(name, value));
        }
    }
    if let Some(body) = request.body() {
        print_body(&prefix, &"Body".green().to_string(), body);
    }
}

/// Log an incoming HTTP response.
pub fn log_response(request_id: usize, response: &Response) {
    if !is_enabled() {
        return;
    }

    let prefix = prefix(request_id);
    let direction = "<<<".red().bold();
    let status_text = format!("{} {}", response.status, response.reason);
    let status_text = if response.is_success() {
        status_text.green()
    } else {
        status_text.red()
    };

    eprintln!("{prefix} {direction} {status_text}");
    print_body(&prefix, &"Response".red().to_string(), &response.body);
}
