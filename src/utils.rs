#[macro_export]
macro_rules! api_funcs {
    ( $( ( $func_name:ident $(, $arg:ident : $arg_ty:ty )* ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                async fn $func_name(
                    store: web::Data<Store>,
                    $( $arg: $arg_ty ),*
                ) -> Result<HttpResponse, ApiError> {
                    let response = [<$func_name _impl>](&store $(, $arg )*);
                    if let Err(err) = &response {
                        log::warn!("{} rejected: {}", stringify!($func_name), err);
                    }
                    response
                }
            }
        )+
    };
}

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use serde::Serializer;
use serde_json::Value;

pub fn format_time_str(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn serialize_time_str<S: Serializer>(
    time: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_time_str(time))
}

/// "2024-01-15" -> "Monday, January 15, 2024". Unparseable input is returned as is.
pub fn format_date_display(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(date) => date.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// "14:30" -> "2:30 PM". Unparseable input is returned as is.
pub fn format_time_display(time: &str) -> String {
    match NaiveTime::parse_from_str(time, "%H:%M") {
        Ok(time) => time.format("%-I:%M %p").to_string(),
        Err(_) => time.to_string(),
    }
}

/// Leading decimal digits of `s`, the way browsers read "12abc" or "1.5" as an id.
pub fn parse_path_id<S: AsRef<str>>(s: S) -> Option<u64> {
    let s = s.as_ref().trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

/// Whether a JSON value counts as "given" for a required field.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Ids arrive either as numbers or as numeric strings. Fractions are truncated.
pub fn parse_id_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        }),
        Value::String(s) => parse_path_id(s),
        _ => None,
    }
}
