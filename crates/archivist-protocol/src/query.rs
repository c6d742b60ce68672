use serde_json::Value;

/// Query string pairs, in the order they are sent.
pub type QueryParams = Vec<(String, String)>;

/// Flatten a JSON filter into dotted query parameters.
///
/// `{"attributes": {"arc_display_type": "door"}}` becomes
/// `attributes.arc_display_type=door`. Arrays repeat the key, nulls are
/// dropped and strings are sent unquoted.
pub fn flatten(filter: &Value) -> QueryParams {
    let mut out = QueryParams::new();
    flatten_into(None, filter, &mut out);
    out
}

fn flatten_into(prefix: Option<&str>, value: &Value, out: &mut QueryParams) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map {
                let key = match prefix {
                    Some(p) => format!("{p}.{key}"),
                    None => key.clone(),
                };
                flatten_into(Some(&key), inner, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                flatten_into(prefix, item, out);
            }
        }
        Value::Null => {}
        scalar => {
            let Some(key) = prefix else { return };
            let rendered = match scalar {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            out.push((key.to_string(), rendered));
        }
    }
}
