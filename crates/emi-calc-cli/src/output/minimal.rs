use serde_json::{Map, Value};

/// Headline fields, most important first.
const PRIORITY_KEYS: [&str; 4] = [
    "monthly_installment",
    "monthly_installment_savings",
    "total_interest",
    "total_payment",
];

/// Print just the key answer value from the output.
///
/// Looks for a headline field on the result, then on its `summary`, then
/// falls back to the first field.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        let summary = map.get("summary").and_then(Value::as_object);
        let found = headline(map).or_else(|| summary.and_then(headline));
        if let Some(val) = found {
            println!("{}", format_minimal(val));
            return;
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn headline(map: &Map<String, Value>) -> Option<&Value> {
    PRIORITY_KEYS
        .iter()
        .filter_map(|key| map.get(*key))
        .find(|val| !val.is_null())
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
