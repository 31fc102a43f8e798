//! Conversion between [`FieldValue`] and the Firestore REST value encoding.
//!
//! Every Firestore value is a single-key JSON object naming its type, e.g.
//! `{"stringValue": "x"}` or `{"integerValue": "42"}` (64-bit integers travel
//! as strings).

use serde_json::{json, Map, Value};

use crate::document::{Document, FieldValue, Fields};
use crate::error::StoreError;

/// Encode a field map as the `fields` object of a Firestore document.
pub fn encode_fields(fields: &Fields) -> Value {
    let map: Map<String, Value> = fields
        .iter()
        .map(|(k, v)| (k.clone(), encode_value(v)))
        .collect();
    Value::Object(map)
}

pub fn encode_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Null => json!({ "nullValue": null }),
        FieldValue::Boolean(b) => json!({ "booleanValue": b }),
        FieldValue::Integer(i) => json!({ "integerValue": i.to_string() }),
        FieldValue::Double(d) => json!({ "doubleValue": d }),
        FieldValue::String(s) => json!({ "stringValue": s }),
        FieldValue::Timestamp(ts) => json!({
            "timestampValue": ts.to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
        }),
        FieldValue::Array(items) => json!({
            "arrayValue": { "values": items.iter().map(encode_value).collect::<Vec<_>>() }
        }),
        FieldValue::Map(fields) => json!({ "mapValue": { "fields": encode_fields(fields) } }),
    }
}

/// Decode the `fields` object of a Firestore document. A missing object
/// decodes as an empty map.
pub fn decode_fields(fields: Option<&Value>) -> Result<Fields, StoreError> {
    let Some(fields) = fields else {
        return Ok(Fields::new());
    };
    let obj = fields
        .as_object()
        .ok_or_else(|| StoreError::Decode("document fields is not an object".into()))?;
    obj.iter()
        .map(|(k, v)| Ok((k.clone(), decode_value(v)?)))
        .collect()
}

pub fn decode_value(value: &Value) -> Result<FieldValue, StoreError> {
    let obj = value
        .as_object()
        .ok_or_else(|| StoreError::Decode(format!("expected value object, got {value}")))?;
    let (kind, inner) = obj
        .iter()
        .next()
        .ok_or_else(|| StoreError::Decode("empty value object".into()))?;

    let decoded = match kind.as_str() {
        "nullValue" => FieldValue::Null,
        "booleanValue" => FieldValue::Boolean(inner.as_bool().unwrap_or_default()),
        "integerValue" => {
            let parsed = match inner {
                Value::String(s) => s.parse::<i64>().ok(),
                other => other.as_i64(),
            };
            FieldValue::Integer(
                parsed.ok_or_else(|| StoreError::Decode(format!("bad integerValue: {inner}")))?,
            )
        }
        "doubleValue" => {
            // The service sends "NaN"/"Infinity" as strings.
            let parsed = match inner {
                Value::String(s) => s.parse::<f64>().ok(),
                other => other.as_f64(),
            };
            FieldValue::Double(
                parsed.ok_or_else(|| StoreError::Decode(format!("bad doubleValue: {inner}")))?,
            )
        }
        "timestampValue" => {
            let raw = inner.as_str().unwrap_or_default();
            let ts = chrono::DateTime::parse_from_rfc3339(raw)
                .map_err(|e| StoreError::Decode(format!("bad timestampValue {raw}: {e}")))?;
            FieldValue::Timestamp(ts.with_timezone(&chrono::Utc))
        }
        "stringValue" | "referenceValue" | "bytesValue" => {
            FieldValue::String(inner.as_str().unwrap_or_default().to_string())
        }
        "arrayValue" => {
            let items = match inner.get("values").and_then(Value::as_array) {
                Some(values) => values.iter().map(decode_value).collect::<Result<_, _>>()?,
                None => Vec::new(),
            };
            FieldValue::Array(items)
        }
        "mapValue" => FieldValue::Map(decode_fields(inner.get("fields"))?),
        "geoPointValue" => {
            let mut point = Fields::new();
            for axis in ["latitude", "longitude"] {
                let v = inner.get(axis).and_then(Value::as_f64).unwrap_or_default();
                point.insert(axis.to_string(), FieldValue::Double(v));
            }
            FieldValue::Map(point)
        }
        other => return Err(StoreError::Decode(format!("unknown value type {other}"))),
    };
    Ok(decoded)
}

/// Decode a Firestore document resource. The id is the last segment of the
/// resource `name`.
pub fn decode_document(doc: &Value) -> Result<Document, StoreError> {
    let name = doc
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| StoreError::Decode("document without name".into()))?;
    let id = name.rsplit('/').next().unwrap_or(name).to_string();
    Ok(Document {
        id,
        fields: decode_fields(doc.get("fields"))?,
    })
}
