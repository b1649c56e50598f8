//! Presence checks for create/update payloads.

use crate::error::AppError;
use crate::model::NewCadastro;
use serde_json::{Map, Number, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// Parse a raw request body. Empty or non-object bodies count as an object without fields;
    /// only bytes that are not JSON at all are rejected here.
    pub fn parse_body(bytes: &[u8]) -> Result<Map<String, Value>, AppError> {
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Map::new());
        }
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|_| AppError::BadRequest(crate::error::INVALID_BODY_MESSAGE.to_string()))?;
        Ok(match value {
            Value::Object(m) => m,
            _ => Map::new(),
        })
    }

    /// `nome`, `email` and `celular` must all be present and truthy.
    pub fn validate(body: &Map<String, Value>) -> Result<NewCadastro, AppError> {
        let field = |name: &str| body.get(name).and_then(field_text);
        match (field("nome"), field("email"), field("celular")) {
            (Some(nome), Some(email), Some(celular)) => Ok(NewCadastro { nome, email, celular }),
            _ => Err(AppError::required_fields()),
        }
    }
}

/// Text stored for a field, or None when the value is falsy.
fn field_text(v: &Value) -> Option<String> {
    match v {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".into()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(number_text(n)),
        Value::Array(_) | Value::Object(_) => Some(v.to_string()),
    }
}

/// Number rendered the way a JavaScript client would print it: `11999999999.0` becomes
/// `11999999999`, exponents only outside `[1e-6, 1e21)`.
fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    let f = n.as_f64().unwrap_or_default();
    let abs = f.abs();
    if abs >= 1e21 || (abs != 0.0 && abs < 1e-6) {
        let text = format!("{:e}", f);
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        }
    } else {
        f.to_string()
    }
}
