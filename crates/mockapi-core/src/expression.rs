//! JMESPath expression evaluation over JSON values.

use jmespath::{Expression, Variable};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid JMESPath expression `{expression}`: {message}")]
pub struct ExpressionError {
    pub expression: String,
    pub message: String,
}

/// Compile a JMESPath expression.
pub fn compile(expression: &str) -> Result<Expression<'static>, ExpressionError> {
    jmespath::compile(expression).map_err(|e| ExpressionError {
        expression: expression.to_string(),
        message: e.to_string(),
    })
}

fn to_value(variable: &Variable) -> Option<Value> {
    Some(match variable {
        Variable::Null => Value::Null,
        Variable::Bool(b) => Value::Bool(*b),
        Variable::Number(n) => Value::Number(n.clone()),
        Variable::String(s) => Value::String(s.clone()),
        Variable::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| to_value(item))
                .collect::<Option<Vec<_>>>()?,
        ),
        Variable::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(k, v)| to_value(v).map(|v| (k.clone(), v)))
                .collect::<Option<Map<_, _>>>()?,
        ),
        Variable::Expref(_) => return None,
    })
}

/// JMESPath truthiness: false, null, zero, and empty values are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Evaluate a compiled expression. Runtime errors yield `None`.
pub fn evaluate(expression: &Expression<'_>, data: &Value) -> Option<Value> {
    let result = expression.search(data).ok()?;
    to_value(&result)
}

/// Whether a compiled expression yields a truthy result for `data`.
pub fn matches(expression: &Expression<'_>, data: &Value) -> bool {
    evaluate(expression, data).is_some_and(|v| is_truthy(&v))
}
