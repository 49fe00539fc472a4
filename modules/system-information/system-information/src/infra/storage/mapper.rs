//! Conversion between JSON setting values and their persisted text form.

use sea_orm::DbErr;
use serde_json::Value;

pub fn encode(value: &Value) -> Result<String, DbErr> {
    serde_json::to_string(value).map_err(|e| DbErr::Custom(format!("encode setting value: {e}")))
}

pub fn decode(raw: &str) -> Result<Value, DbErr> {
    serde_json::from_str(raw).map_err(|e| DbErr::Custom(format!("decode setting value: {e}")))
}
