//! Serde 辅助模块
//!
//! 后端（Django REST Framework）对 DecimalField 会序列化为字符串
//! （如 `"19.50"`），而部分端点返回原生数字。这里提供宽容的
//! 反序列化器，保证数值字段在客户端始终是数字。

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    String(String),
}

/// 将 JSON 数字或数字字符串反序列化为 `f64`
pub fn f64_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::<f64>::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid numeric string: {:?}", s))),
    }
}

/// 将 JSON 数字或数字字符串反序列化为 `u32`
pub fn u32_from_number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::<u32>::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|_| de::Error::custom(format!("invalid integer string: {:?}", s))),
    }
}
