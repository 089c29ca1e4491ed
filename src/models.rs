//! 领域模型 (Domain Models)
//!
//! 客户端持有的商品数据是瞬态的非权威副本，
//! 每次导航重新拉取，不做本地缓存。

use serde::{Deserialize, Serialize};

use crate::serde_helper;

/// 商品记录
///
/// `price` 与 `stock` 宽容接受数字或数字字符串
/// （后端 DecimalField 序列化为字符串）。
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "serde_helper::f64_from_number_or_string")]
    pub price: f64,
    #[serde(deserialize_with = "serde_helper::u32_from_number_or_string")]
    pub stock: u32,
    /// 相对于后端源的图片路径，可为空
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// 格式化后的价格，始终两位小数
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// 将价格渲染为 `$xx.xx`（始终恰好两位小数）
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// 从本地列表移除指定 id 的商品（删除成功后调用，不重新拉取）
pub fn remove_product(products: &mut Vec<Product>, id: u32) {
    products.retain(|p| p.id != id);
}

// =========================================================
// 认证请求/响应模型
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// 登录成功响应体；`is_staff` 决定是否放行进入后台
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub is_staff: bool,
}

/// 后端错误响应体（DRF 风格 `{"detail": "..."}`）
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests;
