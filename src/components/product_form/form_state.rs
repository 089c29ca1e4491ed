//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 草稿数据的持有（仅在表单挂载期间存在）
//! - 数据的重置与回填
//! - 数据到 multipart `FormData` 的转换

use leptos::prelude::*;
use web_sys::{File, FormData};

use crate::models::Product;

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合在组件间传递。
/// 文件句柄是 JS 对象（非 `Send`），使用本地存储信号。
#[derive(Clone, Copy)]
pub struct FormState {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    /// 草稿以字符串保存，与输入框内容一一对应
    pub price: RwSignal<String>,
    pub stock: RwSignal<String>,
    /// 本次选择的图片文件（可选）
    pub image: RwSignal<Option<File>, LocalStorage>,
}

impl FormState {
    /// 创建新的表单状态，所有字段使用默认值
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            stock: RwSignal::new(String::new()),
            image: RwSignal::new_local(None),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.name.set(String::new());
        self.description.set(String::new());
        self.price.set(String::new());
        self.stock.set(String::new());
        self.image.set(None);
    }

    /// 用服务端返回的商品数据回填草稿（编辑模式）
    ///
    /// 不回填文件输入：未选择新图片时提交不携带 image 字段。
    pub fn populate(&self, product: &Product) {
        self.name.set(product.name.clone());
        self.description.set(product.description.clone());
        self.price.set(product.price.to_string());
        self.stock.set(product.stock.to_string());
        self.image.set(None);
    }

    /// 必填字段校验，返回第一条缺失提示
    pub fn validate(&self) -> Result<(), &'static str> {
        match first_missing_field(
            &self.name.get_untracked(),
            &self.description.get_untracked(),
            &self.price.get_untracked(),
            &self.stock.get_untracked(),
        ) {
            Some(message) => Err(message),
            None => Ok(()),
        }
    }

    /// 将草稿转换为 multipart `FormData`
    pub fn to_form_data(&self) -> Result<FormData, String> {
        let form = FormData::new().map_err(|e| format!("{:?}", e))?;
        form.append_with_str("name", &self.name.get_untracked())
            .map_err(|e| format!("{:?}", e))?;
        form.append_with_str("description", &self.description.get_untracked())
            .map_err(|e| format!("{:?}", e))?;
        form.append_with_str("price", &self.price.get_untracked())
            .map_err(|e| format!("{:?}", e))?;
        form.append_with_str("stock", &self.stock.get_untracked())
            .map_err(|e| format!("{:?}", e))?;
        if let Some(file) = self.image.get_untracked() {
            form.append_with_blob_and_filename("image", &file, &file.name())
                .map_err(|e| format!("{:?}", e))?;
        }
        Ok(form)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// 必填校验的纯函数部分，便于测试
pub(crate) fn first_missing_field(
    name: &str,
    description: &str,
    price: &str,
    stock: &str,
) -> Option<&'static str> {
    if name.trim().is_empty() {
        Some("Product name is required")
    } else if description.trim().is_empty() {
        Some("Description is required")
    } else if price.trim().is_empty() {
        Some("Price is required")
    } else if stock.trim().is_empty() {
        Some("Stock is required")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::first_missing_field;

    #[test]
    fn complete_draft_passes() {
        assert_eq!(first_missing_field("Widget", "A widget", "19.5", "4"), None);
    }

    #[test]
    fn reports_first_missing_field_in_form_order() {
        assert_eq!(
            first_missing_field("", "", "", ""),
            Some("Product name is required")
        );
        assert_eq!(
            first_missing_field("Widget", "", "", ""),
            Some("Description is required")
        );
        assert_eq!(
            first_missing_field("Widget", "A widget", "", ""),
            Some("Price is required")
        );
        assert_eq!(
            first_missing_field("Widget", "A widget", "19.5", ""),
            Some("Stock is required")
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        assert_eq!(
            first_missing_field("  ", "d", "1", "1"),
            Some("Product name is required")
        );
    }
}
