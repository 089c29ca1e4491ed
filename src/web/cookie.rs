//! Cookie 封装模块
//!
//! 使用 `web_sys::HtmlDocument` 读取 `document.cookie`，
//! 提供简洁的 Cookie 读取接口（本客户端只读 Cookie，不写入，
//! 会话 Cookie 全部由后端通过 Set-Cookie 设置）。

use wasm_bindgen::JsCast;

/// 浏览器 Cookie 读取封装
pub struct CookieJar;

impl CookieJar {
    /// 获取原始的 `document.cookie` 字符串
    fn raw() -> Option<String> {
        let document = web_sys::window()?.document()?;
        let html_document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
        html_document.cookie().ok()
    }

    /// 按名称获取 Cookie 值
    ///
    /// # 返回
    /// - `Some(String)` 如果 Cookie 存在且值非空
    /// - `None` 如果 Cookie 不存在、值为空或发生错误
    pub fn get(name: &str) -> Option<String> {
        find_in(&Self::raw()?, name)
    }

    /// 检查指定名称的 Cookie 是否存在（值非空）
    pub fn has(name: &str) -> bool {
        Self::get(name).is_some()
    }
}

/// 在 Cookie 字符串中查找指定名称的值
///
/// 纯函数，与 DOM 解耦以便测试。空值视为不存在，
/// 与原始实现的 `[^;]+` 匹配语义一致。
pub(crate) fn find_in(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::find_in;

    #[test]
    fn finds_cookie_by_name() {
        let raw = "csrftoken=abc123; authToken=tok; theme=dark";
        assert_eq!(find_in(raw, "csrftoken"), Some("abc123".to_string()));
        assert_eq!(find_in(raw, "authToken"), Some("tok".to_string()));
    }

    #[test]
    fn missing_cookie_returns_none() {
        assert_eq!(find_in("theme=dark", "authToken"), None);
        assert_eq!(find_in("", "authToken"), None);
    }

    #[test]
    fn empty_value_counts_as_missing() {
        assert_eq!(find_in("authToken=; theme=dark", "authToken"), None);
    }

    #[test]
    fn name_must_match_exactly() {
        // "authToken2" 不应匹配 "authToken"
        assert_eq!(find_in("authToken2=x", "authToken"), None);
        // 前缀相同的键不互相污染
        assert_eq!(
            find_in("authToken2=x; authToken=y", "authToken"),
            Some("y".to_string())
        );
    }

    #[test]
    fn handles_whitespace_between_pairs() {
        assert_eq!(
            find_in("a=1;  authToken=tok ;b=2", "authToken"),
            Some("tok".to_string())
        );
    }
}
