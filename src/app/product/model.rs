//! 产品列表的查询参数与分页键

use serde::Deserialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// `GET /api/products` 的原始查询参数
///
/// 全部按字符串接收，解析失败时回退到默认值而不是拒绝请求。
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub offset: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// 缓存键：一页数据由 offset 和 limit 唯一确定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageKey {
    pub offset: i64,
    pub limit: i64,
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.offset, self.limit)
    }
}

/// 解析后的列表请求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    pub page: PageKey,
    /// 跳过缓存直接请求上游
    pub refresh: bool,
}

impl ListQuery {
    pub fn resolve(&self, default_offset: i64, default_limit: i64) -> ListParams {
        ListParams {
            page: PageKey {
                offset: parse_number(self.offset.as_deref(), default_offset),
                limit: parse_number(self.limit.as_deref(), default_limit),
            },
            refresh: matches!(self.refresh.as_deref(), Some("1") | Some("true")),
        }
    }
}

/// 缺失或非整数回退到默认值，空字符串视为 0
fn parse_number(raw: Option<&str>, default: i64) -> i64 {
    match raw.map(str::trim) {
        None => default,
        Some("") => 0,
        Some(s) => s.parse().unwrap_or(default),
    }
}

/// 按 `id` 升序排列产品数组，保证同一页多次请求顺序一致
///
/// 非数组文档原样返回；缺少或无法识别的 id 按 0 处理。排序是稳定的。
pub fn sort_by_id(doc: Value) -> Value {
    match doc {
        Value::Array(mut items) => {
            items.sort_by(|a, b| {
                product_id(a)
                    .partial_cmp(&product_id(b))
                    .unwrap_or(Ordering::Equal)
            });
            Value::Array(items)
        }
        other => other,
    }
}

fn product_id(item: &Value) -> f64 {
    match item.get("id") {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(offset: Option<&str>, limit: Option<&str>, refresh: Option<&str>) -> ListQuery {
        ListQuery {
            offset: offset.map(String::from),
            limit: limit.map(String::from),
            refresh: refresh.map(String::from),
        }
    }

    #[test]
    fn test_defaults_when_missing() {
        let params = ListQuery::default().resolve(0, 50);
        assert_eq!(params.page, PageKey { offset: 0, limit: 50 });
        assert!(!params.refresh);
    }

    #[test]
    fn test_lenient_numbers() {
        let params = query(Some("20"), Some("abc"), None).resolve(0, 50);
        assert_eq!(params.page, PageKey { offset: 20, limit: 50 });

        let params = query(Some(""), Some(" 10 "), None).resolve(5, 50);
        assert_eq!(params.page, PageKey { offset: 0, limit: 10 });

        // 只接受整数字面量
        let params = query(Some("1e1"), Some("10.0"), None).resolve(5, 50);
        assert_eq!(params.page, PageKey { offset: 5, limit: 50 });
    }

    #[test]
    fn test_refresh_flag() {
        assert!(query(None, None, Some("1")).resolve(0, 50).refresh);
        assert!(query(None, None, Some("true")).resolve(0, 50).refresh);
        assert!(!query(None, None, Some("yes")).resolve(0, 50).refresh);
        assert!(!query(None, None, Some("0")).resolve(0, 50).refresh);
    }

    #[test]
    fn test_page_key_display() {
        assert_eq!(PageKey { offset: 10, limit: 5 }.to_string(), "10:5");
    }

    #[test]
    fn test_sort_by_id() {
        let doc = json!([
            {"id": 3, "title": "c"},
            {"title": "no id"},
            {"id": 1, "title": "a"},
            {"id": "2", "title": "b"}
        ]);
        let sorted = sort_by_id(doc);
        let titles: Vec<&str> = sorted
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["no id", "a", "b", "c"]);
    }

    #[test]
    fn test_sort_passes_through_non_array() {
        let doc = json!({"message": "not a list"});
        assert_eq!(sort_by_id(doc.clone()), doc);
    }
}
