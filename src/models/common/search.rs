use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};

// 创建时间排序字段
pub const FIELD_CREATE_TIME: &str = "createTime";

// 更新时间排序字段
pub const FIELD_UPDATE_TIME: &str = "updateTime";

// 登录时间排序字段（登录日志）
pub const FIELD_LOGIN_TIME: &str = "loginTime";

// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const ASC: &'static str = "asc";
    pub const DESC: &'static str = "desc";

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => SortDirection::ASC,
            SortDirection::Desc => SortDirection::DESC,
        }
    }
}

impl Serialize for SortDirection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortDirection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            SortDirection::ASC => Ok(SortDirection::Asc),
            SortDirection::DESC => Ok(SortDirection::Desc),
            _ => Err(serde::de::Error::custom(format!(
                "无效的排序方向: '{s}'. 支持的方向: asc, desc"
            ))),
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("Invalid sort direction: {s}")),
        }
    }
}

/// 归一化的出站查询对象
///
/// 由表格控制器从 {过滤, 排序, 分页} 三个状态切片推导而来，
/// 序列化为 list 接口的扁平 JSON 入参：
/// `pageNum`、`pageSize`、各过滤字段按列 id 原样输出、
/// 排序输出为 `<列id>Sort: "asc"|"desc"`。
///
/// 过滤使用 BTreeMap，保证同一状态两次序列化字节一致。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub page_num: i64,
    pub page_size: i64,
    pub filters: BTreeMap<String, String>,
    pub sort: Option<(String, SortDirection)>,
}

impl SearchRequest {
    pub fn new(page_num: i64, page_size: i64) -> Self {
        Self {
            page_num,
            page_size,
            filters: BTreeMap::new(),
            sort: None,
        }
    }

    /// 排序入参的字段名：列 id 拼接 "Sort" 后缀
    pub fn sort_param(column: &str) -> String {
        format!("{column}Sort")
    }
}

impl Serialize for SearchRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let len = 2 + self.filters.len() + usize::from(self.sort.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("pageNum", &self.page_num)?;
        map.serialize_entry("pageSize", &self.page_size)?;
        for (column, value) in &self.filters {
            map.serialize_entry(column, value)?;
        }
        if let Some((column, direction)) = &self.sort {
            map.serialize_entry(&Self::sort_param(column), direction)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_flat_wire_shape() {
        let mut request = SearchRequest::new(2, 20);
        request
            .filters
            .insert("roleName".to_string(), "管理员".to_string());
        request.filters.insert("status".to_string(), "1".to_string());
        request.sort = Some((FIELD_CREATE_TIME.to_string(), SortDirection::Desc));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "pageNum": 2,
                "pageSize": 20,
                "roleName": "管理员",
                "status": "1",
                "createTimeSort": "desc"
            })
        );
    }

    #[test]
    fn test_serialize_is_deterministic() {
        let mut request = SearchRequest::new(1, 10);
        request.filters.insert("name".to_string(), "a".to_string());
        request.filters.insert("email".to_string(), "b".to_string());

        let first = serde_json::to_string(&request).unwrap();
        let second = serde_json::to_string(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sort_direction_round_trip() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!(SortDirection::Desc.to_string(), "desc");
        assert!("ascending".parse::<SortDirection>().is_err());
    }
}
