use serde::{Deserialize, Serialize};

// 分页查询返参（list 接口的 data 字段）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    #[serde(default = "default_page_num")]
    pub page_num: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    #[serde(default)]
    pub total: i64,
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}

fn default_page_num() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

impl<T> PageResult<T> {
    /// 总页数 = ceil(total / pageSize)，没有数据时视为 1 页
    pub fn page_count(&self) -> i64 {
        page_count(self.total, self.page_size)
    }
}

/// 由总条数和页大小计算总页数
pub fn page_count(total: i64, page_size: i64) -> i64 {
    if total > 0 && page_size > 0 {
        (total + page_size - 1) / page_size
    } else {
        1
    }
}
