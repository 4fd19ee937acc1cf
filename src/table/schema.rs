use std::collections::BTreeSet;

/// 表格行：提供行标识，供行选择与选择清理策略使用
pub trait TableRow {
    fn row_id(&self) -> &str;
}

// 页大小选项（与分页组件保持一致）
const DEFAULT_PAGE_SIZE_OPTIONS: &[i64] = &[2, 10, 20, 50, 100];
const DEFAULT_PAGE_SIZE: i64 = 10;

/// 表格结构描述
///
/// 每个管理页只需要声明：哪些列可过滤、哪些列可排序、允许的页大小。
/// 控制器对不在集合内的列采取宽松策略（忽略而不是报错）。
#[derive(Debug, Clone)]
pub struct TableSchema {
    filterable: BTreeSet<String>,
    sortable: BTreeSet<String>,
    page_size_options: Vec<i64>,
    default_page_size: i64,
}

impl TableSchema {
    pub fn new(filterable: &[&str], sortable: &[&str]) -> Self {
        Self {
            filterable: filterable.iter().map(|s| s.to_string()).collect(),
            sortable: sortable.iter().map(|s| s.to_string()).collect(),
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// 覆盖页大小选项（默认页大小必须在选项集合内）
    pub fn with_page_sizes(mut self, options: &[i64], default_size: i64) -> Self {
        self.page_size_options = options.to_vec();
        if !self.page_size_options.contains(&default_size) {
            self.page_size_options.push(default_size);
            self.page_size_options.sort_unstable();
        }
        self.default_page_size = default_size;
        self
    }

    pub fn is_filterable(&self, column: &str) -> bool {
        self.filterable.contains(column)
    }

    pub fn is_sortable(&self, column: &str) -> bool {
        self.sortable.contains(column)
    }

    /// 页大小是否在允许的离散选项内
    pub fn allows_page_size(&self, size: i64) -> bool {
        self.page_size_options.contains(&size)
    }

    pub fn default_page_size(&self) -> i64 {
        self.default_page_size
    }

    pub fn page_size_options(&self) -> &[i64] {
        &self.page_size_options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_membership() {
        let schema = TableSchema::new(&["name", "email"], &["createTime"]);
        assert!(schema.is_filterable("name"));
        assert!(!schema.is_filterable("createTime"));
        assert!(schema.is_sortable("createTime"));
        assert!(!schema.is_sortable("name"));
    }

    #[test]
    fn test_default_page_sizes() {
        let schema = TableSchema::new(&[], &[]);
        assert_eq!(schema.default_page_size(), 10);
        assert!(schema.allows_page_size(2));
        assert!(schema.allows_page_size(100));
        assert!(!schema.allows_page_size(7));
    }

    #[test]
    fn test_with_page_sizes_keeps_default_in_options() {
        let schema = TableSchema::new(&[], &[]).with_page_sizes(&[10, 20], 15);
        assert!(schema.allows_page_size(15));
        assert_eq!(schema.default_page_size(), 15);
    }
}
