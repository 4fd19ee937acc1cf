//! 分页按钮区间算法
//!
//! 总页数 <= 6 时显示全部页码；超过时固定显示第一页和最后一页，
//! 当前页前后各一页作为邻居，邻居与边界不相邻的一侧显示省略号。

/// 页码条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(i64),
    Ellipsis,
}

// 超过该页数开始折叠
const COLLAPSE_THRESHOLD: i64 = 6;

/// 计算分页按钮区间
pub fn page_range(page_count: i64, current: i64) -> Vec<PageItem> {
    let page_count = page_count.max(1);
    let current = current.clamp(1, page_count);

    if page_count <= COLLAPSE_THRESHOLD {
        return (1..=page_count).map(PageItem::Page).collect();
    }

    let mut items = Vec::with_capacity(7);

    // 第一页
    items.push(PageItem::Page(1));

    // 左侧省略号
    if current > 3 {
        items.push(PageItem::Ellipsis);
    }

    // 当前页前后各一页，跳过与边界重复的页码
    for page in (current - 1)..=(current + 1) {
        if page <= 1 || page >= page_count {
            continue;
        }
        items.push(PageItem::Page(page));
    }

    // 右侧省略号
    if current < page_count - 2 {
        items.push(PageItem::Ellipsis);
    }

    // 最后一页
    items.push(PageItem::Page(page_count));

    items
}

/// 上一页是否可用
pub fn has_prev(current: i64) -> bool {
    current > 1
}

/// 下一页是否可用
pub fn has_next(current: i64, page_count: i64) -> bool {
    current < page_count
}

/// 快速跳转输入的钳制
pub fn clamp_jump(target: i64, page_count: i64) -> i64 {
    target.clamp(1, page_count.max(1))
}
