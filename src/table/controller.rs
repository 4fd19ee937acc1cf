use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;

use super::schema::{TableRow, TableSchema};
use crate::errors::Result;
use crate::models::common::page;
use crate::models::{ApiResponse, PageResult, SearchRequest, SortDirection};
use crate::notify::Notifier;

/// 分页取数的外部接口（每个管理页对应一个 list 端点）
#[async_trait]
pub trait PageFetcher<T>: Send + Sync {
    async fn fetch(&self, request: &SearchRequest) -> Result<ApiResponse<PageResult<T>>>;
}

/// 通用表格查询控制器
///
/// 唯一持有 {分页, 过滤, 排序, 列显示, 行选择} 五个状态切片，
/// 出站查询统一经 `derived_request()` 推导。重载协议带序号，
/// 晚到的过期响应会被丢弃，不会覆盖更新的表格状态。
pub struct TableQueryController<T> {
    schema: TableSchema,
    fetcher: Arc<dyn PageFetcher<T>>,
    notifier: Arc<dyn Notifier>,

    page_num: i64,
    page_size: i64,
    filters: BTreeMap<String, String>,
    // 单一生效排序字段：后触碰的列生效
    sort: Option<(String, SortDirection)>,
    // 默认全部可见，只记录被隐藏的列
    hidden: BTreeSet<String>,
    // 行选择只作用于当前加载页
    selection: BTreeSet<String>,

    rows: Vec<T>,
    total: i64,
    sequence: u64,
    loading: bool,
}

impl<T: TableRow> TableQueryController<T> {
    pub fn new(
        schema: TableSchema,
        fetcher: Arc<dyn PageFetcher<T>>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let page_size = schema.default_page_size();
        Self {
            schema,
            fetcher,
            notifier,
            page_num: 1,
            page_size,
            filters: BTreeMap::new(),
            sort: None,
            hidden: BTreeSet::new(),
            selection: BTreeSet::new(),
            rows: Vec::new(),
            total: 0,
            sequence: 0,
            loading: false,
        }
    }

    /// 推导出站查询对象（纯函数：状态不变则两次结果完全一致）
    pub fn derived_request(&self) -> SearchRequest {
        SearchRequest {
            page_num: self.page_num,
            page_size: self.page_size,
            filters: self.filters.clone(),
            sort: self.sort.clone(),
        }
    }

    /// 记录列过滤值；只改推导结果，不触发取数（搜索按钮才触发）
    pub fn set_filter(&mut self, column: &str, value: &str) {
        if !self.schema.is_filterable(column) {
            return;
        }
        let value = value.trim();
        if value.is_empty() {
            self.filters.remove(column);
        } else {
            self.filters.insert(column.to_string(), value.to_string());
        }
    }

    /// 设置排序并取数；不可排序的列直接忽略
    pub async fn set_sort(&mut self, column: &str, direction: SortDirection) {
        if !self.schema.is_sortable(column) {
            return;
        }
        self.sort = Some((column.to_string(), direction));
        self.reload().await;
    }

    /// 取消排序
    pub async fn clear_sort(&mut self) {
        if self.sort.take().is_some() {
            self.reload().await;
        }
    }

    /// 翻页/改页大小并取数
    ///
    /// 页码钳制到 [1, 总页数]；页大小不在允许选项内时静默保留原值。
    pub async fn set_page(&mut self, page_num: i64, page_size: i64) {
        if self.schema.allows_page_size(page_size) {
            self.page_size = page_size;
        }
        self.page_num = page_num.clamp(1, self.page_count());
        self.reload().await;
    }

    /// 按当前条件取数（搜索按钮）
    pub async fn search(&mut self) {
        self.reload().await;
    }

    /// 重置全部状态到初始值，并恰好触发一次取数
    pub async fn reset(&mut self) {
        self.filters.clear();
        self.sort = None;
        self.page_num = 1;
        self.page_size = self.schema.default_page_size();
        self.hidden.clear();
        self.selection.clear();
        self.reload().await;
    }

    // ---- 行选择 ----

    pub fn set_selection(&mut self, ids: impl IntoIterator<Item = String>) {
        self.selection = ids.into_iter().collect();
    }

    pub fn toggle_selection(&mut self, id: &str) {
        if !self.selection.remove(id) {
            self.selection.insert(id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selection
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.iter().cloned().collect()
    }

    // ---- 列显示 ----

    pub fn toggle_visibility(&mut self, column: &str, shown: bool) {
        if shown {
            self.hidden.remove(column);
        } else {
            self.hidden.insert(column.to_string());
        }
    }

    pub fn is_visible(&self, column: &str) -> bool {
        !self.hidden.contains(column)
    }

    // ---- 重载协议 ----

    /// 开始一次取数：返回响应序号与当下推导的查询对象
    pub fn begin_reload(&mut self) -> (u64, SearchRequest) {
        self.sequence += 1;
        (self.sequence, self.derived_request())
    }

    /// 写回分页响应
    ///
    /// 序号不是最新的说明已有更新的请求发出，过期响应直接丢弃。
    /// 行集合发生变化时清空行选择（选择只对当前页有效）。
    pub fn apply_response(&mut self, sequence: u64, result: PageResult<T>) -> bool {
        if sequence != self.sequence {
            return false;
        }
        let incoming: BTreeSet<&str> = result.list.iter().map(TableRow::row_id).collect();
        let current: BTreeSet<&str> = self.rows.iter().map(TableRow::row_id).collect();
        if incoming != current {
            self.selection.clear();
        }
        self.total = result.total;
        self.rows = result.list;
        true
    }

    /// 完整的一次取数：失败时保留旧数据，只把服务端消息递给通知出口
    async fn reload(&mut self) {
        if self.loading {
            // 同一路径的重入保护
            return;
        }
        self.loading = true;
        let (sequence, request) = self.begin_reload();
        let fetcher = Arc::clone(&self.fetcher);
        match fetcher.fetch(&request).await {
            Ok(resp) if resp.is_success() => match resp.data {
                Some(result) => {
                    self.apply_response(sequence, result);
                }
                None => self.notifier.error(&resp.message),
            },
            Ok(resp) => self.notifier.error(&resp.message),
            Err(e) => self.notifier.error(&e.to_string()),
        }
        self.loading = false;
    }

    // ---- 只读视图 ----

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn page_num(&self) -> i64 {
        self.page_num
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn page_count(&self) -> i64 {
        page::page_count(self.total, self.page_size)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::models::ErrorCode;

    #[derive(Debug, Clone)]
    struct Row {
        id: String,
    }

    impl Row {
        fn new(id: &str) -> Self {
            Self { id: id.to_string() }
        }
    }

    impl TableRow for Row {
        fn row_id(&self) -> &str {
            &self.id
        }
    }

    fn page_of(ids: &[&str], total: i64) -> PageResult<Row> {
        PageResult {
            page_num: 1,
            page_size: 10,
            total,
            list: ids.iter().map(|id| Row::new(id)).collect(),
        }
    }

    /// 逐次弹出预置响应的取数桩，耗尽后返回空页
    struct StubFetcher {
        responses: Mutex<VecDeque<Result<ApiResponse<PageResult<Row>>>>>,
        calls: AtomicUsize,
    }

    impl StubFetcher {
        fn empty() -> Self {
            Self {
                responses: Mutex::new(VecDeque::new()),
                calls: AtomicUsize::new(0),
            }
        }

        fn with(responses: Vec<Result<ApiResponse<PageResult<Row>>>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PageFetcher<Row> for StubFetcher {
        async fn fetch(&self, _request: &SearchRequest) -> Result<ApiResponse<PageResult<Row>>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let next = self.responses.lock().unwrap().pop_front();
            next.unwrap_or_else(|| Ok(ApiResponse::success(page_of(&[], 0), "ok")))
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        errors: Mutex<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, _message: &str) {}

        fn error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
    }

    fn schema() -> TableSchema {
        TableSchema::new(&["name", "email", "status"], &["createTime", "updateTime"])
    }

    fn controller_with(
        fetcher: Arc<StubFetcher>,
        notifier: Arc<RecordingNotifier>,
    ) -> TableQueryController<Row> {
        TableQueryController::new(schema(), fetcher, notifier)
    }

    fn controller() -> TableQueryController<Row> {
        controller_with(
            Arc::new(StubFetcher::empty()),
            Arc::new(RecordingNotifier::default()),
        )
    }

    #[test]
    fn test_derived_request_is_deterministic() {
        let mut c = controller();
        c.set_filter("name", " 张三 ");
        c.set_filter("email", "a@b.com");
        assert_eq!(c.derived_request(), c.derived_request());
        // 过滤值存储时去掉首尾空白
        assert_eq!(c.derived_request().filters["name"], "张三");
    }

    #[test]
    fn test_set_filter_respects_schema_and_empty_value() {
        let mut c = controller();
        c.set_filter("nonexistent", "x");
        assert!(c.derived_request().filters.is_empty());

        c.set_filter("name", "abc");
        c.set_filter("name", "   ");
        assert!(c.derived_request().filters.is_empty());
    }

    #[tokio::test]
    async fn test_last_touched_sort_wins() {
        let mut c = controller();
        c.set_sort("createTime", SortDirection::Asc).await;
        c.set_sort("updateTime", SortDirection::Desc).await;

        let request = c.derived_request();
        assert_eq!(
            request.sort,
            Some(("updateTime".to_string(), SortDirection::Desc))
        );
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("createTimeSort").is_none());
        assert_eq!(json["updateTimeSort"], "desc");
    }

    #[tokio::test]
    async fn test_sort_on_unsortable_column_is_noop() {
        let fetcher = Arc::new(StubFetcher::empty());
        let mut c = controller_with(fetcher.clone(), Arc::new(RecordingNotifier::default()));
        c.set_sort("name", SortDirection::Asc).await;
        assert!(c.derived_request().sort.is_none());
        // 没有触发取数
        assert_eq!(fetcher.call_count(), 0);
    }

    #[tokio::test]
    async fn test_set_page_clamps_page_num() {
        let mut c = controller();
        let (seq, _) = c.begin_reload();
        c.apply_response(seq, page_of(&["1"], 45)); // 45 条 / 10 每页 = 5 页
        assert_eq!(c.page_count(), 5);

        c.set_page(9, 10).await;
        assert_eq!(c.page_num(), 5);

        c.set_page(0, 10).await;
        assert_eq!(c.page_num(), 1);
    }

    #[tokio::test]
    async fn test_page_size_outside_options_keeps_previous() {
        let mut c = controller();
        c.set_page(1, 20).await;
        assert_eq!(c.page_size(), 20);

        c.set_page(1, 7).await;
        assert_eq!(c.page_size(), 20);
    }

    #[tokio::test]
    async fn test_reset_restores_initial_request_and_reloads_once() {
        let fetcher = Arc::new(StubFetcher::empty());
        let mut c = controller_with(fetcher.clone(), Arc::new(RecordingNotifier::default()));
        let initial = c.derived_request();

        c.set_filter("name", "x");
        c.set_sort("createTime", SortDirection::Desc).await;
        c.set_page(2, 20).await;
        c.toggle_selection("a");
        c.toggle_visibility("email", false);

        let calls_before = fetcher.call_count();
        c.reset().await;
        assert_eq!(fetcher.call_count(), calls_before + 1);

        assert_eq!(c.derived_request(), initial);
        assert!(c.selection().is_empty());
        assert!(c.is_visible("email"));

        // reset 幂等
        c.reset().await;
        assert_eq!(c.derived_request(), initial);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_stale_rows_and_notifies() {
        let fetcher = Arc::new(StubFetcher::with(vec![
            Ok(ApiResponse::success(page_of(&["1", "2"], 2), "ok")),
            Ok(ApiResponse::error(
                ErrorCode::InternalServerError,
                page_of(&[], 0),
                "服务器内部错误",
            )),
        ]));
        let notifier = Arc::new(RecordingNotifier::default());
        let mut c = controller_with(fetcher, notifier.clone());

        c.search().await;
        assert_eq!(c.rows().len(), 2);
        assert_eq!(c.total(), 2);

        c.search().await;
        // 失败响应不得覆盖表格数据
        assert_eq!(c.rows().len(), 2);
        assert_eq!(c.total(), 2);
        assert_eq!(
            notifier.errors.lock().unwrap().as_slice(),
            ["服务器内部错误"]
        );
    }

    #[tokio::test]
    async fn test_transport_error_keeps_stale_rows_and_notifies() {
        let fetcher = Arc::new(StubFetcher::with(vec![
            Ok(ApiResponse::success(page_of(&["1"], 1), "ok")),
            Err(crate::errors::ConsoleError::transport("connection refused")),
        ]));
        let notifier = Arc::new(RecordingNotifier::default());
        let mut c = controller_with(fetcher, notifier.clone());

        c.search().await;
        c.search().await;
        assert_eq!(c.rows().len(), 1);
        assert_eq!(notifier.errors.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut c = controller();
        let (first, _) = c.begin_reload();
        let (second, _) = c.begin_reload();

        // 先发出的请求后到：序号已过期，丢弃
        assert!(!c.apply_response(first, page_of(&["old"], 1)));
        assert!(c.rows().is_empty());

        assert!(c.apply_response(second, page_of(&["new"], 1)));
        assert_eq!(c.rows()[0].row_id(), "new");
    }

    #[test]
    fn test_selection_cleared_when_row_set_changes() {
        let mut c = controller();
        let (seq, _) = c.begin_reload();
        c.apply_response(seq, page_of(&["a", "b"], 2));
        c.set_selection(["a".to_string()]);

        // 行集合不变：选择保留
        let (seq, _) = c.begin_reload();
        c.apply_response(seq, page_of(&["a", "b"], 2));
        assert_eq!(c.selected_ids(), ["a"]);

        // 行集合变化（翻页后）：选择清空
        let (seq, _) = c.begin_reload();
        c.apply_response(seq, page_of(&["c", "d"], 2));
        assert!(c.selection().is_empty());
    }

    #[test]
    fn test_toggle_selection() {
        let mut c = controller();
        c.toggle_selection("a");
        c.toggle_selection("b");
        c.toggle_selection("a");
        assert_eq!(c.selected_ids(), ["b"]);
        c.clear_selection();
        assert!(c.selection().is_empty());
    }

    #[test]
    fn test_visibility_defaults_to_shown() {
        let mut c = controller();
        assert!(c.is_visible("email"));
        c.toggle_visibility("email", false);
        assert!(!c.is_visible("email"));
        c.toggle_visibility("email", true);
        assert!(c.is_visible("email"));
    }
}
