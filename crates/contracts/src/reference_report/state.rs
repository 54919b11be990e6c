use super::config::ReportConfig;
use super::filter::filter_rows;
use super::pagination;
use super::row::Row;
use super::tab::ReportTab;
use std::sync::Arc;

/// Запрос на загрузку набора данных, который должен выполнить UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub tab: ReportTab,
    pub resource: &'static str,
    pub generation: u64,
}

/// Действия над состоянием отчета
#[derive(Debug, Clone, PartialEq)]
pub enum ReportAction {
    /// Переключение вкладки. Повторный выбор активной вкладки ничего не делает.
    SelectTab(ReportTab),
    /// Загрузить данные активной вкладки заново (используется при монтировании)
    Reload,
    DatasetLoaded { generation: u64, rows: Vec<Row> },
    DatasetFailed { generation: u64 },
    SetQuery(String),
    NextPage,
    PreviousPage,
}

/// Состояние виджета отчета
///
/// Меняется только через [`ReportViewState::apply`], все остальное
/// (отфильтрованные строки, количество страниц, заголовки) вычисляется.
#[derive(Debug, Clone)]
pub struct ReportViewState {
    selected_tab: ReportTab,
    dataset: Arc<[Row]>,
    dataset_tab: Option<ReportTab>,
    search_query: String,
    current_page: usize,
    generation: u64,
    loading: bool,
    config: ReportConfig,
}

impl Default for ReportViewState {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

impl ReportViewState {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            selected_tab: ReportTab::default(),
            dataset: Arc::from(Vec::<Row>::new()),
            dataset_tab: None,
            search_query: String::new(),
            current_page: 1,
            generation: 0,
            loading: false,
            config: config.normalized(),
        }
    }

    pub fn selected_tab(&self) -> ReportTab {
        self.selected_tab
    }

    pub fn dataset(&self) -> &[Row] {
        &self.dataset
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn page_size(&self) -> usize {
        self.config.effective_page_size()
    }

    /// Применяет действие и возвращает новое состояние и, если нужно, запрос на загрузку
    pub fn apply(&self, action: ReportAction) -> (Self, Option<LoadRequest>) {
        let mut next = self.clone();
        let request = match action {
            ReportAction::SelectTab(tab) => {
                if tab == self.selected_tab && self.generation > 0 {
                    return (next, None);
                }
                next.begin_load(tab)
            }
            ReportAction::Reload => next.begin_load(self.selected_tab),
            ReportAction::DatasetLoaded { generation, rows } => {
                if generation == self.generation {
                    next.dataset = Arc::from(rows);
                    next.dataset_tab = Some(self.selected_tab);
                    next.search_query.clear();
                    next.current_page = 1;
                    next.loading = false;
                }
                None
            }
            ReportAction::DatasetFailed { generation } => {
                if generation == self.generation {
                    let keep = self.config.keep_previous_on_error
                        && self.dataset_tab == Some(self.selected_tab);
                    if !keep {
                        next.clear_dataset();
                    }
                    next.current_page = 1;
                    next.loading = false;
                }
                None
            }
            ReportAction::SetQuery(query) => {
                next.search_query = query;
                next.current_page = 1;
                None
            }
            ReportAction::NextPage => {
                next.current_page = (self.current_page + 1).min(self.total_pages());
                None
            }
            ReportAction::PreviousPage => {
                next.current_page = self.current_page.saturating_sub(1).max(1);
                None
            }
        };
        next.current_page = pagination::clamp_page(next.current_page, next.total_pages());
        (next, request)
    }

    fn begin_load(&mut self, tab: ReportTab) -> Option<LoadRequest> {
        self.selected_tab = tab;
        self.generation += 1;
        self.current_page = 1;

        match tab.resource() {
            Some(resource) => {
                self.loading = true;
                Some(LoadRequest {
                    tab,
                    resource,
                    generation: self.generation,
                })
            }
            None => {
                // Для вкладки нет данных: пустая таблица без ошибки
                self.clear_dataset();
                self.loading = false;
                None
            }
        }
    }

    fn clear_dataset(&mut self) {
        self.dataset = Arc::from(Vec::<Row>::new());
        self.dataset_tab = None;
    }

    pub fn filtered_rows(&self) -> Vec<&Row> {
        filter_rows(&self.dataset, &self.search_query)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_rows().len()
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered_count(), self.page_size())
    }

    /// Все, что нужно для отрисовки, за один проход фильтра.
    /// Копируются только строки текущей страницы.
    pub fn view(&self) -> ReportView {
        let filtered = self.filtered_rows();
        let page_size = self.page_size();
        let total_pages = pagination::total_pages(filtered.len(), page_size);
        let rows: Vec<Row> = pagination::page_slice(&filtered[..], self.current_page, page_size)
            .iter()
            .map(|row| (*row).clone())
            .collect();
        let headers = rows
            .first()
            .map(|row| row.keys().map(str::to_string).collect())
            .unwrap_or_default();

        ReportView {
            headers,
            rows,
            current_page: self.current_page,
            total_pages,
            filtered_count: filtered.len(),
        }
    }

    /// Строки текущей страницы
    pub fn current_rows(&self) -> Vec<Row> {
        self.view().rows
    }

    /// Заголовки колонок по ключам первой строки текущей страницы
    pub fn headers(&self) -> Vec<String> {
        self.view().headers
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn page_label(&self) -> String {
        self.view().page_label()
    }
}

/// Снимок для отрисовки: страница отфильтрованных строк и данные пагинации
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportView {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

impl ReportView {
    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages.max(1))
    }
}
