//! Виджет отчета: вкладки, поиск, таблица и постраничный вывод.
//!
//! Состояние хранится в одном `RwSignal<ReportViewState>` и меняется только
//! через [`dispatch`]. Загрузка данных запускается, когда переход состояния
//! возвращает `LoadRequest`.

pub mod data_table;
pub mod pagination;
pub mod search_input;
pub mod tab_bar;

use contracts::reference_report::{
    LoadRequest, ReportAction, ReportConfig, ReportTab, ReportViewState,
};
use data_table::DataTable;
use leptos::prelude::*;
use leptos::task::spawn_local;
use pagination::PaginationControls;
use search_input::SearchInput;
use tab_bar::TabBar;

use super::api;

pub fn create_state(config: ReportConfig) -> RwSignal<ReportViewState> {
    RwSignal::new(ReportViewState::new(config))
}

/// Применить действие к состоянию и при необходимости запустить загрузку
pub fn dispatch(state: RwSignal<ReportViewState>, action: ReportAction) {
    if let ReportAction::SelectTab(tab) = &action {
        if tab.resource().is_none() {
            log::debug!("No data resource for tab {}, showing empty table", tab);
        }
    }

    let request = state
        .try_update(|current| {
            let (next, request) = current.apply(action);
            *current = next;
            request
        })
        .flatten();

    if let Some(request) = request {
        start_load(state, request);
    }
}

fn start_load(state: RwSignal<ReportViewState>, request: LoadRequest) {
    let config = state.with_untracked(|s| s.config().clone());
    log::debug!(
        "Loading dataset {} for tab {} (generation {})",
        request.resource,
        request.tab,
        request.generation
    );

    spawn_local(async move {
        let action = match api::load_dataset(&config, &request).await {
            Ok(rows) => {
                log::debug!("Loaded {} rows for tab {}", rows.len(), request.tab);
                ReportAction::DatasetLoaded {
                    generation: request.generation,
                    rows,
                }
            }
            Err(err) => {
                log::error!("Error loading data for tab {}: {}", request.tab, err);
                ReportAction::DatasetFailed {
                    generation: request.generation,
                }
            }
        };

        let is_stale = state.with_untracked(|s| s.generation() != request.generation);
        if is_stale {
            log::debug!(
                "Discarding stale response for tab {} (generation {})",
                request.tab,
                request.generation
            );
            return;
        }
        dispatch(state, action);
    });
}

#[component]
pub fn ReferenceReport(#[prop(optional)] config: Option<ReportConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let title = config.title.clone();
    let placeholder = config.search_placeholder.clone();
    let state = create_state(config);

    // Initial load for the default tab
    Effect::new(move |_| {
        dispatch(state, ReportAction::Reload);
    });

    let selected_tab = Signal::derive(move || state.with(|s| s.selected_tab()));
    let search_query = Signal::derive(move || state.with(|s| s.search_query().to_string()));
    // Фильтр и срез страницы считаются один раз на изменение состояния
    let report_view = Memo::new(move |_| state.with(|s| s.view()));
    let headers = Signal::derive(move || report_view.with(|v| v.headers.clone()));
    let current_rows = Signal::derive(move || report_view.with(|v| v.rows.clone()));
    let page_label = Signal::derive(move || report_view.with(|v| v.page_label()));
    let can_go_previous = Signal::derive(move || report_view.with(|v| v.can_go_previous()));
    let can_go_next = Signal::derive(move || report_view.with(|v| v.can_go_next()));
    let loading = Signal::derive(move || state.with(|s| s.is_loading()));

    view! {
        <div class="reference-report">
            <h2 class="reference-report__title">{title}</h2>

            <TabBar
                selected=selected_tab
                on_select=Callback::new(move |tab: ReportTab| {
                    dispatch(state, ReportAction::SelectTab(tab))
                })
            />

            <SearchInput
                value=search_query
                placeholder=placeholder
                on_change=Callback::new(move |query: String| {
                    dispatch(state, ReportAction::SetQuery(query))
                })
            />

            <Show when=move || loading.get()>
                <div class="reference-report__loading">"Loading..."</div>
            </Show>

            <DataTable headers=headers rows=current_rows />

            <PaginationControls
                label=page_label
                can_go_previous=can_go_previous
                can_go_next=can_go_next
                on_previous=Callback::new(move |_| dispatch(state, ReportAction::PreviousPage))
                on_next=Callback::new(move |_| dispatch(state, ReportAction::NextPage))
            />
        </div>
    }
}
