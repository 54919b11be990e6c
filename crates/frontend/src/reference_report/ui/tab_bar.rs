use contracts::reference_report::ReportTab;
use leptos::prelude::*;

fn tab_class(tab: ReportTab, selected: ReportTab) -> &'static str {
    if tab == selected {
        "reference-report__tab reference-report__tab--active"
    } else {
        "reference-report__tab"
    }
}

/// Панель вкладок: кнопка на каждую вкладку, активная выделена
#[component]
pub fn TabBar(
    #[prop(into)] selected: Signal<ReportTab>,
    on_select: Callback<ReportTab>,
) -> impl IntoView {
    view! {
        <div class="reference-report__tabs" role="tablist">
            {ReportTab::all()
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class=move || tab_class(tab, selected.get())
                            aria-selected=move || (tab == selected.get()).to_string()
                            on:click=move |_| on_select.run(tab)
                        >
                            {tab.code()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_class() {
        assert!(tab_class(ReportTab::Azure, ReportTab::Azure).ends_with("--active"));
        assert_eq!(tab_class(ReportTab::Gcp, ReportTab::Azure), "reference-report__tab");
    }
}
