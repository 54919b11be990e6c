use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn PaginationControls(
    /// "Page X of Y"
    #[prop(into)]
    label: Signal<String>,
    #[prop(into)] can_go_previous: Signal<bool>,
    #[prop(into)] can_go_next: Signal<bool>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="reference-report__pagination">
            <button
                type="button"
                class="reference-report__page-button"
                disabled=move || !can_go_previous.get()
                on:click=move |_| {
                    if can_go_previous.get_untracked() {
                        on_previous.run(());
                    }
                }
            >
                {icon("chevron-left")}
                "Previous"
            </button>
            <span class="reference-report__page-info">{move || label.get()}</span>
            <button
                type="button"
                class="reference-report__page-button"
                disabled=move || !can_go_next.get()
                on:click=move |_| {
                    if can_go_next.get_untracked() {
                        on_next.run(());
                    }
                }
            >
                "Next"
                {icon("chevron-right")}
            </button>
        </div>
    }
}
