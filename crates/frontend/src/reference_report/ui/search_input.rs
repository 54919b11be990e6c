use crate::shared::icons::icon;
use leptos::prelude::*;

/// Поле поиска с кнопкой очистки
///
/// Каждое изменение сразу уходит в `on_change`: номер страницы
/// сбрасывается вместе с запросом, задержка здесь не нужна.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().is_empty();

    view! {
        <div class="reference-report__search">
            <span class="reference-report__search-icon">{icon("search")}</span>
            <input
                type="text"
                class=move || {
                    if is_filter_active() {
                        "reference-report__search-box reference-report__search-box--active"
                    } else {
                        "reference-report__search-box"
                    }
                }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button
                    type="button"
                    class="reference-report__search-clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
