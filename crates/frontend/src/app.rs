use crate::reference_report::ReferenceReport;
use crate::shared::config::load_config;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <ReferenceReport config=load_config() />
        </ConfigProvider>
    }
}
