//! Настройки виджета из страницы документации.
//!
//! Страница может передать настройки JSON-блоком:
//!
//! ```html
//! <script id="reference-report-config" type="application/json">
//!     { "page_size": 50, "data_base_url": "/static/data" }
//! </script>
//! ```

use contracts::reference_report::ReportConfig;

pub const CONFIG_ELEMENT_ID: &str = "reference-report-config";

fn config_text() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

/// Прочитать настройки со страницы, при отсутствии или ошибке - значения по умолчанию
pub fn load_config() -> ReportConfig {
    let Some(text) = config_text() else {
        return ReportConfig::default();
    };

    match ReportConfig::from_json(&text) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Invalid #{} block, using defaults: {}", CONFIG_ELEMENT_ID, err);
            ReportConfig::default()
        }
    }
}
