use super::error::DataLoadError;
use super::tab::ReportTab;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_DATA_BASE_URL: &str = "/data";

/// Настройки виджета отчета
///
/// Все поля необязательны при разборе из JSON, отсутствующие берутся
/// из значений по умолчанию.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub title: String,
    pub page_size: usize,
    /// Каталог со статическими JSON файлами наборов данных
    pub data_base_url: String,
    pub search_placeholder: String,
    /// Сохранять загруженные данные, если повторная загрузка той же вкладки не удалась
    pub keep_previous_on_error: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Discovery Report for Azure resources".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            data_base_url: DEFAULT_DATA_BASE_URL.to_string(),
            search_placeholder: "Search...".to_string(),
            keep_previous_on_error: false,
        }
    }
}

impl ReportConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::normalized)
    }

    /// Размер страницы не может быть нулевым
    pub fn normalized(mut self) -> Self {
        self.page_size = self.page_size.max(1);
        self
    }

    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// URL файла набора данных
    pub fn resource_url(&self, file: &str) -> String {
        let base = self.data_base_url.trim_end_matches('/');
        let file = file.trim_start_matches('/');
        if base.is_empty() {
            format!("/{}", file)
        } else {
            format!("{}/{}", base, file)
        }
    }

    /// URL набора данных вкладки по статической таблице соответствия
    pub fn dataset_url(&self, tab: ReportTab) -> Result<String, DataLoadError> {
        tab.resource()
            .map(|file| self.resource_url(file))
            .ok_or(DataLoadError::Unmapped(tab))
    }
}
