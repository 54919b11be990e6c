//! Отчет-справочник: вкладки, поиск и постраничный вывод статического набора данных.
//!
//! Модуль не зависит от UI фреймворка, вся логика виджета проверяется обычными тестами.

pub mod config;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod row;
pub mod state;
pub mod tab;

pub use config::ReportConfig;
pub use error::DataLoadError;
pub use row::{parse_dataset, CellValue, Row};
pub use state::{LoadRequest, ReportAction, ReportView, ReportViewState};
pub use tab::ReportTab;
