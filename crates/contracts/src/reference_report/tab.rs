use serde::{Deserialize, Serialize};
use std::fmt;

/// Вкладки отчета (облачные провайдеры)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportTab {
    #[default]
    Azure,
    Aws,
    Gcp,
}

impl ReportTab {
    /// Код вкладки, он же подпись кнопки
    pub fn code(&self) -> &'static str {
        match self {
            ReportTab::Azure => "AZURE",
            ReportTab::Aws => "AWS",
            ReportTab::Gcp => "GCP",
        }
    }

    /// Файл набора данных для вкладки. `None` - данных для вкладки нет.
    pub fn resource(&self) -> Option<&'static str> {
        match self {
            ReportTab::Azure => Some("azure-reference.json"),
            ReportTab::Aws | ReportTab::Gcp => None,
        }
    }

    pub fn all() -> [ReportTab; 3] {
        [ReportTab::Azure, ReportTab::Aws, ReportTab::Gcp]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|tab| tab.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for ReportTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_azure_is_mapped() {
        assert_eq!(ReportTab::Azure.resource(), Some("azure-reference.json"));
        assert_eq!(ReportTab::Aws.resource(), None);
        assert_eq!(ReportTab::Gcp.resource(), None);
    }

    #[test]
    fn test_tab_order_and_codes() {
        let codes: Vec<&str> = ReportTab::all().iter().map(|t| t.code()).collect();
        assert_eq!(codes, vec!["AZURE", "AWS", "GCP"]);
        assert_eq!(ReportTab::default(), ReportTab::Azure);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(ReportTab::from_code("gcp"), Some(ReportTab::Gcp));
        assert_eq!(ReportTab::from_code("AWS"), Some(ReportTab::Aws));
        assert_eq!(ReportTab::from_code("oracle"), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&ReportTab::Aws).unwrap(), "\"AWS\"");
        let tab: ReportTab = serde_json::from_str("\"AZURE\"").unwrap();
        assert_eq!(tab, ReportTab::Azure);
    }
}
