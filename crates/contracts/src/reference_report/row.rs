use serde::Deserialize;
use serde_json::{Map, Number, Value};
use std::fmt;

/// Наибольшее целое, которое f64 представляет точно (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Значение ячейки отчета
///
/// Набор данных приходит из статического JSON без схемы, поэтому любое
/// значение приводится к одному из трех вариантов. Текстовое представление
/// определено для всех вариантов, и фильтр и таблица работают с ним.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum CellValue {
    Text(String),
    Number(Number),
    Empty,
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Текст в нижнем регистре, используется при поиске
    pub fn to_lowercase_text(&self) -> String {
        self.to_string().to_lowercase()
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => CellValue::Text(s),
            Value::Number(n) => CellValue::Number(n),
            Value::Null => CellValue::Empty,
            Value::Bool(b) => CellValue::Text(b.to_string()),
            // Вложенные структуры в плоском отчете не ожидаются, показываем как JSON
            nested @ (Value::Array(_) | Value::Object(_)) => CellValue::Text(nested.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value.into())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write_number(f, n),
            CellValue::Empty => Ok(()),
        }
    }
}

/// Числа выводятся как в JS `toString()`: целые значения без дробной части
fn write_number(f: &mut fmt::Formatter<'_>, n: &Number) -> fmt::Result {
    match n.as_f64() {
        Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER => {
            write!(f, "{}", v as i64)
        }
        _ => write!(f, "{}", n),
    }
}

/// Строка отчета: поля в порядке следования ключей в исходном JSON
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Row {
    fields: Vec<(String, CellValue)>,
}

impl Row {
    pub fn new<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<CellValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &CellValue> {
        self.fields.iter().map(|(_, v)| v)
    }

    pub fn fields(&self) -> &[(String, CellValue)] {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for Row {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            fields: map
                .into_iter()
                .map(|(k, v)| (k, CellValue::from(v)))
                .collect(),
        }
    }
}

/// Разбор набора данных из текста JSON (массив плоских объектов)
pub fn parse_dataset(json: &str) -> Result<Vec<Row>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_preserves_key_order() {
        let rows = parse_dataset(r#"[{"zeta": "a", "alpha": 1, "mid": "b"}]"#).unwrap();
        let keys: Vec<&str> = rows[0].keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_cell_value_from_json() {
        let rows = parse_dataset(
            r#"[{"s": "East US", "n": 42, "f": 1.5, "z": null, "b": true, "a": [1, 2]}]"#,
        )
        .unwrap();
        let row = &rows[0];
        assert_eq!(row.get("s"), Some(&CellValue::Text("East US".into())));
        assert_eq!(row.get("n").map(|v| v.to_string()), Some("42".to_string()));
        assert_eq!(row.get("f").map(|v| v.to_string()), Some("1.5".to_string()));
        assert_eq!(row.get("z"), Some(&CellValue::Empty));
        assert_eq!(row.get("b"), Some(&CellValue::Text("true".into())));
        assert_eq!(row.get("a"), Some(&CellValue::Text("[1,2]".into())));
    }

    #[test]
    fn test_whole_floats_print_without_fraction() {
        let rows =
            parse_dataset(r#"[{"cost": 488.0, "n": 1e3, "neg": -2.0, "x": 0.25, "big": 1e20}]"#)
                .unwrap();
        let texts: Vec<String> = rows[0].values().map(|v| v.to_string()).collect();
        assert_eq!(texts[0], "488");
        assert_eq!(texts[1], "1000");
        assert_eq!(texts[2], "-2");
        assert_eq!(texts[3], "0.25");
        // вне диапазона точных целых остается формат serde_json
        assert_eq!(texts[4], Number::from_f64(1e20).unwrap().to_string());
    }

    #[test]
    fn test_empty_cell_has_empty_text() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert!(CellValue::Empty.is_empty());
        assert_eq!(CellValue::from("VM-Prod").to_lowercase_text(), "vm-prod");
    }

    #[test]
    fn test_parse_dataset_rejects_non_array() {
        assert!(parse_dataset(r#"{"name": "x"}"#).is_err());
        assert!(parse_dataset("not json").is_err());
        assert!(parse_dataset("[]").unwrap().is_empty());
    }
}
