use super::row::Row;

/// Проверяет, содержит ли хотя бы одно поле строки запрос (без учета регистра)
///
/// `query_lower` должен быть уже приведен к нижнему регистру.
pub fn row_matches(row: &Row, query_lower: &str) -> bool {
    row.values()
        .any(|value| value.to_lowercase_text().contains(query_lower))
}

/// Фильтрует набор данных по поисковому запросу
///
/// Возвращает ссылки на строки исходного набора, сами строки не копируются.
/// Пустой запрос оставляет все строки.
pub fn filter_rows<'a>(rows: &'a [Row], query: &str) -> Vec<&'a Row> {
    if query.is_empty() {
        return rows.iter().collect();
    }

    let query_lower = query.to_lowercase();
    rows.iter()
        .filter(|row| row_matches(row, &query_lower))
        .collect()
}
