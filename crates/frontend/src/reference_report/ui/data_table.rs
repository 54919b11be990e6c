use contracts::reference_report::Row;
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

/// Класс строки: четные строки выделяются фоном
pub fn row_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "reference-report__row reference-report__row--alternate"
    } else {
        "reference-report__row"
    }
}

/// Строка заголовков выводится, только если на странице есть строки
pub fn has_header_row(headers: &[String]) -> bool {
    !headers.is_empty()
}

/// Таблица с заголовками по ключам первой строки страницы
#[component]
pub fn DataTable(
    #[prop(into)] headers: Signal<Vec<String>>,
    #[prop(into)] rows: Signal<Vec<Row>>,
) -> impl IntoView {
    view! {
        <div class="reference-report__table">
            <Table>
                <Show when=move || headers.with(|h| has_header_row(h))>
                    <TableHeader>
                        <TableRow>
                            {move || {
                                headers
                                    .get()
                                    .into_iter()
                                    .map(|key| view! { <TableHeaderCell>{key}</TableHeaderCell> })
                                    .collect_view()
                            }}
                        </TableRow>
                    </TableHeader>
                </Show>
                <TableBody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, row)| {
                                let cells: Vec<String> =
                                    row.values().map(|value| value.to_string()).collect();
                                view! {
                                    <TableRow class=row_class(index).to_string()>
                                        {cells
                                            .into_iter()
                                            .map(|text| {
                                                view! {
                                                    <TableCell>
                                                        <TableCellLayout>{text}</TableCellLayout>
                                                    </TableCell>
                                                }
                                            })
                                            .collect_view()}
                                    </TableRow>
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_class_alternates() {
        assert!(row_class(0).contains("--alternate"));
        assert!(!row_class(1).contains("--alternate"));
        assert!(row_class(2).contains("--alternate"));
    }

    #[test]
    fn test_header_row_absent_for_empty_page() {
        assert!(!has_header_row(&[]));
        assert!(has_header_row(&["ResourceName".to_string()]));
    }
}
