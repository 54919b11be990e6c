//! Постраничный вывод. Страницы нумеруются с 1.

/// Количество страниц, минимум 1 (чтобы не показывать "Page 1 of 0")
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    item_count.div_ceil(page_size).max(1)
}

/// Диапазон индексов для страницы `page`, обрезанный по границам
pub fn page_range(item_count: usize, page: usize, page_size: usize) -> std::ops::Range<usize> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(item_count);
    let end = start.saturating_add(page_size).min(item_count);
    start..end
}

pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_range(items.len(), page, page_size)]
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 20), 1);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(45, 20), 3);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<usize> = (0..45).collect();
        assert_eq!(page_slice(&items, 1, 20), &items[0..20]);
        assert_eq!(page_slice(&items, 3, 20), &items[40..45]);
        assert!(page_slice(&items, 4, 20).is_empty());
        assert!(page_slice::<usize>(&[], 1, 20).is_empty());
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }
}
