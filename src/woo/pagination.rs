const MAX_PAGE_ITEMS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
	Page(usize),
	Ellipsis,
}

pub fn total_pages(total: usize, per_page: usize) -> usize {
	match per_page {
		0 => 0,
		per_page => (total + per_page - 1) / per_page,
	}
}

/// Page buttons for a 1-based `current` page: every page when there are few,
/// otherwise the first and last pages around a three page window.
pub fn page_numbers(current: usize, total_pages: usize) -> Vec<PageItem> {
	if total_pages <= MAX_PAGE_ITEMS {
		return (1..=total_pages).map(PageItem::Page).collect();
	}

	let (mut start, mut end) = (current.saturating_sub(1).max(2), (current + 1).min(total_pages - 1));
	if current <= 3 {
		start = 2;
		end = 4.min(total_pages - 1);
	}
	if current >= total_pages - 2 {
		start = total_pages.saturating_sub(3).max(2);
		end = total_pages - 1;
	}

	let mut items = vec![PageItem::Page(1)];
	if start > 2 {
		items.push(PageItem::Ellipsis);
	}
	items.extend((start..=end).map(PageItem::Page));
	if end < total_pages - 1 {
		items.push(PageItem::Ellipsis);
	}
	items.push(PageItem::Page(total_pages));
	items
}

#[cfg(test)]
mod tests {
	use super::{PageItem::*, *};

	#[test]
	fn counts_pages() {
		assert_eq!(total_pages(0, 10), 0);
		assert_eq!(total_pages(10, 10), 1);
		assert_eq!(total_pages(45, 10), 5);
		assert_eq!(total_pages(3, 0), 0);
	}

	#[test]
	fn few_pages_are_all_listed() {
		assert_eq!(page_numbers(1, 0), vec![]);
		assert_eq!(page_numbers(2, 3), vec![Page(1), Page(2), Page(3)]);
		assert_eq!(page_numbers(5, 5), (1..=5).map(Page).collect::<Vec<_>>());
	}

	#[test]
	fn windows_near_the_start() {
		assert_eq!(page_numbers(1, 10), vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]);
		assert_eq!(page_numbers(3, 10), vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]);
	}

	#[test]
	fn windows_in_the_middle() {
		assert_eq!(
			page_numbers(5, 10),
			vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
		);
	}

	#[test]
	fn windows_near_the_end() {
		assert_eq!(page_numbers(10, 10), vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]);
		assert_eq!(page_numbers(8, 10), vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]);
		assert_eq!(page_numbers(3, 6), vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(6)]);
	}
}
