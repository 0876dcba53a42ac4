use crate::woo::{page_numbers, PageItem};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct PaginationProps {
	pub current: usize,
	pub total_pages: usize,
	pub on_select: Callback<usize>,
	#[prop_or_default]
	pub disabled: bool,
}

#[function_component]
pub fn Pagination(PaginationProps { current, total_pages, on_select, disabled }: &PaginationProps) -> Html {
	if *total_pages <= 1 {
		return html!();
	}
	let (current, total_pages, locked) = (*current, *total_pages, *disabled);
	let link = |page: usize, label: Html, disabled: bool, active: bool| {
		let disabled = disabled || locked;
		let onclick = on_select.reform(move |_: MouseEvent| page);
		html! {
			<li class={classes!("page-item", disabled.then_some("disabled"), active.then_some("active"))}>
				<button class="page-link" {onclick} {disabled}>{label}</button>
			</li>
		}
	};
	let items = page_numbers(current, total_pages).into_iter().map(|item| match item {
		PageItem::Page(page) => link(page, html!({ page.to_string() }), false, page == current),
		PageItem::Ellipsis => html!(<li class="page-item disabled"><span class="page-link">{"…"}</span></li>),
	});
	html! {
		<nav aria-label="Product pages">
			<ul class="pagination justify-content-center">
				{link(current.saturating_sub(1), html!(<i class="bi bi-chevron-left" />), current <= 1, false)}
				{for items}
				{link(current + 1, html!(<i class="bi bi-chevron-right" />), current >= total_pages, false)}
			</ul>
		</nav>
	}
}
