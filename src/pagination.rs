use yew::{classes, function_component, html, Callback, Html, Properties};

/// One entry in the pagination strip. `target` is `None` for a disabled
/// Previous/Next control.
#[derive(Clone, PartialEq, Eq)]
pub enum PageControl {
    Previous { target: Option<u32> },
    Number { page: u32, current: bool },
    Next { target: Option<u32> },
}

/// Pages needed to hold `total` results.
pub fn page_count(total: u64, per_page: u32) -> u32 {
    total.div_ceil(u64::from(per_page)) as u32
}

/// The strip is a pure function of the listing metadata; nothing is
/// rendered when everything fits on one page.
pub fn page_controls(total: u64, page: u32, per_page: u32) -> Vec<PageControl> {
    let pages = page_count(total, per_page);
    if pages <= 1 {
        return Vec::new();
    }

    let mut controls = Vec::with_capacity(pages as usize + 2);
    controls.push(PageControl::Previous {
        target: (page > 1).then(|| page - 1),
    });
    for number in 1..=pages {
        controls.push(PageControl::Number {
            page: number,
            current: number == page,
        });
    }
    controls.push(PageControl::Next {
        target: (page < pages).then(|| page + 1),
    });

    controls
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub on_select: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let item = |label: String, target: Option<u32>, state: &'static str| {
        let on_select = props.on_select.clone();
        let onclick = target.map(|page| Callback::from(move |_| on_select.emit(page)));

        html! {
          <li class={classes!("page-item", state)}>
            <a class="page-link" href="#" {onclick}>{label}</a>
          </li>
        }
    };

    page_controls(props.total, props.page, props.per_page)
        .into_iter()
        .map(|control| match control {
            PageControl::Previous { target } => item(
                "Previous".into(),
                target,
                if target.is_none() { "disabled" } else { "" },
            ),
            PageControl::Number { page, current } => {
                item(page.to_string(), Some(page), if current { "active" } else { "" })
            }
            PageControl::Next { target } => item(
                "Next".into(),
                target,
                if target.is_none() { "disabled" } else { "" },
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(total: u64, page: u32) -> String {
        let renderer = LocalServerRenderer::<Pagination>::with_props(PaginationProps {
            total,
            page,
            per_page: 20,
            on_select: Callback::noop(),
        })
        .hydratable(false);

        block_on(renderer.render())
    }

    #[test]
    fn forty_five_results_make_three_pages() {
        assert_eq!(page_count(45, 20), 3);
    }

    #[test]
    fn exact_multiples_do_not_add_a_page() {
        assert_eq!(page_count(40, 20), 2);
        assert_eq!(page_count(0, 20), 0);
    }

    #[test]
    fn single_page_renders_no_controls() {
        assert!(page_controls(20, 1, 20).is_empty());
        assert!(page_controls(0, 1, 20).is_empty());
    }

    #[test]
    fn first_page_disables_previous() {
        let controls = page_controls(45, 1, 20);

        assert_eq!(controls.len(), 5);
        assert!(matches!(controls[0], PageControl::Previous { target: None }));
        assert!(matches!(controls[4], PageControl::Next { target: Some(2) }));
    }

    #[test]
    fn last_page_disables_next() {
        let controls = page_controls(45, 3, 20);

        assert!(matches!(controls[0], PageControl::Previous { target: Some(2) }));
        assert!(matches!(controls[4], PageControl::Next { target: None }));
    }

    #[test]
    fn numbers_mark_the_current_page() {
        let controls = page_controls(45, 2, 20);

        assert!(matches!(controls[1], PageControl::Number { page: 1, current: false }));
        assert!(matches!(controls[2], PageControl::Number { page: 2, current: true }));
        assert!(matches!(controls[3], PageControl::Number { page: 3, current: false }));
    }

    #[test]
    fn strip_markup_disables_the_edges() {
        let first = render(45, 1);
        assert!(first.contains("Previous"));
        assert!(first.contains("Next"));
        assert_eq!(first.matches(">1<").count(), 1);
        assert_eq!(first.matches("page-item disabled").count(), 1);

        let last = render(45, 3);
        assert_eq!(last.matches("page-item disabled").count(), 1);
        assert_eq!(last.matches("page-item active").count(), 1);
    }
}
