use web_sys::HtmlInputElement;
use yew::events::InputEvent;
use yew::{function_component, html, Callback, Html, Properties, TargetCast};

use crate::types::Filters;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub filters: Filters,
    pub on_change: Callback<Filters>,
    pub on_apply: Callback<()>,
}

/// Search criteria inputs. The draft lives in the controller, so a reload
/// always sees the values as currently typed, applied or not.
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let edit = |set: fn(&mut Filters, String)| {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();

        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = filters.clone();
            set(&mut updated, input.value());
            on_change.emit(updated);
        })
    };

    let on_apply = props.on_apply.clone();

    html! {
      <div class="filters">
        <input
          id="search"
          type="text"
          placeholder="Search subject or sender"
          value={props.filters.search.clone()}
          oninput={edit(|f, v| f.search = v)}
        />
        <input
          id="sender"
          type="text"
          placeholder="Sender"
          value={props.filters.sender.clone()}
          oninput={edit(|f, v| f.sender = v)}
        />
        <input
          id="from-date"
          type="date"
          value={props.filters.from_date.clone()}
          oninput={edit(|f, v| f.from_date = v)}
        />
        <input
          id="to-date"
          type="date"
          value={props.filters.to_date.clone()}
          oninput={edit(|f, v| f.to_date = v)}
        />
        <button id="apply-filters" onclick={Callback::from(move |_| on_apply.emit(()))}>
          {"Apply filters"}
        </button>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn inputs_mirror_the_draft() {
        let renderer = LocalServerRenderer::<FilterBar>::with_props(FilterBarProps {
            filters: Filters {
                search: "invoice".into(),
                sender: "alice".into(),
                from_date: "2024-01-01".into(),
                to_date: String::new(),
            },
            on_change: Callback::noop(),
            on_apply: Callback::noop(),
        })
        .hydratable(false);

        let markup = block_on(renderer.render());

        for id in ["search", "sender", "from-date", "to-date", "apply-filters"] {
            assert!(markup.contains(&format!("id=\"{id}\"")), "missing {id}");
        }
        assert!(markup.contains("invoice"));
        assert!(markup.contains("2024-01-01"));
    }
}
