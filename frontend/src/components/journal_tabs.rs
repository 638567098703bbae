use yew::prelude::*;

use crate::i18n::current::home as t;

#[derive(Properties, PartialEq)]
pub struct JournalTabsProps {
    /// Journal names in display order.
    pub journals: Vec<String>,
    /// `None` selects every journal.
    pub selected: Option<String>,
    pub on_select: Callback<Option<String>>,
}

#[function_component(JournalTabs)]
pub fn journal_tabs(props: &JournalTabsProps) -> Html {
    let tab = |label: String, value: Option<String>| {
        let active = props.selected == value;
        let onclick = {
            let on_select = props.on_select.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(value.clone()))
        };
        html! {
            <button
                type="button"
                role="tab"
                aria-selected={active.to_string()}
                class={classes!("journal-tab", active.then_some("journal-tab--active"))}
                {onclick}
            >
                { label }
            </button>
        }
    };

    html! {
        <nav class={classes!("journal-tabs", "flex", "flex-wrap", "gap-2")} role="tablist">
            { tab(t::ALL_JOURNALS.to_string(), None) }
            { for props.journals.iter().map(|journal| tab(journal.clone(), Some(journal.clone()))) }
        </nav>
    }
}
