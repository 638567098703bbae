use std::collections::BTreeSet;

use scicover_shared::Selection;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::i18n::{current::archive as t, fill_one};

#[derive(Properties, PartialEq)]
pub struct ArchivePickerProps {
    /// Years with data, most recent first.
    pub years: Vec<i32>,
    /// Zero-based months with data under the current year selection.
    pub months_with_data: BTreeSet<u32>,
    pub year: Selection<i32>,
    pub month: Selection<u32>,
    pub on_year: Callback<Selection<i32>>,
    pub on_month: Callback<Selection<u32>>,
}

/// Year dropdown plus a twelve-button month strip. Months without data are
/// disabled.
#[function_component(ArchivePicker)]
pub fn archive_picker(props: &ArchivePickerProps) -> Html {
    let on_year_change = {
        let on_year = props.on_year.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };
            let year = select.value().parse::<i32>().ok();
            on_year.emit(Selection::from(year));
        })
    };

    let month_button = |label: String, month: Selection<u32>| {
        let active = props.month == month;
        let enabled = match month {
            Selection::All => true,
            Selection::Only(value) => props.months_with_data.contains(&value),
        };
        let onclick = {
            let on_month = props.on_month.clone();
            Callback::from(move |_: MouseEvent| on_month.emit(month))
        };
        html! {
            <button
                type="button"
                class={classes!(
                    "month-chip",
                    active.then_some("month-chip--active"),
                    (!enabled).then_some("month-chip--empty")
                )}
                disabled={!enabled}
                aria-pressed={active.to_string()}
                {onclick}
            >
                { label }
            </button>
        }
    };

    let selected_year = match props.year {
        Selection::All => String::new(),
        Selection::Only(year) => year.to_string(),
    };

    html! {
        <div class={classes!("archive-picker", "flex", "flex-col", "gap-4")}>
            <label class={classes!("flex", "items-center", "gap-3")}>
                <span>{ t::YEAR_LABEL }</span>
                <select class="archive-year-select" onchange={on_year_change}>
                    <option value="" selected={selected_year.is_empty()}>{ t::ALL_YEARS }</option>
                    { for props.years.iter().map(|year| {
                        let value = year.to_string();
                        html! {
                            <option value={value.clone()} selected={value == selected_year}>
                                { value.clone() }
                            </option>
                        }
                    }) }
                </select>
            </label>
            <div class={classes!("flex", "flex-wrap", "items-center", "gap-2")} role="group" aria-label={t::MONTH_LABEL}>
                { month_button(t::ALL_MONTHS.to_string(), Selection::All) }
                { for (0..12u32).map(|month| {
                    month_button(fill_one(t::MONTH_TEMPLATE, month + 1), Selection::Only(month))
                }) }
            </div>
        </div>
    }
}
