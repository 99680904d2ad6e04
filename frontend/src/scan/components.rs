use crate::models::{AggregatedEntry, LookbackBounds, Notice, NoticeLevel};
use crate::utils::{format_number, parse_days};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScanControlsProps {
    pub days: u32,
    pub bounds: LookbackBounds,
    pub loading: bool,
    pub on_days_change: Callback<u32>,
    pub on_fetch: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct SearchProgressProps {
    pub searched: Vec<String>,
}

#[derive(Properties, PartialEq)]
pub struct NoticeListProps {
    pub notices: Vec<Notice>,
}

#[derive(Properties, PartialEq)]
pub struct EntryCardProps {
    pub entry: AggregatedEntry,
}

#[derive(Properties, PartialEq)]
pub struct EntryListProps {
    pub entries: Vec<AggregatedEntry>,
}

#[function_component(ScanControls)]
pub fn scan_controls(props: &ScanControlsProps) -> Html {
    let on_input = {
        let on_days_change = props.on_days_change.clone();
        let bounds = props.bounds.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            if let Some(days) = parse_days(&input_value, &bounds) {
                on_days_change.emit(days);
            }
        })
    };

    let on_submit = {
        let on_fetch = props.on_fetch.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_fetch.emit(());
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex items-end gap-4 mb-6">
            <label class="flex-grow text-gray-700">
                <span class="block mb-1">
                    { format!("Enter Days to Search ({}-{}):", props.bounds.min, props.bounds.max) }
                </span>
                <input
                    type="number"
                    class="w-full p-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                    min={props.bounds.min.to_string()}
                    max={props.bounds.max.to_string()}
                    value={props.days.to_string()}
                    oninput={on_input}
                    disabled={props.loading}
                />
            </label>
            <button
                type="submit"
                class="bg-blue-600 text-white p-3 rounded-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                disabled={props.loading}
            >
                { if props.loading { "Fetching..." } else { "Fetch Data" } }
            </button>
        </form>
    }
}

fn notice_classes(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "bg-green-100 text-green-800",
        NoticeLevel::Warning => "bg-yellow-100 text-yellow-800",
        NoticeLevel::Error => "bg-red-100 text-red-800",
    }
}

/// Keywords the backend got through, in order.
#[function_component(SearchProgress)]
pub fn search_progress(props: &SearchProgressProps) -> Html {
    html! {
        <ul class="text-sm text-gray-600 mb-4 space-y-1">
            { for props.searched.iter().map(|keyword| html! {
                <li>{"Searching for: "}<strong>{ keyword }</strong></li>
            })}
        </ul>
    }
}

#[function_component(NoticeList)]
pub fn notice_list(props: &NoticeListProps) -> Html {
    html! {
        <div class="space-y-2 mb-6">
            { for props.notices.iter().map(|notice| html! {
                <p class={classes!("p-3", "rounded", "text-sm", notice_classes(notice.level))}>
                    { &notice.message }
                </p>
            })}
        </div>
    }
}

#[function_component(EntryCard)]
pub fn entry_card(props: &EntryCardProps) -> Html {
    let entry = &props.entry;
    html! {
        <div class="p-4 bg-gray-100 rounded-lg">
            <h3 class="text-lg font-semibold text-gray-800 mb-2">{ &entry.title }</h3>
            <p class="text-sm text-gray-600 mb-2">{ &entry.description }</p>
            <div class="text-sm flex flex-wrap gap-4">
                <a href={entry.url.clone()} target="_blank" class="text-blue-600 hover:underline">
                    {"Watch Video ↗"}
                </a>
                <span>{ format!("Views: {}", format_number(entry.views)) }</span>
                <span>{ format!("Subscribers: {}", format_number(entry.subscribers)) }</span>
            </div>
        </div>
    }
}

#[function_component(EntryList)]
pub fn entry_list(props: &EntryListProps) -> Html {
    html! {
        <div class="divide-y divide-gray-300">
            { for props.entries.iter().map(|entry| html! {
                <div class="py-4">
                    <EntryCard entry={entry.clone()} />
                </div>
            })}
        </div>
    }
}
