use crate::env_variable_utils::get_app_name;
use crate::models::{LookbackBounds, ScanConfig, ScanResponse};
use crate::scan::api::{execute_scan, fetch_scan_config};
use crate::scan::components::{EntryList, NoticeList, ScanControls, SearchProgress};
use crate::utils::format_iso8601_date;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <ViralTopicsApp /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back to the viral topics tool"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[function_component(ViralTopicsApp)]
pub fn viral_topics_app() -> Html {
    let scan_config = use_state(|| None::<ScanConfig>);
    let days = use_state(|| LookbackBounds::default().default);
    let scan_response = use_state(|| None::<ScanResponse>);
    let loading = use_state(|| false);
    let error_message = use_state(Option::<String>::default);

    // Load lookback bounds once; the form works with the defaults until then
    {
        let loaded = scan_config.clone();
        let error_message = error_message.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                fetch_scan_config(loaded, error_message).await;
            });
            || ()
        });
    }

    {
        let days = days.clone();
        use_effect_with((*scan_config).clone(), move |config| {
            if let Some(config) = config {
                days.set(config.lookback.default);
            }
            || ()
        });
    }

    let bounds = (*scan_config)
        .as_ref()
        .map(|c| c.lookback.clone())
        .unwrap_or_default();

    let on_days_change = {
        let days = days.clone();
        Callback::from(move |value: u32| days.set(value))
    };

    let on_fetch = {
        let days = days.clone();
        let scan_response = scan_response.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        Callback::from(move |_: ()| {
            let scan_response = scan_response.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();
            let requested_days = *days;

            loading.set(true);
            error_message.set(None);
            scan_response.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                execute_scan(requested_days, scan_response, error_message, loading).await;
            });
        })
    };

    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-2xl">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-6">
                    { get_app_name() }
                </h1>

                <ScanControls
                    days={*days}
                    bounds={bounds}
                    loading={*loading}
                    on_days_change={on_days_change}
                    on_fetch={on_fetch}
                />

                {
                    if let Some(config) = &*scan_config {
                        html! {
                            <p class="text-xs text-gray-500 text-center mb-4">
                                { format!(
                                    "{} keywords, channels under {} subscribers",
                                    config.keywords.len(),
                                    config.subscriber_threshold
                                ) }
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if *loading {
                        html! {
                            <p class="text-center text-gray-500 mb-4">{"Searching all keywords..."}</p>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(msg) = &*error_message {
                        html! {
                            <p class="text-red-600 text-center mb-4">{ format!("Error: {msg}") }</p>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(response) = &*scan_response {
                        html! {
                            <div>
                                <p class="text-xs text-gray-500 mb-2">
                                    { format!(
                                        "Videos published after {}",
                                        format_iso8601_date(&response.published_after)
                                    ) }
                                </p>
                                <SearchProgress searched={response.searched.clone()} />
                                <NoticeList notices={response.notices.clone()} />
                                <EntryList entries={response.entries.clone()} />
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
