use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Rows currently loaded
    pub loaded: usize,
    /// Server-reported total
    pub total: u64,
    pub has_more: bool,
    #[prop_or(false)]
    pub is_loading: bool,
    pub on_load_more: Callback<()>,
    pub on_refresh: Callback<()>,
}

#[function_component]
pub fn LoadMoreControls(props: &Props) -> Html {
    let Props {
        loaded,
        total,
        has_more,
        is_loading,
        ..
    } = *props;

    let on_load_more = {
        let on_load_more = props.on_load_more.clone();
        Callback::from(move |_: MouseEvent| on_load_more.emit(()))
    };
    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    let load_more_disabled = !has_more || is_loading;

    let button_class = |disabled: bool| {
        if disabled {
            "px-4 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-400 \
             dark:text-neutral-500 bg-neutral-100 dark:bg-neutral-800 \
             cursor-not-allowed"
        } else {
            "px-4 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-700 \
             dark:text-neutral-300 bg-white dark:bg-neutral-700 \
             hover:bg-neutral-50 dark:hover:bg-neutral-600 \
             transition-colors duration-200"
        }
    };

    html! {
        <div class="flex items-center justify-between mt-4 pt-4 \
                    border-t border-neutral-200 dark:border-neutral-700">
            <button
                onclick={on_refresh}
                disabled={is_loading}
                class={button_class(is_loading)}
            >
                {if is_loading { "Loading..." } else { "Refresh" }}
            </button>

            <span class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!("{} / {} loaded", loaded, total)}
            </span>

            <button
                onclick={on_load_more}
                disabled={load_more_disabled}
                class={button_class(load_more_disabled)}
            >
                {"Load More"}
            </button>
        </div>
    }
}
