use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub message: AttrValue,
    /// Shows a Retry button when set
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component]
pub fn ErrorBox(props: &Props) -> Html {
    let retry = props.on_retry.clone().map(|on_retry| {
        let onclick = Callback::from(move |_: MouseEvent| on_retry.emit(()));
        html! {
            <button
                {onclick}
                class="px-3 py-1 rounded-md text-sm font-medium \
                       text-red-700 dark:text-red-300 border \
                       border-red-300 dark:border-red-700 \
                       hover:bg-red-100 dark:hover:bg-red-900/40"
            >
                {"Retry"}
            </button>
        }
    });

    html! {
        <div class="flex items-center justify-between gap-4 p-4 rounded-md \
                    bg-red-50 dark:bg-red-900/20 border border-red-200 \
                    dark:border-red-800">
            <p class="text-sm text-red-700 dark:text-red-400">
                {props.message.clone()}
            </p>
            {retry}
        </div>
    }
}
