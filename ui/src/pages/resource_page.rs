use yew::prelude::*;

use crate::columns::ListColumns;
use crate::components::{ErrorBox, LoadMoreControls, ResourceTable};
use crate::hooks::use_paginated_query;

/// List page for one resource, newest or alphabetical first depending on
/// the resource's default order.
#[function_component]
pub fn ResourcePage<R: ListColumns>() -> Html {
    let list = use_paginated_query::<R>();
    let context = R::TITLE.to_lowercase();

    let body = list.render(&context, |rows, is_loading, error| {
        html! {
            <>
                {error.map(|error| html! {
                    <div class="mb-4">
                        <ErrorBox
                            message={format!("Error loading {}: {}", context, error)}
                            on_retry={list.refresh.clone()}
                        />
                    </div>
                })}
                <ResourceTable<R> rows={rows.to_vec()} />
                <LoadMoreControls
                    loaded={rows.len()}
                    total={list.total_count}
                    has_more={list.has_more}
                    {is_loading}
                    on_load_more={list.load_more.clone()}
                    on_refresh={list.refresh.clone()}
                />
            </>
        }
    });

    html! {
        <div>
            <h2 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">
                {R::TITLE}
            </h2>
            {body}
        </div>
    }
}
