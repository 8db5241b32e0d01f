use yew::prelude::*;

use crate::columns::ListColumns;

#[derive(Properties, PartialEq)]
pub struct Props<R: ListColumns> {
    pub rows: Vec<R>,
}

#[function_component]
pub fn ResourceTable<R: ListColumns>(props: &Props<R>) -> Html {
    if props.rows.is_empty() {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {format!("No {} found", R::TITLE.to_lowercase())}
                </p>
            </div>
        };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-neutral-200 \
                          dark:divide-neutral-700">
                <thead class="bg-neutral-50 dark:bg-neutral-800">
                    <tr>
                        {for R::HEADERS.iter().map(|header| html! {
                            <th class="px-4 py-2 text-left text-xs \
                                       font-medium uppercase tracking-wider \
                                       text-neutral-500 dark:text-neutral-400">
                                {*header}
                            </th>
                        })}
                    </tr>
                </thead>
                <tbody class="divide-y divide-neutral-200 \
                              dark:divide-neutral-700">
                    {for props.rows.iter().map(|row| html! {
                        <tr key={row.key()}>
                            {for row.cells().into_iter().map(|cell| html! {
                                <td class="px-4 py-2 text-sm whitespace-nowrap">
                                    {cell}
                                </td>
                            })}
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
