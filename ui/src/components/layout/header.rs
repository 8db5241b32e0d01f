use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Header() -> Html {
    let current = use_route::<Route>();

    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <h1 class="text-xl font-semibold text-gray-900 dark:text-white">{"Back Office"}</h1>
                    </div>
                    <nav class="flex items-center space-x-4">
                        {for Route::RESOURCES.iter().map(|(route, label)| {
                            let class = if current == Some(*route) {
                                "text-sm font-medium text-gray-900 dark:text-white"
                            } else {
                                "text-sm text-gray-500 dark:text-gray-400 hover:text-gray-900 dark:hover:text-white"
                            };
                            html! {
                                <Link<Route> to={*route} classes={classes!(class)}>
                                    {*label}
                                </Link<Route>>
                            }
                        })}
                    </nav>
                </div>
            </div>
        </header>
    }
}
