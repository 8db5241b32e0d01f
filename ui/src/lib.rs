use payloads::{
    APIClient, BackendConfig, Candidate, Client, HrContact, Job, Process, Sale,
    UserAccount,
};
use yew::prelude::*;
use yew_router::prelude::*;

mod columns;
mod components;
mod hooks;
mod logs;
mod pages;

use components::layout::MainLayout;
use pages::{NotFoundPage, ResourcePage};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .or_else(|| {
            // Fallback to same origin
            web_sys::window().and_then(|w| w.location().origin().ok())
        })
        .unwrap_or_default();

    let config =
        BackendConfig::new(address, option_env!("BACKEND_API_KEY").unwrap_or(""));
    let config = match option_env!("BACKEND_ACCESS_TOKEN") {
        Some(token) => config.with_access_token(token),
        None => config,
    };
    APIClient::new(config)
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <MainLayout>
                <Switch<Route> render={switch} />
            </MainLayout>
        </BrowserRouter>
    }
}

#[derive(Clone, Copy, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/candidates")]
    Candidates,
    #[at("/clients")]
    Clients,
    #[at("/jobs")]
    Jobs,
    #[at("/hr-contacts")]
    HrContacts,
    #[at("/sales")]
    Sales,
    #[at("/processes")]
    Processes,
    #[at("/users")]
    Users,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Navigation entries, in header order.
    pub const RESOURCES: [(Route, &'static str); 7] = [
        (Route::Candidates, "Candidates"),
        (Route::Clients, "Clients"),
        (Route::Jobs, "Jobs"),
        (Route::HrContacts, "HR Contacts"),
        (Route::Sales, "Sales"),
        (Route::Processes, "Processes"),
        (Route::Users, "Users"),
    ];
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::Candidates} /> },
        Route::Candidates => html! { <ResourcePage<Candidate> /> },
        Route::Clients => html! { <ResourcePage<Client> /> },
        Route::Jobs => html! { <ResourcePage<Job> /> },
        Route::HrContacts => html! { <ResourcePage<HrContact> /> },
        Route::Sales => html! { <ResourcePage<Sale> /> },
        Route::Processes => html! { <ResourcePage<Process> /> },
        Route::Users => html! { <ResourcePage<UserAccount> /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
