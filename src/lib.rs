use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod waitlist;

pub mod pages {
    pub mod landing;
    pub mod not_found;
}

pub mod utils {
    pub mod banner;
    pub mod scroll;
}

use pages::landing::Landing;
use pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => html! { <Landing /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
