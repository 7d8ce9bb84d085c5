use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Out of bounds"}</h1>
            <p>{"That page isn't on the court."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">
                {"Back to PickleCue"}
            </Link<Route>>
        </div>
    }
}
