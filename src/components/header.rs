//! Top bar with back/home controls and the product search box.
//!
//! The search box edits `NavigationState::search_text`; Enter submits the
//! query, and clearing the box resets navigation to home.

use leptos::prelude::*;

use crate::state::navigation::NavigationState;

#[component]
pub fn Header() -> impl IntoView {
    let navigation = expect_context::<RwSignal<NavigationState>>();

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if value.trim().is_empty() {
            navigation.update(|n| n.handle_search(&value));
        } else {
            navigation.update(|n| n.search_text = value);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            let query = navigation.get_untracked().search_text;
            navigation.update(|n| n.handle_search(&query));
        }
    };

    view! {
        <header class="header">
            <div class="header__nav">
                <Show when=move || navigation.get().can_go_back()>
                    <button
                        class="btn header__back"
                        on:click=move |_| navigation.update(NavigationState::go_back)
                        aria-label="Go back"
                    >
                        "←"
                    </button>
                </Show>
                <button
                    class="btn header__logo"
                    on:click=move |_| navigation.update(NavigationState::go_home)
                    aria-label="Go home"
                >
                    "EcoStore"
                </button>
            </div>
            <input
                class="header__search"
                type="text"
                placeholder="Search products..."
                prop:value=move || navigation.get().search_text
                on:input=on_input
                on:keydown=on_keydown
            />
            <button class="btn header__home" on:click=move |_| navigation.update(NavigationState::go_home)>
                "Home"
            </button>
        </header>
    }
}
