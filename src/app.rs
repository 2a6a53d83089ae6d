//! Root application component with context providers and the page switch.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::chat_assistant::ChatAssistant;
use crate::components::header::Header;
use crate::config::ApiConfig;
use crate::pages::{category::CategoryPage, home::HomePage, search::SearchPage};
use crate::products::Product;
use crate::state::chat::ChatState;
use crate::state::navigation::{NavigationState, PageState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides navigation, chat, the product last opened (chat context), and
/// endpoint configuration to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let navigation = RwSignal::new(NavigationState::default());
    let chat = RwSignal::new(ChatState::default());
    let selected_product = RwSignal::new(None::<Product>);

    provide_context(navigation);
    provide_context(chat);
    provide_context(selected_product);
    provide_context(ApiConfig::from_build());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::check_health(&ApiConfig::from_build()).await {
            Ok(()) => log::info!("backend connection established"),
            Err(err) => log::error!("backend connection failed: {err}"),
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/ecostore.css"/>
        <Title text="EcoStore"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=Storefront/>
            </Routes>
        </Router>
    }
}

/// Header, the active page from the navigation stack, and the assistant panel.
#[component]
fn Storefront() -> impl IntoView {
    let navigation = expect_context::<RwSignal<NavigationState>>();

    // Search-box edits must not remount the page.
    let current = Memo::new(move |_| navigation.get().current);

    let page = move || match current.get() {
        PageState::Home => view! { <HomePage/> }.into_any(),
        PageState::Search { query } => view! { <SearchPage query=query/> }.into_any(),
        PageState::Category { category } => view! { <CategoryPage category=category/> }.into_any(),
    };

    view! {
        <div class="storefront">
            <Header/>
            <main class="storefront__page">{page}</main>
            <ChatAssistant/>
        </div>
    }
}
