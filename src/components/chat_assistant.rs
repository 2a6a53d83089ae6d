//! Floating shopping assistant panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sends each turn to the assistant service with the product last opened as
//! context, and renders the conversation from shared `ChatState`.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::products::Product;
use crate::state::chat::{ChatRole, ChatState};
use crate::util::format::{format_message_time, format_price};
use crate::util::time::now_ms;

#[component]
pub fn ChatAssistant() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let selected_product = expect_context::<RwSignal<Option<Product>>>();
    let config = StoredValue::new(expect_context::<ApiConfig>());

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.loading));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let product = selected_product.get_untracked();
        let mut request = None;
        chat.update(|c| request = c.begin_turn(&text, product.as_ref(), now_ms()));
        let Some(request) = request else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::send_chat(&config, &request).await;
                chat.update(|c| c.complete_turn(result, now_ms()));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, request);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.get().loading;

    view! {
        <div class="chat-assistant">
            <Show
                when=move || chat.get().is_open
                fallback=move || {
                    view! {
                        <button class="btn chat-assistant__launcher" on:click=move |_| chat.update(ChatState::toggle)>
                            "Ask EcoBot"
                        </button>
                    }
                }
            >
                <div class="chat-assistant__panel">
                    <div class="chat-assistant__header">
                        <span>"EcoBot"</span>
                        <button
                            class="btn chat-assistant__close"
                            on:click=move |_| chat.update(ChatState::dismiss)
                            aria-label="Close assistant"
                        >
                            "×"
                        </button>
                    </div>
                    <div class="chat-assistant__messages" node_ref=messages_ref>
                        {move || {
                            let messages = chat.get().messages;
                            if messages.is_empty() {
                                return view! {
                                    <div class="chat-assistant__empty">
                                        "Ask me about sustainable products or greener alternatives."
                                    </div>
                                }
                                    .into_any();
                            }
                            messages
                                .into_iter()
                                .map(|msg| {
                                    let is_assistant = msg.role == ChatRole::Assistant;
                                    let suggestions = (!msg.recommendations.is_empty()).then(|| {
                                        view! {
                                            <ul class="chat-assistant__suggestions">
                                                {msg
                                                    .recommendations
                                                    .iter()
                                                    .map(|p| {
                                                        view! {
                                                            <li>{p.title.clone()} " · " {format_price(p.price)}</li>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        }
                                    });
                                    view! {
                                        <div
                                            class="chat-assistant__message"
                                            class:chat-assistant__message--assistant=is_assistant
                                        >
                                            <span class="chat-assistant__content">{msg.content.clone()}</span>
                                            {suggestions}
                                            <span class="chat-assistant__time">
                                                {format_message_time(msg.timestamp_ms)}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                        <Show when=move || chat.get().loading>
                            <div class="chat-assistant__typing">"Thinking..."</div>
                        </Show>
                    </div>
                    <div class="chat-assistant__input-row">
                        <input
                            class="chat-assistant__input"
                            type="text"
                            placeholder="Ask about this product..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button
                            class="btn chat-assistant__send"
                            on:click=move |_| do_send()
                            disabled=move || !can_send()
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
