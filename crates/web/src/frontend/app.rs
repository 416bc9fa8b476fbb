//! Leptos view tree of the storefront.

use leptos::*;

use storefront_products::Product;

use crate::config::StorefrontConfig;
use crate::session::CheckoutAccess;
use crate::state::{StorefrontState, like_label};
use crate::style;

/// Main application component.
#[component]
pub fn App(#[prop(optional)] config: StorefrontConfig) -> impl IntoView {
    let state = create_rw_signal(StorefrontState::new(&config));

    view! {
        <div style=style::APP>
            <Header/>
            <StorefrontSection state=state title=config.title/>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header style=style::HEADER>
            <div style=style::LOGO>
                <span role="img" aria-label="logo" style=style::LOGO_GLYPH>"🛒"</span>
            </div>
            <p>"Search the catalog, like what you see, log in to check out."</p>
            <a
                style=style::HEADER_LINK
                href="https://leptos.dev"
                target="_blank"
                rel="noopener noreferrer"
            >
                "Built with Leptos"
            </a>
        </header>
    }
}

/// Feature section: search, product cards, login toggle and checkout panel.
#[component]
fn StorefrontSection(state: RwSignal<StorefrontState>, title: String) -> impl IntoView {
    let visible = move || {
        state.with(|s| {
            s.visible_products()
                .into_iter()
                .cloned()
                .collect::<Vec<Product>>()
        })
    };

    view! {
        <div style=style::SECTION data-theme=move || state.with(|s| s.theme().as_str())>
            <h1 style=style::TITLE>{title}</h1>
            <ProductSearch on_search=move |query: String| state.update(|s| s.set_query(query))/>
            <div>
                <For
                    each=visible
                    key=|product| product.id_typed()
                    children=move |product| view! { <ProductCard product=product state=state/> }
                />
            </div>
            <SessionToggle state=state/>
            <CheckoutGate state=state/>
        </div>
    }
}

#[component]
fn ProductSearch<F>(on_search: F) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    let (query, set_query) = create_signal(String::new());

    view! {
        <input
            style=style::INPUT
            type="text"
            placeholder="Search products..."
            prop:value=query
            on:input=move |ev| {
                let value = event_target_value(&ev);
                set_query.set(value.clone());
                on_search(value);
            }
        />
    }
}

#[component]
fn ProductCard(product: Product, state: RwSignal<StorefrontState>) -> impl IntoView {
    let id = product.id_typed();
    let liked = move || state.with(|s| s.is_liked(id));

    let toggle = move |_| {
        state.update(|s| {
            if let Err(err) = s.toggle_like(id) {
                tracing::warn!(%err, product = %id, "like toggle rejected");
            }
        });
    };

    view! {
        <div style=style::PRODUCT_CARD>
            <h2>{product.name().to_string()}</h2>
            <p style=style::PRICE>{product.price().to_string()}</p>
            <button style=move || style::like_button(liked()) on:click=toggle>
                {move || like_label(liked())}
            </button>
        </div>
    }
}

#[component]
fn SessionToggle(state: RwSignal<StorefrontState>) -> impl IntoView {
    let session = move || state.with(StorefrontState::session);

    view! {
        <button
            style=move || style::session_button(session().is_authenticated())
            on:click=move |_| {
                state.update(|s| {
                    s.toggle_session();
                });
            }
        >
            {move || session().toggle_label()}
        </button>
    }
}

/// Renders the checkout panel only while the session gate is open.
#[component]
fn CheckoutGate(state: RwSignal<StorefrontState>) -> impl IntoView {
    move || match state.with(StorefrontState::checkout_access) {
        CheckoutAccess::Denied(reason) => view! {
            <div style=style::DENIED>{reason.to_string()}</div>
        }
        .into_view(),
        CheckoutAccess::Granted => view! {
            <div style=style::CHECKOUT_PANEL>
                <h2 style=style::CHECKOUT_HEADING>{CheckoutAccess::HEADING}</h2>
                <p>{CheckoutAccess::BODY}</p>
            </div>
        }
        .into_view(),
    }
}
