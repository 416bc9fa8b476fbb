//! Black-box walkthroughs of the storefront page state.

use storefront_core::ProductId;
use storefront_web::{CheckoutAccess, SessionGate, StorefrontConfig, StorefrontState, Theme};

fn fresh_state() -> StorefrontState {
    storefront_observability::init();
    StorefrontState::new(&StorefrontConfig::default())
}

fn visible(state: &StorefrontState) -> Vec<(u32, String, String)> {
    state
        .visible_products()
        .iter()
        .map(|p| (p.id_typed().get(), p.name().to_string(), p.price().to_string()))
        .collect()
}

#[test]
fn searching_for_two_shows_only_product_two() {
    let mut state = fresh_state();
    state.set_query_input(Some("2"));
    assert_eq!(visible(&state), vec![(2, "Product 2".to_string(), "$20".to_string())]);
}

#[test]
fn clearing_the_search_restores_the_catalog_in_order() {
    let mut state = fresh_state();
    state.set_query_input(Some("product 3"));
    state.set_query_input(Some(""));
    assert_eq!(
        visible(&state),
        vec![
            (1, "Product 1".to_string(), "$10".to_string()),
            (2, "Product 2".to_string(), "$20".to_string()),
            (3, "Product 3".to_string(), "$30".to_string()),
        ]
    );
}

#[test]
fn checkout_opens_after_login_and_closes_after_logout() {
    let mut state = fresh_state();
    match state.checkout_access() {
        CheckoutAccess::Denied(reason) => {
            assert_eq!(reason.to_string(), "Please log in to access the Checkout page.");
        }
        CheckoutAccess::Granted => panic!("checkout must be closed before login"),
    }
    assert_eq!(state.session().toggle_label(), "Login");

    assert_eq!(state.toggle_session(), SessionGate::LoggedIn);
    assert_eq!(state.checkout_access(), CheckoutAccess::Granted);
    assert_eq!(state.session().toggle_label(), "Logout");

    state.toggle_session();
    assert!(!state.checkout_access().is_granted());
}

#[test]
fn likes_survive_login_but_not_being_filtered_out() {
    let mut state = fresh_state();
    let first = ProductId::new(1);
    assert_eq!(state.toggle_like(first), Ok(true));

    state.toggle_session();
    assert!(state.is_liked(first));

    state.set_query_input(Some("3"));
    state.set_query_input(None);
    assert!(!state.is_liked(first));
}

#[test]
fn configured_theme_reaches_the_page() {
    storefront_observability::init();
    let config = StorefrontConfig::from_json(r#"{"theme":"dark"}"#).unwrap();
    let state = StorefrontState::new(&config);
    assert_eq!(state.theme(), Theme::Dark);
}
