//! Inline styles of the storefront view.

pub const APP: &str = "font-family: sans-serif; background: #f9f9f9; min-height: 100vh; \
     margin: 0; padding: 0;";

pub const HEADER: &str = "background: #282c34; min-height: 30vh; display: flex; \
     flex-direction: column; align-items: center; justify-content: center; color: white;";

pub const LOGO: &str = "height: 80px; margin-bottom: 16px;";

pub const LOGO_GLYPH: &str = "font-size: 64px;";

pub const HEADER_LINK: &str = "color: #61dafb; text-decoration: underline; margin-top: 8px;";

pub const SECTION: &str = "max-width: 600px; margin: 32px auto; background: #fff; \
     border-radius: 10px; box-shadow: 0 2px 8px rgba(0,0,0,0.07); padding: 32px;";

pub const TITLE: &str = "text-align: center; margin-bottom: 24px;";

pub const PRODUCT_CARD: &str = "border: 1px solid #eee; border-radius: 8px; padding: 16px; \
     margin: 12px 0; background: #fafbfc; box-shadow: 0 1px 2px rgba(0,0,0,0.03);";

pub const PRICE: &str = "font-size: 20px; margin: 8px 0;";

pub const INPUT: &str = "width: 100%; padding: 8px; margin: 0 0 20px 0; border-radius: 6px; \
     border: 1px solid #ccc; font-size: 16px;";

pub const DENIED: &str = "color: red; margin-top: 16px; font-weight: bold;";

pub const CHECKOUT_PANEL: &str =
    "margin-top: 32px; padding: 20px; background: #e9ffe9; border-radius: 8px;";

pub const CHECKOUT_HEADING: &str = "color: #28a745;";

const BUTTON: &str = "padding: 8px 20px; margin: 12px 0 0 0; border-radius: 6px; \
     border: none; color: white; font-weight: bold; cursor: pointer;";

const LIKE_IDLE: &str = "#007bff";
const LIKE_ACTIVE: &str = "#e63946";
const LOGIN: &str = "#28a745";
const LOGOUT: &str = "#6c757d";

/// Like button of a product card.
pub fn like_button(liked: bool) -> String {
    let background = if liked { LIKE_ACTIVE } else { LIKE_IDLE };
    format!("{BUTTON} background: {background}; transition: background 0.2s;")
}

/// Login/logout button; the colour names the action it performs next.
pub fn session_button(authenticated: bool) -> String {
    let background = if authenticated { LOGOUT } else { LOGIN };
    format!("{BUTTON} background: {background}; margin-top: 24px;")
}
