//! Page state of the storefront feature section.
//!
//! Every piece of state has one owner (this struct) and is mutated only
//! through `&mut self`, one input event at a time.

use std::collections::{BTreeMap, BTreeSet};

use storefront_core::{DomainError, DomainResult, Entity, ProductId};
use storefront_products::{Catalog, Product, SearchQuery, filter};

use crate::config::StorefrontConfig;
use crate::session::{CheckoutAccess, SessionGate};
use crate::types::Theme;

/// Label of a product card's like button.
pub fn like_label(liked: bool) -> &'static str {
    if liked { "Liked ❤️" } else { "Like 🤍" }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontState {
    catalog: Catalog,
    query: SearchQuery,
    /// Liked flags of the cards currently rendered. A card that leaves the
    /// visible list is destroyed, so its entry is dropped with it.
    liked: BTreeMap<ProductId, bool>,
    session: SessionGate,
    theme: Theme,
}

impl StorefrontState {
    /// State over the fixed demo catalog.
    pub fn new(config: &StorefrontConfig) -> Self {
        Self::with_catalog(Catalog::demo(), config)
    }

    pub fn with_catalog(catalog: Catalog, config: &StorefrontConfig) -> Self {
        Self {
            catalog,
            query: SearchQuery::default(),
            liked: BTreeMap::new(),
            session: SessionGate::default(),
            theme: config.theme,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<SearchQuery>) {
        self.query = query.into();
        let visible: BTreeSet<ProductId> =
            self.visible_products().into_iter().map(|p| *p.id()).collect();
        self.liked.retain(|id, _| visible.contains(id));
        tracing::debug!(
            query = self.query.as_str(),
            visible = visible.len(),
            "search query updated"
        );
    }

    /// Raw input from the search box; a missing value clears the query.
    pub fn set_query_input(&mut self, input: Option<&str>) {
        self.set_query(SearchQuery::from_input(input));
    }

    /// Catalog entries matching the current query, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        filter(&self.catalog, &self.query)
    }

    /// Flip the liked flag of a rendered card and return the new value.
    ///
    /// Only visible products have a card, so any other id is `NotFound`.
    pub fn toggle_like(&mut self, id: ProductId) -> DomainResult<bool> {
        let rendered = self
            .catalog
            .get(id)
            .is_some_and(|product| self.query.matches(product));
        if !rendered {
            return Err(DomainError::not_found(format!("product card {id}")));
        }

        let liked = self.liked.entry(id).or_insert(false);
        *liked = !*liked;
        tracing::debug!(product = %id, liked = *liked, "like toggled");
        Ok(*liked)
    }

    pub fn is_liked(&self, id: ProductId) -> bool {
        self.liked.get(&id).copied().unwrap_or(false)
    }

    pub fn session(&self) -> SessionGate {
        self.session
    }

    /// Flip the session gate and return the new state.
    pub fn toggle_session(&mut self) -> SessionGate {
        let session = self.session.toggle();
        tracing::debug!(authenticated = session.is_authenticated(), "session toggled");
        session
    }

    pub fn checkout_access(&self) -> CheckoutAccess {
        CheckoutAccess::for_session(self.session)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        tracing::debug!(from = %self.theme, to = %theme, "theme changed");
        self.theme = theme;
    }
}

impl Default for StorefrontState {
    fn default() -> Self {
        Self::new(&StorefrontConfig::default())
    }
}
