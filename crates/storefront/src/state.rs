//! Top-level application state and its update operations.
//!
//! One explicit [`AppState`] struct owns everything the UI shows: the
//! catalog, the cart, the wishlist, the session, and the page-scoped
//! transient state (current page, selected product/category, search
//! query). Views read through accessors; every mutation is a discrete
//! operation that commits the transition, saves the affected keys with an
//! explicit store call, and pushes user-facing notifications into an
//! outbox.
//!
//! Persistence is best-effort: a failed save is logged and the session
//! continues in memory; a corrupt or unreadable value at startup falls
//! back to the default state silently.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info, warn};

use luxe_core::{PaymentMethod, ProductId, UserRole};

use crate::cart::{Cart, CartTotals};
use crate::catalog::{self, FacetSelection, SortKey};
use crate::checkout;
use crate::config::StoreConfig;
use crate::error::{AppError, Result};
use crate::fixtures;
use crate::models::{CartLine, DeliveryAddress, Order, Product, Review, User};
use crate::nav::{guard, NavOutcome, Page};
use crate::notify::Notification;
use crate::services::auth::AuthService;
use crate::store::{keys, KvStore};
use crate::wishlist::{ToggleOutcome, Wishlist};

/// The whole application state, owned by the top-level controller.
pub struct AppState<S> {
    config: StoreConfig,
    store: S,

    // Read-only reference data
    products: Vec<Product>,
    reviews: Vec<Review>,
    demo_orders: Vec<Order>,

    // Mutable session state
    cart: Cart,
    wishlist: Wishlist,
    session: Option<User>,

    // Page-scoped transient state
    page: Page,
    selected_product: Option<ProductId>,
    selected_category: Option<String>,
    search_query: String,

    notifications: Vec<Notification>,
}

impl<S: KvStore> AppState<S> {
    /// Build the application state, loading persisted cart, wishlist, and
    /// session from the store. Missing or corrupt values fall back to the
    /// default empty/unauthenticated state.
    pub fn new(config: StoreConfig, store: S) -> Self {
        let mut state = Self {
            config,
            store,
            products: fixtures::products(),
            reviews: fixtures::reviews(),
            demo_orders: fixtures::orders(),
            cart: Cart::new(),
            wishlist: Wishlist::new(),
            session: None,
            page: Page::Home,
            selected_product: None,
            selected_category: None,
            search_query: String::new(),
            notifications: Vec::new(),
        };
        state.load();
        state
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The full product catalog.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The active cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Derived pricing for the active cart.
    #[must_use]
    pub fn cart_totals(&self) -> CartTotals {
        self.cart.totals(&self.config)
    }

    /// The wishlist.
    #[must_use]
    pub const fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// The logged-in user, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&User> {
        self.session.as_ref()
    }

    /// Whether a user is logged in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// The current page.
    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    /// The category selected for the products page, if any.
    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// The active free-text search query.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// The product shown on the detail page, if any.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        let id = self.selected_product.as_ref()?;
        self.products.iter().find(|p| &p.id == id)
    }

    /// Reviews for one product.
    #[must_use]
    pub fn reviews_for(&self, product_id: &ProductId) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| &r.product_id == product_id)
            .collect()
    }

    /// Historical demo orders (profile and admin pages).
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.demo_orders
    }

    /// The product listing view: active search query, then facets, then
    /// sort. The selected category (from navigation) is merged into the
    /// facet selection.
    #[must_use]
    pub fn listing(&self, facets: &FacetSelection, sort: SortKey) -> Vec<Product> {
        let mut facets = facets.clone();
        if let Some(category) = &self.selected_category {
            if !facets.categories.iter().any(|c| c == category) {
                facets.categories.push(category.clone());
            }
        }
        let hits = catalog::filter_by_text(&self.products, &self.search_query);
        let hits = catalog::filter_by_facets(&hits, &facets);
        catalog::sort_by(&hits, sort)
    }

    /// Drain the pending notifications.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Navigate to a destination, applying the role guard and resetting
    /// page-scoped transient state.
    ///
    /// Navigating to the products page sets the selected category (and
    /// clears the search query when a category is given); every other
    /// destination clears both.
    pub fn navigate(&mut self, destination: Page, category: Option<&str>) -> NavOutcome {
        let outcome = guard(destination, self.session.as_ref());
        match outcome {
            NavOutcome::RedirectToLogin => {
                self.notifications.push(Notification::error(
                    "Please login to continue",
                    "You need to be logged in to access this page",
                ));
                self.page = Page::Login;
                return outcome;
            }
            NavOutcome::Denied => {
                self.notifications.push(Notification::error(
                    "Access Denied",
                    "You need admin privileges to access this page",
                ));
                return outcome;
            }
            NavOutcome::Permitted => {}
        }

        self.page = destination;
        if destination == Page::Products {
            self.selected_category = category.map(ToOwned::to_owned);
            if category.is_some() {
                self.search_query.clear();
            }
        } else {
            self.selected_category = None;
            self.search_query.clear();
        }
        outcome
    }

    /// Free-text search: jumps to the products page with the query active
    /// and any category filter cleared.
    pub fn search(&mut self, query: &str) {
        self.search_query = query.to_owned();
        self.selected_category = None;
        self.page = Page::Products;
        self.notifications.push(Notification::success(
            "Searching...",
            format!("Finding products matching \"{query}\""),
        ));
    }

    /// Open the detail page for a product.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the product is not in the catalog.
    pub fn view_product(&mut self, product_id: &ProductId) -> Result<()> {
        let product = self.find_product(product_id)?;
        self.selected_product = Some(product.id.clone());
        self.page = Page::ProductDetails;
        Ok(())
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add a product to the cart, merging with an existing line on a
    /// matching (product, color, size) key.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the product is not in the catalog.
    pub fn add_to_cart(
        &mut self,
        product_id: &ProductId,
        quantity: u32,
        color: Option<&str>,
        size: Option<&str>,
    ) -> Result<()> {
        let product = self.find_product(product_id)?.clone();
        self.cart.add(&product, quantity, color, size);
        self.save_cart();
        self.notifications.push(Notification::success(
            "Added to cart!",
            format!("{} has been added to your cart.", product.name),
        ));
        Ok(())
    }

    /// Set the quantity for a product's cart lines, clamped to 1.
    pub fn update_cart_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        self.cart.update_quantity(product_id, quantity);
        self.save_cart();
    }

    /// Remove a product from the cart (all variants).
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        if self.cart.remove(product_id) {
            self.save_cart();
            self.notifications
                .push(Notification::success_brief("Removed from cart"));
        }
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Add the product to the wishlist, or remove it if already saved.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the product is not in the catalog.
    pub fn toggle_wishlist(&mut self, product_id: &ProductId) -> Result<()> {
        let product = self.find_product(product_id)?.clone();
        let notification = match self.wishlist.toggle(&product) {
            ToggleOutcome::Added => Notification::success(
                "Added to wishlist",
                format!("{} has been added to your wishlist", product.name),
            ),
            ToggleOutcome::Removed => Notification::success(
                "Removed from wishlist",
                format!("{} has been removed from your wishlist", product.name),
            ),
        };
        self.save_wishlist();
        self.notifications.push(notification);
        Ok(())
    }

    /// Remove a product from the wishlist.
    pub fn remove_from_wishlist(&mut self, product_id: &ProductId) {
        let name = self
            .wishlist
            .entries()
            .iter()
            .find(|p| &p.id == product_id)
            .map(|p| p.name.clone());
        if self.wishlist.remove(product_id) {
            self.save_wishlist();
            self.notifications.push(Notification::success(
                "Removed from wishlist",
                format!(
                    "{} has been removed from your wishlist",
                    name.unwrap_or_default()
                ),
            ));
        }
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Start checkout. Requires a logged-in user; guests are redirected to
    /// the login page.
    ///
    /// # Errors
    ///
    /// Returns `AppError::LoginRequired` when unauthenticated.
    pub fn begin_checkout(&mut self) -> Result<()> {
        if !self.is_authenticated() {
            self.notifications.push(Notification::error(
                "Please login to continue",
                "You need to be logged in to checkout",
            ));
            self.page = Page::Login;
            return Err(AppError::LoginRequired("checkout".to_owned()));
        }
        self.page = Page::Checkout;
        Ok(())
    }

    /// Place the order: snapshot the cart, clear it, and land on the home
    /// page.
    ///
    /// # Errors
    ///
    /// Returns `AppError::LoginRequired` when unauthenticated, or
    /// `AppError::Validation` for an empty cart or incomplete address. On
    /// error the cart is untouched and the page does not change.
    pub fn place_order(
        &mut self,
        address: DeliveryAddress,
        payment_method: PaymentMethod,
    ) -> Result<Order> {
        let Some(user) = self.session.clone() else {
            return Err(AppError::LoginRequired("checkout".to_owned()));
        };
        let order = match checkout::place_order(
            &mut self.cart,
            &user,
            address,
            payment_method,
            &self.config,
        ) {
            Ok(order) => order,
            Err(err) => {
                self.notifications
                    .push(Notification::error_brief(err.user_message()));
                return Err(err);
            }
        };

        self.save_cart();
        self.page = Page::Home;
        self.notifications
            .push(Notification::success_brief("Order placed successfully!"));
        Ok(order)
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Mock login. On success the session is persisted and the user lands
    /// on the admin dashboard (admin role) or home page.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Auth` for invalid form input; the matching
    /// error notification is pushed and nothing else changes.
    pub fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let user = match AuthService::login(email, password) {
            Ok(user) => user,
            Err(err) => {
                self.notifications
                    .push(Notification::error_brief(err.user_message()));
                return Err(err.into());
            }
        };
        let welcome = match user.role {
            UserRole::Admin => Notification::success(
                "Welcome Admin!",
                "You have been logged in to the admin dashboard.",
            ),
            UserRole::Customer => {
                Notification::success("Welcome back!", "You have successfully logged in.")
            }
        };
        self.start_session(user, welcome);
        Ok(())
    }

    /// Mock signup. Same session handling as [`AppState::login`].
    ///
    /// # Errors
    ///
    /// Returns `AppError::Auth` for invalid form input.
    pub fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
        role: UserRole,
    ) -> Result<()> {
        let user = match AuthService::signup(name, email, password, confirm_password, role) {
            Ok(user) => user,
            Err(err) => {
                self.notifications
                    .push(Notification::error_brief(err.user_message()));
                return Err(err.into());
            }
        };
        let welcome = match user.role {
            UserRole::Admin => {
                Notification::success("Admin Account Created!", "Welcome to LUXE Admin Dashboard!")
            }
            UserRole::Customer => Notification::success("Account created!", "Welcome to LUXE!"),
        };
        self.start_session(user, welcome);
        Ok(())
    }

    /// Wipe the session: empty cart, wishlist, and session, and remove
    /// every persisted key. Unlike the fire-and-forget saves, this
    /// surfaces storage failures so the caller knows stale state may
    /// remain on disk.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Store` if a key cannot be removed.
    pub fn reset(&mut self) -> Result<()> {
        self.cart.clear();
        self.wishlist = Wishlist::new();
        self.session = None;
        self.page = Page::Home;
        self.selected_product = None;
        self.selected_category = None;
        self.search_query.clear();
        for key in [keys::CART, keys::WISHLIST, keys::USER, keys::AUTH] {
            self.store.remove(key)?;
        }
        info!("State reset");
        Ok(())
    }

    /// Log out: clear and unpersist the session, land on the home page.
    pub fn logout(&mut self) {
        self.session = None;
        self.clear_session_keys();
        self.page = Page::Home;
        self.notifications
            .push(Notification::success("Logged out successfully", "Come back soon!"));
        info!("Session cleared");
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn find_product(&self, product_id: &ProductId) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| &p.id == product_id)
            .ok_or_else(|| AppError::NotFound(format!("Product {product_id}")))
    }

    fn start_session(&mut self, user: User, welcome: Notification) {
        self.page = if user.role.is_admin() {
            Page::Admin
        } else {
            Page::Home
        };
        self.session = Some(user);
        self.save_session();
        self.notifications.push(welcome);
    }

    /// Load persisted state. Read or parse failures fall back to the
    /// default empty/unauthenticated state; a parse failure is logged but
    /// never surfaced.
    fn load(&mut self) {
        if let Some(lines) = self.read_json::<Vec<CartLine>>(keys::CART) {
            self.cart = Cart::from_lines(lines);
        }
        if let Some(entries) = self.read_json::<Vec<Product>>(keys::WISHLIST) {
            self.wishlist = Wishlist::from_entries(entries);
        }
        let authenticated = self
            .store
            .get(keys::AUTH)
            .ok()
            .flatten()
            .is_some_and(|flag| flag == "true");
        if authenticated {
            self.session = self.read_json::<User>(keys::USER);
        }
        info!(
            cart_lines = self.cart.len(),
            wishlist_entries = self.wishlist.len(),
            authenticated = self.session.is_some(),
            "Loaded persisted state"
        );
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(value) => value?,
            Err(e) => {
                warn!(key, error = %e, "Failed to read persisted state, using defaults");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Corrupt persisted state, using defaults");
                None
            }
        }
    }

    /// Fire-and-forget write of one key. A failure (e.g., storage quota)
    /// is logged and never surfaced to the user, never retried; the
    /// session continues with in-memory state only.
    fn write_json<T: Serialize>(&mut self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                error!(key, error = %e, "Failed to serialize state");
                return;
            }
        };
        if let Err(e) = self.store.set(key, &json) {
            error!(key, error = %e, "Failed to persist state, continuing in memory");
        }
    }

    fn save_cart(&mut self) {
        let lines = self.cart.lines().to_vec();
        self.write_json(keys::CART, &lines);
    }

    fn save_wishlist(&mut self) {
        let entries = self.wishlist.entries().to_vec();
        self.write_json(keys::WISHLIST, &entries);
    }

    fn save_session(&mut self) {
        if let Some(user) = self.session.clone() {
            self.write_json(keys::USER, &user);
            if let Err(e) = self.store.set(keys::AUTH, "true") {
                error!(error = %e, "Failed to persist auth flag");
            }
        }
    }

    fn clear_session_keys(&mut self) {
        for key in [keys::USER, keys::AUTH] {
            if let Err(e) = self.store.remove(key) {
                error!(key, error = %e, "Failed to clear persisted session");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::dec;

    use super::*;
    use crate::notify::Severity;
    use crate::store::MemoryStore;

    fn fresh_state() -> AppState<MemoryStore> {
        AppState::new(StoreConfig::default(), MemoryStore::new())
    }

    fn logged_in_state(email: &str) -> AppState<MemoryStore> {
        let mut state = fresh_state();
        state.login(email, "secret1").unwrap();
        state.take_notifications();
        state
    }

    #[test]
    fn test_fresh_state_defaults() {
        let state = fresh_state();
        assert_eq!(state.page(), Page::Home);
        assert!(state.cart().is_empty());
        assert!(state.wishlist().is_empty());
        assert!(!state.is_authenticated());
        assert_eq!(state.products().len(), 12);
    }

    #[test]
    fn test_add_to_cart_merges_and_notifies() {
        let mut state = fresh_state();
        let id = ProductId::new("1");
        state
            .add_to_cart(&id, 2, Some("Red"), Some("M"))
            .unwrap();
        state.add_to_cart(&id, 1, Some("Red"), Some("M")).unwrap();

        assert_eq!(state.cart().len(), 1);
        assert_eq!(state.cart().lines()[0].quantity, 3);

        let notifications = state.take_notifications();
        assert_eq!(notifications.len(), 2);
        assert!(notifications
            .iter()
            .all(|n| n.severity == Severity::Success && n.title == "Added to cart!"));
    }

    #[test]
    fn test_add_to_cart_unknown_product() {
        let mut state = fresh_state();
        let result = state.add_to_cart(&ProductId::new("nope"), 1, None, None);
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(state.cart().is_empty());
    }

    #[test]
    fn test_end_to_end_merge_scenario() {
        // §8 end-to-end: qty 2 + qty 1 same variant merge, then a second
        // variant appends.
        let mut state = fresh_state();
        let id = ProductId::new("1");

        state.add_to_cart(&id, 2, Some("Red"), Some("M")).unwrap();
        state.add_to_cart(&id, 1, Some("Red"), Some("M")).unwrap();
        assert_eq!(state.cart().len(), 1);
        assert_eq!(state.cart().lines()[0].quantity, 3);
        assert_eq!(state.cart_totals().subtotal, dec!(2999) * dec!(3));

        state.add_to_cart(&id, 1, Some("Blue"), Some("M")).unwrap();
        assert_eq!(state.cart().len(), 2);
    }

    #[test]
    fn test_navigate_to_products_sets_category_and_clears_search() {
        let mut state = fresh_state();
        state.search("leather");
        assert_eq!(state.page(), Page::Products);
        assert_eq!(state.search_query(), "leather");

        state.navigate(Page::Products, Some("Shoes"));
        assert_eq!(state.selected_category(), Some("Shoes"));
        assert_eq!(state.search_query(), "");
    }

    #[test]
    fn test_navigate_away_clears_transient_state() {
        let mut state = fresh_state();
        state.search("leather");
        state.navigate(Page::Home, None);
        assert_eq!(state.page(), Page::Home);
        assert_eq!(state.search_query(), "");
        assert!(state.selected_category().is_none());
    }

    #[test]
    fn test_navigate_admin_unauthenticated_redirects_and_preserves_state() {
        let mut state = fresh_state();
        state.add_to_cart(&ProductId::new("1"), 1, None, None).unwrap();
        state.toggle_wishlist(&ProductId::new("2")).unwrap();
        state.take_notifications();

        let outcome = state.navigate(Page::Admin, None);
        assert_eq!(outcome, NavOutcome::RedirectToLogin);
        assert_eq!(state.page(), Page::Login);
        assert_eq!(state.cart().len(), 1);
        assert_eq!(state.wishlist().len(), 1);

        let notifications = state.take_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].severity, Severity::Error);
    }

    #[test]
    fn test_navigate_admin_as_customer_denied_in_place() {
        let mut state = logged_in_state("priya@example.com");
        state.navigate(Page::Products, None);
        state.take_notifications();

        let outcome = state.navigate(Page::Admin, None);
        assert_eq!(outcome, NavOutcome::Denied);
        assert_eq!(state.page(), Page::Products);

        let notifications = state.take_notifications();
        assert_eq!(notifications[0].title, "Access Denied");
    }

    #[test]
    fn test_login_admin_lands_on_dashboard() {
        let mut state = fresh_state();
        state.login("admin@luxe.example", "secret1").unwrap();
        assert_eq!(state.page(), Page::Admin);
        assert!(state.is_authenticated());
    }

    #[test]
    fn test_login_failure_notifies_and_aborts() {
        let mut state = fresh_state();
        let result = state.login("not-an-email", "secret1");
        assert!(result.is_err());
        assert!(!state.is_authenticated());
        assert_eq!(state.page(), Page::Home);

        let notifications = state.take_notifications();
        assert_eq!(notifications[0].title, "Please enter a valid email address");
    }

    #[test]
    fn test_session_persists_across_restart() {
        let mut state = fresh_state();
        state.login("priya@example.com", "secret1").unwrap();
        state.add_to_cart(&ProductId::new("4"), 1, None, None).unwrap();
        let store = state.store.clone();

        let restored = AppState::new(StoreConfig::default(), store);
        assert!(restored.is_authenticated());
        assert_eq!(restored.session().unwrap().name, "priya");
        assert_eq!(restored.cart().len(), 1);
    }

    #[test]
    fn test_logout_clears_persisted_session() {
        let mut state = fresh_state();
        state.login("priya@example.com", "secret1").unwrap();
        state.logout();
        assert_eq!(state.page(), Page::Home);
        let store = state.store.clone();

        let restored = AppState::new(StoreConfig::default(), store);
        assert!(!restored.is_authenticated());
    }

    #[test]
    fn test_corrupt_persisted_cart_falls_back_to_empty() {
        let mut store = MemoryStore::new();
        store.insert(keys::CART, "{not json");
        store.insert(keys::WISHLIST, "[1, 2, 3]");
        let state = AppState::new(StoreConfig::default(), store);
        assert!(state.cart().is_empty());
        assert!(state.wishlist().is_empty());
    }

    #[test]
    fn test_auth_flag_false_ignores_saved_user() {
        let mut store = MemoryStore::new();
        let user = serde_json::json!({
            "id": "user-1",
            "name": "ghost",
            "email": "ghost@example.com",
            "role": "customer"
        });
        store.insert(keys::USER, user.to_string());
        store.insert(keys::AUTH, "false");
        let state = AppState::new(StoreConfig::default(), store);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_begin_checkout_requires_login() {
        let mut state = fresh_state();
        state.add_to_cart(&ProductId::new("1"), 1, None, None).unwrap();
        state.take_notifications();

        let result = state.begin_checkout();
        assert!(matches!(result, Err(AppError::LoginRequired(_))));
        assert_eq!(state.page(), Page::Login);
        assert_eq!(state.cart().len(), 1);
    }

    #[test]
    fn test_place_order_clears_cart_and_returns_home() {
        let mut state = logged_in_state("priya@example.com");
        state.add_to_cart(&ProductId::new("1"), 2, None, None).unwrap();
        state.begin_checkout().unwrap();
        state.take_notifications();

        let address = DeliveryAddress {
            name: "Priya Sharma".to_owned(),
            phone: "9876543210".to_owned(),
            street: "14 MG Road".to_owned(),
            city: "Bengaluru".to_owned(),
            state: "Karnataka".to_owned(),
            pincode: "560001".to_owned(),
        };
        let order = state.place_order(address, PaymentMethod::Card).unwrap();

        assert!(state.cart().is_empty());
        assert_eq!(state.page(), Page::Home);
        assert_eq!(order.items.len(), 1);

        // The cleared cart is persisted too
        let store = state.store.clone();
        let restored = AppState::new(StoreConfig::default(), store);
        assert!(restored.cart().is_empty());
    }

    #[test]
    fn test_place_order_incomplete_address_keeps_cart() {
        let mut state = logged_in_state("priya@example.com");
        state.add_to_cart(&ProductId::new("1"), 1, None, None).unwrap();
        state.begin_checkout().unwrap();
        state.take_notifications();

        let result = state.place_order(DeliveryAddress::default(), PaymentMethod::Card);
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(state.cart().len(), 1);
        assert_eq!(state.page(), Page::Checkout);

        let notifications = state.take_notifications();
        assert_eq!(notifications[0].severity, Severity::Error);
    }

    #[test]
    fn test_wishlist_toggle_persists() {
        let mut state = fresh_state();
        state.toggle_wishlist(&ProductId::new("3")).unwrap();
        let store = state.store.clone();

        let restored = AppState::new(StoreConfig::default(), store);
        assert!(restored.wishlist().contains(&ProductId::new("3")));
    }

    #[test]
    fn test_reset_wipes_memory_and_store() {
        let mut state = fresh_state();
        state.login("priya@example.com", "secret1").unwrap();
        state.add_to_cart(&ProductId::new("1"), 1, None, None).unwrap();
        state.toggle_wishlist(&ProductId::new("2")).unwrap();

        state.reset().unwrap();
        assert!(state.cart().is_empty());
        assert!(state.wishlist().is_empty());
        assert!(!state.is_authenticated());
        assert_eq!(state.page(), Page::Home);

        let restored = AppState::new(StoreConfig::default(), state.store.clone());
        assert!(restored.cart().is_empty());
        assert!(!restored.is_authenticated());
    }

    #[test]
    fn test_remove_from_wishlist_notifies_once() {
        let mut state = fresh_state();
        state.toggle_wishlist(&ProductId::new("3")).unwrap();
        state.take_notifications();

        state.remove_from_wishlist(&ProductId::new("3"));
        assert!(state.wishlist().is_empty());
        assert_eq!(state.take_notifications().len(), 1);

        // Removing an absent product is silent
        state.remove_from_wishlist(&ProductId::new("3"));
        assert!(state.take_notifications().is_empty());
    }

    #[test]
    fn test_listing_merges_selected_category() {
        let mut state = fresh_state();
        state.navigate(Page::Products, Some("Shoes"));
        let listing = state.listing(&FacetSelection::default(), SortKey::Featured);
        assert!(!listing.is_empty());
        assert!(listing.iter().all(|p| p.category == "Shoes"));
    }

    #[test]
    fn test_listing_applies_search_query() {
        let mut state = fresh_state();
        state.search("chronograph");
        let listing = state.listing(&FacetSelection::default(), SortKey::Featured);
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].brand, "Chronos");
    }

    #[test]
    fn test_view_product_sets_detail_page() {
        let mut state = fresh_state();
        state.view_product(&ProductId::new("6")).unwrap();
        assert_eq!(state.page(), Page::ProductDetails);
        assert_eq!(state.selected_product().unwrap().id, ProductId::new("6"));

        assert!(state.view_product(&ProductId::new("404")).is_err());
    }

    #[test]
    fn test_reviews_for_product() {
        let state = fresh_state();
        let reviews = state.reviews_for(&ProductId::new("1"));
        assert_eq!(reviews.len(), 2);
    }
}
