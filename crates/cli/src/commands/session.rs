//! Session and checkout commands.

use luxe_storefront::config::StoreConfig;
use luxe_storefront::models::DeliveryAddress;
use luxe_storefront::state::AppState;
use luxe_storefront::store::KvStore;

/// Log in and persist the session.
pub fn login<S: KvStore>(
    state: &mut AppState<S>,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    state.login(email, password)?;
    Ok(())
}

/// Create an account and persist the session.
pub fn signup<S: KvStore>(
    state: &mut AppState<S>,
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
    role: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let role = role.parse()?;
    state.signup(name, email, password, confirm_password, role)?;
    Ok(())
}

/// Log out and clear the persisted session.
pub fn logout<S: KvStore>(state: &mut AppState<S>) {
    state.logout();
}

/// Place an order for the current cart.
pub fn checkout<S: KvStore>(
    state: &mut AppState<S>,
    address: DeliveryAddress,
    payment: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let payment_method = payment.parse()?;
    state.begin_checkout()?;
    let order = state.place_order(address, payment_method)?;
    println!(
        "Order {} placed: {} item(s), total {}",
        order.id,
        order.items.len(),
        super::money(order.total),
    );
    Ok(())
}

/// Wipe the session and every persisted state key.
pub fn reset<S: KvStore>(
    state: &mut AppState<S>,
    config: &StoreConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    state.reset()?;
    println!("State cleared from {}", config.state_dir.display());
    Ok(())
}
