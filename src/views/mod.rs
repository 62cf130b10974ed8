pub mod pages;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(pages::index))
        // Solutions
        .route("/solutions/high-risk-accounts", get(pages::high_risk_accounts))
        .route("/solutions/payment-gateway", get(pages::payment_gateway))
        .route("/solutions/chargeback-prevention", get(pages::chargeback_prevention))
        .route("/solutions/offshore-processing", get(pages::offshore_processing))
        // Industries
        .route("/industries/e-commerce", get(pages::e_commerce))
        .route("/industries/cbd-hemp", get(pages::cbd_hemp))
        .route("/industries/adult-entertainment", get(pages::adult_entertainment))
        .route("/industries/forex-crypto", get(pages::forex_crypto))
        // Partners & others
        .route("/partners/partners", get(pages::partners))
        .route("/chatbots", get(pages::chatbots))
        .route("/services", get(pages::services))
}
