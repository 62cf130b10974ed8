use askama::Template;
use axum::response::Html;

use crate::error::AppError;

#[derive(Template)]
#[template(path = "base/index.html")]
pub struct IndexTemplate;

#[derive(Template)]
#[template(path = "solutions/high-risk-accounts.html")]
pub struct HighRiskAccountsTemplate;

#[derive(Template)]
#[template(path = "solutions/payment-gateway.html")]
pub struct PaymentGatewayTemplate;

#[derive(Template)]
#[template(path = "solutions/chargeback-prevention.html")]
pub struct ChargebackPreventionTemplate;

#[derive(Template)]
#[template(path = "solutions/offshore-processing.html")]
pub struct OffshoreProcessingTemplate;

#[derive(Template)]
#[template(path = "industries/e-commerce.html")]
pub struct ECommerceTemplate;

#[derive(Template)]
#[template(path = "industries/cbd-hemp.html")]
pub struct CbdHempTemplate;

#[derive(Template)]
#[template(path = "industries/adult-entertainment.html")]
pub struct AdultEntertainmentTemplate;

#[derive(Template)]
#[template(path = "industries/forex-crypto.html")]
pub struct ForexCryptoTemplate;

#[derive(Template)]
#[template(path = "partners/partners.html")]
pub struct PartnersTemplate;

#[derive(Template)]
#[template(path = "chatbots.html")]
pub struct ChatbotsTemplate;

#[derive(Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate;

fn render(template: impl Template) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

pub async fn index() -> Result<Html<String>, AppError> {
    render(IndexTemplate)
}

pub async fn high_risk_accounts() -> Result<Html<String>, AppError> {
    render(HighRiskAccountsTemplate)
}

pub async fn payment_gateway() -> Result<Html<String>, AppError> {
    render(PaymentGatewayTemplate)
}

pub async fn chargeback_prevention() -> Result<Html<String>, AppError> {
    render(ChargebackPreventionTemplate)
}

pub async fn offshore_processing() -> Result<Html<String>, AppError> {
    render(OffshoreProcessingTemplate)
}

pub async fn e_commerce() -> Result<Html<String>, AppError> {
    render(ECommerceTemplate)
}

pub async fn cbd_hemp() -> Result<Html<String>, AppError> {
    render(CbdHempTemplate)
}

pub async fn adult_entertainment() -> Result<Html<String>, AppError> {
    render(AdultEntertainmentTemplate)
}

pub async fn forex_crypto() -> Result<Html<String>, AppError> {
    render(ForexCryptoTemplate)
}

pub async fn partners() -> Result<Html<String>, AppError> {
    render(PartnersTemplate)
}

pub async fn chatbots() -> Result<Html<String>, AppError> {
    render(ChatbotsTemplate)
}

pub async fn services() -> Result<Html<String>, AppError> {
    render(ServicesTemplate)
}
