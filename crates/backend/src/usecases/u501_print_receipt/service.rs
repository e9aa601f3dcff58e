use crate::domain::a005_order::service::get_order;
use crate::shared::data::storage::get_storage;
use crate::shared::error::PosError;

use super::{render_customer_receipt, render_kitchen_ticket};

pub async fn customer_receipt(number: usize) -> Result<String, PosError> {
    let submitted = get_order(number).await?;
    let business = &get_storage()?.business;
    Ok(render_customer_receipt(
        &submitted.order,
        submitted.number,
        business,
    ))
}

pub async fn kitchen_ticket(number: usize) -> Result<String, PosError> {
    let submitted = get_order(number).await?;
    let width = get_storage()?.business.receipt_width;
    Ok(render_kitchen_ticket(
        &submitted.order,
        submitted.number,
        width,
    ))
}
