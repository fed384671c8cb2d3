use crate::models::PaymentParams;

/// Suggested fare for a trip, factoring gas consumption and a
/// wear-and-tear buffer on top of a flat base fare.
///
/// Negative inputs are clamped to zero before computing. The result is
/// rounded to cents.
pub fn suggest_payment(distance_miles: f64, gas_price: f64, params: &PaymentParams) -> f64 {
    let distance = distance_miles.max(0.0);
    let gas_price = gas_price.max(0.0);

    let fuel_cost = (distance / params.fuel_efficiency_mpg) * gas_price;
    let wear_buffer = distance * params.wear_rate_per_mile;

    round_to_cents(params.base_fare + fuel_cost + wear_buffer)
}

#[inline]
fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
