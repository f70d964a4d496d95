use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Refunded => "Refunded",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "warning",
            OrderStatus::Paid | OrderStatus::Shipped => "primary",
            OrderStatus::Delivered => "success",
            OrderStatus::Cancelled | OrderStatus::Refunded => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl ShippingAddress {
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.line1.as_str()];
        if let Some(line2) = self.line2.as_deref().filter(|l| !l.is_empty()) {
            parts.push(line2);
        }
        parts.push(self.city.as_str());
        parts.push(self.postal_code.as_str());
        parts.push(self.country.as_str());
        parts.join(", ")
    }
}

/// One line item of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderLine {
    pub fn amount(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub status: OrderStatus,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub shipping_address: Option<ShippingAddress>,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    pub subtotal: f64,
    #[serde(default)]
    pub shipping: f64,
    #[serde(default)]
    pub discount: f64,
    pub total: f64,
    pub currency: String,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    pub fn lines_total(&self) -> f64 {
        self.lines.iter().map(OrderLine::amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order_and_totals() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": "o-1",
                "orderNumber": "SO-1001",
                "status": "paid",
                "customerName": "Ann Lee",
                "customerEmail": "ann@example.com",
                "shippingAddress": {
                    "line1": "1 Main St",
                    "city": "Springfield",
                    "postalCode": "12345",
                    "country": "US"
                },
                "lines": [
                    { "productId": "p-1", "name": "Mug", "quantity": 2, "unitPrice": 7.5 },
                    { "productId": "p-2", "name": "Tea", "quantity": 1, "unitPrice": 5.0 }
                ],
                "subtotal": 20.0,
                "total": 24.9,
                "shipping": 4.9,
                "currency": "USD",
                "placedAt": "2026-10-02T12:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(order.lines_total(), 20.0);
        assert_eq!(
            order.shipping_address.unwrap().one_line(),
            "1 Main St, Springfield, 12345, US"
        );
    }
}
