use serde::{Deserialize, Serialize};

/// Order direction as it appears on the wire.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

/// The symbol/side/quantity/price tuple the form submits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub symbol: String,
    pub side: Side,
    pub quantity: u64,
    pub price: f64,
}

/// What the engine is expected to answer with. Consumed opaquely: the relay
/// never deserializes into this, only tests and callers that read the outcome.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderResponse {
    pub status: String,
    pub message: String,
}
