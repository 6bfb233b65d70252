pub mod client;
pub mod error;
pub mod gateway;

pub use client::DownstreamClient;
pub use error::DownstreamError;
pub use gateway::{HttpInventoryGateway, HttpPaymentGateway, InventoryGateway, PaymentGateway};
