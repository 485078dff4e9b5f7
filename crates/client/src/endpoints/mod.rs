//! One module per backend resource.
//!
//! Each module extends [`crate::ShopLinkClient`] with the methods for one
//! resource family and owns the request/filter types those methods take.

pub mod analytics;
pub mod auth;
pub mod cart;
pub mod events;
pub mod followers;
pub mod notifications;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod shops;
pub mod users;
