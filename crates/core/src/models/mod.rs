//! Backend-owned entity shapes.
//!
//! These models mirror what the ShopLink backend returns; the client holds
//! transient copies only and has no authority over the canonical record.
//! Lifecycle for every entity: created/mutated/deleted exclusively through
//! API calls, refetched after mutation.

pub mod analytics;
pub mod cart;
pub mod event;
pub mod notification;
pub mod order;
pub mod product;
pub mod review;
pub mod shop;
pub mod user;
pub(crate) mod wire;

pub use analytics::*;
pub use cart::*;
pub use event::*;
pub use notification::*;
pub use order::*;
pub use product::*;
pub use review::*;
pub use shop::*;
pub use user::*;
