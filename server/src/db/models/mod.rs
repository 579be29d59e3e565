//! Storage models
//!
//! One module per table, each with its entity struct plus the Create/Update
//! payloads the API accepts. Update payloads are allow-listed: every field
//! is optional and anything outside the struct is rejected by serde.

pub mod blog;
pub mod enquiry;
pub mod menu_item;
pub mod newsletter;
pub mod order;
pub mod reservation;
pub(crate) mod serde_helpers;
pub mod site_settings;
pub mod suite;
pub mod user;

pub use blog::{Blog, BlogCreate, BlogUpdate};
pub use enquiry::{Enquiry, EnquiryCreate};
pub use menu_item::{MenuItem, MenuItemCreate, MenuItemUpdate};
pub use newsletter::NewsletterLead;
pub use order::{
    FulfillmentStatus, NewOrder, NewOrderItem, Order, OrderDetail, OrderItemDetail,
    PaymentMethod, PaymentStatus,
};
pub use reservation::{Reservation, ReservationCreate};
pub use site_settings::{SiteSettings, SiteSettingsUpdate};
pub use suite::Suite;
pub use user::{User, UserProfile};
