mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::{ApiError, Error};
pub use self::query::{
    DropsEntitlementQuery, Query, QueryCommon, UpdateEntitlementsRequest, DEFAULT_FIRST,
};
