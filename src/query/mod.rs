mod common;
pub use self::common::{Query, QueryCommon, DEFAULT_FIRST};

mod entitlement;
pub use self::entitlement::{DropsEntitlementQuery, UpdateEntitlementsRequest};
