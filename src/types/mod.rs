mod response;
pub use self::response::{Pagination, RateLimit, Response};

mod entitlement;
pub use self::entitlement::{
    DropsEntitlements, Entitlement, EntitlementID, EntitlementStatus, EntitlementStatuses,
    EntitlementUpdateStatus, FulfillmentStatus,
};
