use serde::Serialize;
use url::Url;

use crate::types::{EntitlementID, FulfillmentStatus};

use super::common::{Query, QueryCommon};

/// Filters for listing drops entitlements.
///
/// Filters combine: setting both a user and a game returns the entitlements
/// linking that user to that game. With no filters set, all entitlements
/// awarded by the organization behind the credentials are returned.
#[derive(Default)]
pub struct DropsEntitlementQuery {
    pub common: QueryCommon,
    /// Specific entitlement ids to look up. Each id is sent as its own `id`
    /// query parameter.
    pub ids: Vec<EntitlementID>,
    /// Restricts results to entitlements awarded to this user.
    pub user_id: Option<String>,
    /// Restricts results to entitlements tied to this game.
    pub game_id: Option<String>,
}

impl Query for DropsEntitlementQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        for id in self.ids.iter() {
            url.query_pairs_mut().append_pair("id", id.as_str());
        }
        if let Some(user_id) = &self.user_id {
            url.query_pairs_mut()
                .append_pair("user_id", user_id.as_str());
        }
        if let Some(game_id) = &self.game_id {
            url.query_pairs_mut()
                .append_pair("game_id", game_id.as_str());
        }
        url
    }
}

impl DropsEntitlementQuery {
    pub fn with_id(mut self, id: &str) -> Self {
        self.ids.push(id.to_string());
        self
    }
    pub fn with_ids(mut self, ids: &[EntitlementID]) -> Self {
        self.ids.extend_from_slice(ids);
        self
    }

    pub fn with_user_id(mut self, user_id: &str) -> Self {
        self.user_id = Some(user_id.to_string());
        self
    }

    pub fn with_game_id(mut self, game_id: &str) -> Self {
        self.game_id = Some(game_id.to_string());
        self
    }
}

/// Body of a fulfillment update: which entitlements to touch and the status
/// to set on them.
///
/// The service accepts at most 100 ids per request. The limit is documented
/// here rather than enforced; an oversized batch is sent through unchanged
/// and the service answers as it sees fit.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateEntitlementsRequest {
    /// Ids of the entitlements to update.
    pub entitlement_ids: Vec<EntitlementID>,
    /// Status set on every entitlement in the batch.
    pub fulfillment_status: FulfillmentStatus,
}

impl UpdateEntitlementsRequest {
    /// Creates an update with an empty batch and the given target status.
    pub fn new(fulfillment_status: FulfillmentStatus) -> Self {
        Self {
            entitlement_ids: Vec::new(),
            fulfillment_status,
        }
    }

    pub fn with_entitlement_id(mut self, id: &str) -> Self {
        self.entitlement_ids.push(id.to_string());
        self
    }
    pub fn with_entitlement_ids(mut self, ids: &[EntitlementID]) -> Self {
        self.entitlement_ids.extend_from_slice(ids);
        self
    }
}
