//! Tag operations

use drip_domain::{ApiResponse, TagPair, TagsRequest};
use reqwest::Method;
use tracing::{debug, instrument};

use crate::client::DripClient;
use crate::errors::DripError;

impl DripClient {
    /// Apply tags to subscribers in bulk.
    ///
    /// Per-pair validation failures arrive as coded errors in the envelope.
    #[instrument(skip(self, request))]
    pub async fn tag_subscribers(&self, request: &TagsRequest) -> Result<ApiResponse, DripError> {
        let url = self.resource_url(&["tags"]);
        debug!(url = %url, count = request.tags.len(), "tagging subscribers");
        self.round_trip(Method::POST, &url, Some(request)).await
    }

    /// Remove a single tag from a subscriber.
    ///
    /// # Errors
    ///
    /// Returns [`DripError::IdentifierRequired`] before any network call
    /// when either the email or the tag is empty.
    #[instrument(skip(self, pair))]
    pub async fn remove_subscriber_tag(&self, pair: &TagPair) -> Result<ApiResponse, DripError> {
        if pair.email.is_empty() || pair.tag.is_empty() {
            return Err(DripError::IdentifierRequired);
        }
        let url = self.resource_url(&["subscribers", &pair.email, "tags", &pair.tag]);
        debug!(url = %url, "removing subscriber tag");
        self.round_trip::<(), _>(Method::DELETE, &url, None).await
    }
}
