//! Subscriber operations

use drip_domain::{
    ApiResponse, ListSubscribersRequest, SubscribersResponse, UpdateSubscribersRequest,
};
use reqwest::Method;
use tracing::{debug, instrument};

use crate::client::DripClient;
use crate::errors::DripError;

impl DripClient {
    /// List subscribers matching the given filters.
    ///
    /// A default request lists every subscriber on the account; pagination
    /// parameters are passed through, not traversed.
    ///
    /// # Errors
    ///
    /// Returns an error when the transport fails or the response cannot be
    /// decoded. Validation problems reported by the service arrive in the
    /// envelope's `errors` list instead.
    #[instrument(skip(self, request))]
    pub async fn list_subscribers(
        &self,
        request: &ListSubscribersRequest,
    ) -> Result<SubscribersResponse, DripError> {
        let url = self.resource_url(&["subscribers"]);
        debug!(url = %url, "listing subscribers");
        self.round_trip(Method::GET, &url, Some(request)).await
    }

    /// Create or update a batch of subscribers, each keyed by email or id.
    ///
    /// Per-record validation failures do not fail the call; they arrive as
    /// coded errors in the envelope.
    #[instrument(skip(self, request))]
    pub async fn update_subscribers(
        &self,
        request: &UpdateSubscribersRequest,
    ) -> Result<SubscribersResponse, DripError> {
        let url = self.resource_url(&["subscribers"]);
        debug!(url = %url, count = request.subscribers.len(), "updating subscribers");
        self.round_trip(Method::POST, &url, Some(request)).await
    }

    /// Fetch a single subscriber by id or email.
    ///
    /// # Errors
    ///
    /// Returns [`DripError::IdentifierRequired`] before any network call
    /// when `id_or_email` is empty.
    #[instrument(skip(self, id_or_email))]
    pub async fn fetch_subscriber(
        &self,
        id_or_email: &str,
    ) -> Result<SubscribersResponse, DripError> {
        if id_or_email.is_empty() {
            return Err(DripError::IdentifierRequired);
        }
        let url = self.resource_url(&["subscribers", id_or_email]);
        debug!(url = %url, "fetching subscriber");
        self.round_trip::<(), _>(Method::GET, &url, None).await
    }

    /// Delete a subscriber by id or email.
    ///
    /// # Errors
    ///
    /// Returns [`DripError::IdentifierRequired`] before any network call
    /// when `id_or_email` is empty.
    #[instrument(skip(self, id_or_email))]
    pub async fn delete_subscriber(&self, id_or_email: &str) -> Result<ApiResponse, DripError> {
        if id_or_email.is_empty() {
            return Err(DripError::IdentifierRequired);
        }
        let url = self.resource_url(&["subscribers", id_or_email]);
        debug!(url = %url, "deleting subscriber");
        self.round_trip::<(), _>(Method::DELETE, &url, None).await
    }
}
