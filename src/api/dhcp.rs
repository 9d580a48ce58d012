use reqwest::Method;

use crate::models::dhcp::DhcpLease;
use crate::models::pagination::Pagination;
use crate::{PfSenseClient, PfSenseResult};

const DHCP_LEASES_ENDPOINT: &str = "api/v2/status/dhcp_server/leases";

/// Provides read access to the DHCP server status.
#[derive(Debug)]
pub struct DhcpHandler {
    client: PfSenseClient,
}

impl DhcpHandler {
    pub(crate) fn new(client: PfSenseClient) -> Self {
        Self { client }
    }

    /// Lists the leases handed out by the DHCP server, including static
    /// mappings.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pfsense_client::PfSenseClient;
    /// #
    /// # async fn example(client: &PfSenseClient) -> Result<(), pfsense_client::PfSenseError> {
    /// let leases = client.dhcp().list_leases().send().await?;
    /// for lease in leases.iter().filter(|lease| lease.online) {
    ///     println!("{} {} {}", lease.ip, lease.mac, lease.hostname);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_leases(&self) -> ListLeasesBuilder {
        ListLeasesBuilder::new(self.client.clone())
    }
}

#[derive(Debug, Clone)]
pub struct ListLeasesBuilder {
    client: PfSenseClient,
    pagination: Pagination,
}

impl ListLeasesBuilder {
    pub(crate) fn new(client: PfSenseClient) -> Self {
        Self {
            client,
            pagination: Pagination::default(),
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.pagination.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.pagination.offset = Some(offset);
        self
    }

    pub async fn send(self) -> PfSenseResult<Vec<DhcpLease>> {
        self.client
            .request(Method::GET, DHCP_LEASES_ENDPOINT, &self.pagination.to_pairs(), None::<&()>)
            .await
    }
}
