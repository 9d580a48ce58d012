use reqwest::Method;

use crate::models::pagination::Pagination;
use crate::models::vlan::{Vlan, VlanRequest};
use crate::{PfSenseClient, PfSenseResult};

const VLAN_ENDPOINT: &str = "api/v2/interface/vlan";
const VLANS_ENDPOINT: &str = "api/v2/interface/vlans";

/// Provides methods for managing VLANs on the appliance.
///
/// VLANs are addressed by the numeric `id` the appliance assigns them,
/// which is their position in the configuration.
#[derive(Debug)]
pub struct VlanHandler {
    client: PfSenseClient,
}

impl VlanHandler {
    /// Creates a new VLAN API instance.
    ///
    /// This method is intended for internal use by the pfSense client.
    pub(crate) fn new(client: PfSenseClient) -> Self {
        Self { client }
    }

    /// Lists the configured VLANs.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pfsense_client::PfSenseClient;
    /// #
    /// # async fn example(client: &PfSenseClient) -> Result<(), pfsense_client::PfSenseError> {
    /// for vlan in client.vlans().list().send().await? {
    ///     println!("{} -> {}", vlan.id, vlan);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list(&self) -> ListVlansBuilder {
        ListVlansBuilder::new(self.client.clone())
    }

    /// Fetches a single VLAN by id.
    pub fn get(&self, id: u32) -> GetVlanBuilder {
        GetVlanBuilder::new(self.client.clone(), id)
    }

    /// Creates a VLAN with `tag` on the parent `interface`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pfsense_client::PfSenseClient;
    /// #
    /// # async fn example(client: &PfSenseClient) -> Result<(), pfsense_client::PfSenseError> {
    /// let vlan = client
    ///     .vlans()
    ///     .create("igb1", 30)
    ///     .pcp(3)
    ///     .description("cameras")
    ///     .send()
    ///     .await?;
    ///
    /// println!("Created VLAN {} as id {}", vlan, vlan.id);
    /// # Ok(())
    /// # }
    /// ```
    pub fn create(&self, interface: impl Into<String>, tag: u16) -> CreateVlanBuilder {
        CreateVlanBuilder::new(self.client.clone(), VlanRequest::new(interface, tag))
    }

    /// Replaces the settings of the VLAN with the given id.
    pub fn update(&self, id: u32, request: VlanRequest) -> UpdateVlanBuilder {
        UpdateVlanBuilder::new(self.client.clone(), id, request)
    }

    /// Deletes the VLAN with the given id.
    pub fn delete(&self, id: u32) -> DeleteVlanBuilder {
        DeleteVlanBuilder::new(self.client.clone(), id)
    }
}

#[derive(Debug, Clone)]
pub struct ListVlansBuilder {
    client: PfSenseClient,
    pagination: Pagination,
}

impl ListVlansBuilder {
    pub(crate) fn new(client: PfSenseClient) -> Self {
        Self {
            client,
            pagination: Pagination::default(),
        }
    }

    /// Return at most `limit` VLANs.
    pub fn limit(mut self, limit: u32) -> Self {
        self.pagination.limit = Some(limit);
        self
    }

    /// Skip the first `offset` VLANs.
    pub fn offset(mut self, offset: u32) -> Self {
        self.pagination.offset = Some(offset);
        self
    }

    pub async fn send(self) -> PfSenseResult<Vec<Vlan>> {
        self.client
            .request(Method::GET, VLANS_ENDPOINT, &self.pagination.to_pairs(), None::<&()>)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct GetVlanBuilder {
    client: PfSenseClient,
    id: u32,
}

impl GetVlanBuilder {
    pub(crate) fn new(client: PfSenseClient, id: u32) -> Self {
        Self { client, id }
    }

    pub async fn send(self) -> PfSenseResult<Vlan> {
        self.client
            .request(Method::GET, VLAN_ENDPOINT, &[("id", self.id.to_string())], None::<&()>)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct CreateVlanBuilder {
    client: PfSenseClient,
    request: VlanRequest,
}

impl CreateVlanBuilder {
    pub(crate) fn new(client: PfSenseClient, request: VlanRequest) -> Self {
        Self { client, request }
    }

    /// Name the VLAN interface instead of letting the appliance derive one.
    pub fn vlanif(mut self, vlanif: impl Into<String>) -> Self {
        self.request.vlanif = Some(vlanif.into());
        self
    }

    /// 802.1p priority code point (0-7).
    pub fn pcp(mut self, pcp: u8) -> Self {
        self.request.pcp = Some(pcp);
        self
    }

    pub fn description(mut self, descr: impl Into<String>) -> Self {
        self.request.descr = Some(descr.into());
        self
    }

    pub async fn send(self) -> PfSenseResult<Vlan> {
        self.client
            .request(Method::POST, VLAN_ENDPOINT, &[], Some(&self.request))
            .await
    }
}

#[derive(Debug, Clone)]
pub struct UpdateVlanBuilder {
    client: PfSenseClient,
    vlan: Vlan,
}

impl UpdateVlanBuilder {
    pub(crate) fn new(client: PfSenseClient, id: u32, config: VlanRequest) -> Self {
        Self {
            client,
            vlan: Vlan { id, config },
        }
    }

    pub async fn send(self) -> PfSenseResult<Vlan> {
        // The id travels in the body alongside the new settings.
        self.client
            .request(Method::PATCH, VLAN_ENDPOINT, &[], Some(&self.vlan))
            .await
    }
}

#[derive(Debug, Clone)]
pub struct DeleteVlanBuilder {
    client: PfSenseClient,
    id: u32,
}

impl DeleteVlanBuilder {
    pub(crate) fn new(client: PfSenseClient, id: u32) -> Self {
        Self { client, id }
    }

    pub async fn send(self) -> PfSenseResult<()> {
        self.client
            .execute(Method::DELETE, VLAN_ENDPOINT, &[("id", self.id.to_string())], None::<&()>)
            .await
    }
}
