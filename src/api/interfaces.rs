use reqwest::Method;

use crate::models::interface::{Interface, InterfaceRequest};
use crate::models::pagination::Pagination;
use crate::{PfSenseClient, PfSenseResult};

const INTERFACE_ENDPOINT: &str = "api/v2/interface";
const INTERFACES_ENDPOINT: &str = "api/v2/interfaces";
const INTERFACE_APPLY_ENDPOINT: &str = "api/v2/interface/apply";

/// Provides methods for managing assigned interfaces.
///
/// An interface id can be given as the interface's descriptive name, the
/// pfSense id (`wan`, `lan`, `optN`) or the physical port (e.g. `igb0`).
/// Changes made through this API are staged until [`InterfaceHandler::apply`]
/// is called.
#[derive(Debug)]
pub struct InterfaceHandler {
    client: PfSenseClient,
}

impl InterfaceHandler {
    /// Creates a new interface API instance.
    ///
    /// This method is intended for internal use by the pfSense client.
    pub(crate) fn new(client: PfSenseClient) -> Self {
        Self { client }
    }

    /// Lists all assigned interfaces.
    pub fn list(&self) -> ListInterfacesBuilder {
        ListInterfacesBuilder::new(self.client.clone())
    }

    /// Fetches a single interface.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pfsense_client::PfSenseClient;
    /// #
    /// # async fn example(client: &PfSenseClient) -> Result<(), pfsense_client::PfSenseError> {
    /// let lan = client.interfaces().get("lan").send().await?;
    /// println!("{} on {}", lan, lan.config.interface);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get(&self, id: impl Into<String>) -> GetInterfaceBuilder {
        GetInterfaceBuilder::new(self.client.clone(), id.into())
    }

    /// Assigns a new interface.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pfsense_client::{InterfaceRequest, PfSenseClient};
    /// #
    /// # async fn example(client: &PfSenseClient) -> Result<(), pfsense_client::PfSenseError> {
    /// let request = InterfaceRequest {
    ///     enable: Some(true),
    ///     typev4: Some("static".into()),
    ///     ipaddr: Some("10.30.0.1".into()),
    ///     subnet: Some(24),
    ///     ..InterfaceRequest::new("igb1.30", "CAMERAS")
    /// };
    ///
    /// let interface = client.interfaces().create(request).send().await?;
    /// client.interfaces().apply().send().await?;
    /// println!("Assigned {}", interface);
    /// # Ok(())
    /// # }
    /// ```
    pub fn create(&self, request: InterfaceRequest) -> CreateInterfaceBuilder {
        CreateInterfaceBuilder::new(self.client.clone(), request)
    }

    /// Modifies an existing interface.
    pub fn update(&self, id: impl Into<String>, request: InterfaceRequest) -> UpdateInterfaceBuilder {
        UpdateInterfaceBuilder::new(self.client.clone(), id.into(), request)
    }

    /// Removes an interface assignment.
    pub fn delete(&self, id: impl Into<String>) -> DeleteInterfaceBuilder {
        DeleteInterfaceBuilder::new(self.client.clone(), id.into())
    }

    /// Applies pending interface changes.
    pub fn apply(&self) -> ApplyInterfacesBuilder {
        ApplyInterfacesBuilder::new(self.client.clone())
    }
}

#[derive(Debug, Clone)]
pub struct ListInterfacesBuilder {
    client: PfSenseClient,
    pagination: Pagination,
}

impl ListInterfacesBuilder {
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

    pub async fn send(self) -> PfSenseResult<Vec<Interface>> {
        self.client
            .request(Method::GET, INTERFACES_ENDPOINT, &self.pagination.to_pairs(), None::<&()>)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct GetInterfaceBuilder {
    client: PfSenseClient,
    id: String,
}

impl GetInterfaceBuilder {
    pub(crate) fn new(client: PfSenseClient, id: String) -> Self {
        Self { client, id }
    }

    pub async fn send(self) -> PfSenseResult<Interface> {
        self.client
            .request(Method::GET, INTERFACE_ENDPOINT, &[("if", self.id)], None::<&()>)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct CreateInterfaceBuilder {
    client: PfSenseClient,
    request: InterfaceRequest,
}

impl CreateInterfaceBuilder {
    pub(crate) fn new(client: PfSenseClient, request: InterfaceRequest) -> Self {
        Self { client, request }
    }

    pub async fn send(self) -> PfSenseResult<Interface> {
        self.client
            .request(Method::POST, INTERFACE_ENDPOINT, &[], Some(&self.request))
            .await
    }
}

#[derive(Debug, Clone)]
pub struct UpdateInterfaceBuilder {
    client: PfSenseClient,
    interface: Interface,
}

impl UpdateInterfaceBuilder {
    pub(crate) fn new(client: PfSenseClient, id: String, config: InterfaceRequest) -> Self {
        Self {
            client,
            interface: Interface { id, config },
        }
    }

    pub async fn send(self) -> PfSenseResult<Interface> {
        self.client
            .request(Method::PATCH, INTERFACE_ENDPOINT, &[], Some(&self.interface))
            .await
    }
}

#[derive(Debug, Clone)]
pub struct DeleteInterfaceBuilder {
    client: PfSenseClient,
    id: String,
}

impl DeleteInterfaceBuilder {
    pub(crate) fn new(client: PfSenseClient, id: String) -> Self {
        Self { client, id }
    }

    pub async fn send(self) -> PfSenseResult<()> {
        self.client
            .execute(Method::DELETE, INTERFACE_ENDPOINT, &[("if", self.id)], None::<&()>)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct ApplyInterfacesBuilder {
    client: PfSenseClient,
}

impl ApplyInterfacesBuilder {
    pub(crate) fn new(client: PfSenseClient) -> Self {
        Self { client }
    }

    pub async fn send(self) -> PfSenseResult<()> {
        self.client
            .execute(Method::POST, INTERFACE_APPLY_ENDPOINT, &[], None::<&()>)
            .await
    }
}
