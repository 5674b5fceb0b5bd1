use placenext_api_v1::V1;
use placenext_rest::Client;

/// RestApi gives access to every version of the PlaceNext API over one client.
#[derive(Debug, Clone)]
pub struct RestApi {
    v1: V1,
}

impl RestApi {
    /// Create a RestApi over `client`.
    pub fn new(client: Client) -> Self {
        Self {
            v1: V1::new(client),
        }
    }

    /// Version 1 of the api.
    pub fn v1(&self) -> &V1 {
        &self.v1
    }
}
