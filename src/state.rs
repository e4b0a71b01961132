use crate::api::PuppyBowlClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<PuppyBowlClient>,
}

impl AppState {
    pub fn new(client: PuppyBowlClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}
