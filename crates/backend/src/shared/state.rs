use crate::shared::core_client::CoreClient;

/// Состояние приложения, доступное обработчикам через `State`
#[derive(Clone, Debug)]
pub struct AppState {
    pub core: CoreClient,
}

impl AppState {
    pub fn new(core: CoreClient) -> Self {
        Self { core }
    }
}
