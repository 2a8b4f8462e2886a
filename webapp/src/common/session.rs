use api::{
    auth::{CurrentUser, whoami},
    config::{ClientConfig, fetch_client_config},
};

// everything a view needs to talk to the collaborators on behalf of the user
//
// loaded once by App and provided as context to the whole router
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub config: ClientConfig,
    pub user: CurrentUser,
}

impl Session {
    pub async fn load() -> anyhow::Result<Session> {
        let user = whoami().await?;
        let config = fetch_client_config().await?;

        Ok(Session { config, user })
    }
}
