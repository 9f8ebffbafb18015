use crate::ergast::ErgastClient;
use crate::utils::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub ergast: ErgastClient,
}
