use std::sync::Arc;

use super::{config::Config, store::VoteStore};

pub struct State {
    pub config: Config,
    pub store: VoteStore,
}

impl State {
    pub fn new() -> Arc<Self> {
        Self::from_config(Config::load())
    }

    pub fn from_config(config: Config) -> Arc<Self> {
        let store = VoteStore::new(config.data_file.clone());

        Arc::new(Self { config, store })
    }
}
