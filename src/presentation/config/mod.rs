mod settings;

pub use settings::{
    DatabaseSettings, ProviderEndpointSettings, ProviderSettings, ServerSettings, Settings,
};
