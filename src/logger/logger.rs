use anyhow::{Result, anyhow};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

pub struct Logger {
    reload_handle: reload::Handle<EnvFilter, Registry>,
}

impl Logger {
    /// Installs a subscriber with an `info` filter so startup itself gets
    /// logged; the filter is swapped once settings are loaded.
    pub fn bootstrap() -> Self {
        let (filter, reload_handle) = reload::Layer::new(EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();

        Logger { reload_handle }
    }

    pub fn reload_filter(&self, filter: &str) -> Result<()> {
        let filter = EnvFilter::try_new(filter).map_err(|e| anyhow!(e))?;
        self.reload_handle.reload(filter).map_err(|e| anyhow!(e))?;
        Ok(())
    }
}
