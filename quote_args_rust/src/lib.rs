pub mod error;
pub mod flags;
pub mod models;
pub mod routing;
pub mod settings;
#[cfg(test)]
pub mod tests;
pub mod utils;

#[cfg(test)]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(test)]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(test)]
use tracing_subscriber::{EnvFilter, fmt};

#[cfg(test)]
pub fn init_tracing_in_tests() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().json().pretty().with_ansi(true))
        .try_init()
        .ok();
}
