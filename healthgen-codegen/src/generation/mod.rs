//! Files shared by every target language.

mod health_yml;

pub use health_yml::HealthYml;
