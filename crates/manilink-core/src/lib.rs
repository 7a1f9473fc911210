pub mod config;
pub mod logging;

pub mod app_id;
pub mod generate;
pub mod link;
pub mod messages;
pub mod navigate;

pub use app_id::{AppId, InvalidAppId};
pub use generate::{generate_manifest_link, Outcome};
pub use link::{LinkTemplate, ManifestEndpoint};
