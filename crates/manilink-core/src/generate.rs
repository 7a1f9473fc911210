//! The manifest link operation: validate the AppId, then either show the
//! invalid-input message or navigate to the download link.

use anyhow::Result;
use url::Url;

use crate::app_id::{AppId, InvalidAppId};
use crate::link::LinkTemplate;
use crate::messages::Messages;
use crate::navigate::{Navigator, StatusSink};

/// Which of the two terminal states a call ended in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The navigator was handed this URL. Status was left untouched.
    Navigated(Url),
    /// Input was not a valid AppId; status now shows the message and nothing was navigated.
    Rejected(InvalidAppId),
}

impl Outcome {
    pub fn is_navigated(&self) -> bool {
        matches!(self, Outcome::Navigated(_))
    }
}

/// Run the link builder once for `input`.
///
/// A rejected AppId is not an error: it is reported through `status` and
/// returned as [`Outcome::Rejected`], before `template` is consulted. `Err`
/// comes from the template (e.g. a bad configured base URL) or from the
/// navigator failing to launch.
pub fn generate_manifest_link<T, S, N>(
    input: &str,
    template: &T,
    messages: &Messages,
    status: &mut S,
    navigator: &mut N,
) -> Result<Outcome>
where
    T: LinkTemplate + ?Sized,
    S: StatusSink + ?Sized,
    N: Navigator + ?Sized,
{
    let app_id = match AppId::parse(input) {
        Ok(id) => id,
        Err(e) => {
            tracing::debug!("rejected app id: {}", e);
            status.set_text(messages.invalid_app_id);
            return Ok(Outcome::Rejected(e));
        }
    };

    let url = template.build_link(&app_id)?;
    tracing::info!("navigating to manifest link for appid={}", app_id);
    navigator.navigate(&url)?;
    Ok(Outcome::Navigated(url))
}
