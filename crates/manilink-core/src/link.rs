//! Manifest download link template.
//!
//! `<base>/secure_download?appid=<AppId>&auth_code=<token>`. The default
//! token is the public constant the web page ships with; it is not a secret
//! once it is in this binary either.

use anyhow::{bail, Context, Result};
use url::Url;

use crate::app_id::AppId;

/// Default endpoint host.
pub const DEFAULT_BASE_URL: &str = "https://generator.ryuu.lol";
/// Path of the download route on the endpoint.
pub const DOWNLOAD_PATH: &str = "/secure_download";
/// Token sent as `auth_code` on every request.
pub const DEFAULT_AUTH_CODE: &str = "RYUUMANIFESTbx69kodfvxzxce";

/// Anything that can turn a validated AppId into a download link.
///
/// Fallible so that sources like the config file are only checked once an
/// AppId has passed validation.
pub trait LinkTemplate {
    fn build_link(&self, app_id: &AppId) -> Result<Url>;
}

/// Where manifest links point and which token they carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEndpoint {
    base: Url,
    auth_code: String,
}

impl Default for ManifestEndpoint {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            auth_code: DEFAULT_AUTH_CODE.to_string(),
        }
    }
}

impl ManifestEndpoint {
    /// Build an endpoint from a base URL string. Only http(s) bases are accepted;
    /// any path or query on the base is replaced when links are built.
    pub fn new(base_url: &str, auth_code: &str) -> Result<Self> {
        let base = Url::parse(base_url).with_context(|| format!("invalid base url {base_url:?}"))?;
        if !matches!(base.scheme(), "http" | "https") {
            bail!("base url {base_url:?} must use http or https");
        }
        if base.host_str().is_none() {
            bail!("base url {base_url:?} has no host");
        }
        Ok(Self {
            base,
            auth_code: auth_code.to_string(),
        })
    }

    /// Link for `app_id`. Pure: same endpoint and id always give the same URL.
    pub fn link_for(&self, app_id: &AppId) -> Url {
        let mut url = self.base.clone();
        url.set_path(DOWNLOAD_PATH);
        url.set_query(None);
        url.set_fragment(None);
        url.query_pairs_mut()
            .append_pair("appid", app_id.as_str())
            .append_pair("auth_code", &self.auth_code);
        url
    }
}

impl LinkTemplate for ManifestEndpoint {
    fn build_link(&self, app_id: &AppId) -> Result<Url> {
        Ok(self.link_for(app_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> AppId {
        AppId::parse(s).unwrap()
    }

    #[test]
    fn default_link_matches_template() {
        let ep = ManifestEndpoint::default();
        assert_eq!(
            ep.link_for(&id("440")).as_str(),
            "https://generator.ryuu.lol/secure_download?appid=440&auth_code=RYUUMANIFESTbx69kodfvxzxce"
        );
    }

    #[test]
    fn app_id_is_substituted_verbatim() {
        let ep = ManifestEndpoint::default();
        assert_eq!(
            ep.link_for(&id("0070")).as_str(),
            "https://generator.ryuu.lol/secure_download?appid=0070&auth_code=RYUUMANIFESTbx69kodfvxzxce"
        );
    }

    #[test]
    fn base_path_and_query_are_replaced() {
        let ep = ManifestEndpoint::new("http://localhost:8080/old/path?x=1#frag", "tok").unwrap();
        assert_eq!(
            ep.link_for(&id("1")).as_str(),
            "http://localhost:8080/secure_download?appid=1&auth_code=tok"
        );
    }

    #[test]
    fn custom_token_is_query_encoded() {
        let ep = ManifestEndpoint::new(DEFAULT_BASE_URL, "a b&c").unwrap();
        assert_eq!(
            ep.link_for(&id("5")).query(),
            Some("appid=5&auth_code=a+b%26c")
        );
    }

    #[test]
    fn rejects_non_http_base() {
        assert!(ManifestEndpoint::new("ftp://generator.ryuu.lol", DEFAULT_AUTH_CODE).is_err());
        assert!(ManifestEndpoint::new("not a url", DEFAULT_AUTH_CODE).is_err());
    }
}
