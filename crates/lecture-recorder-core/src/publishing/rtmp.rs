/// Scheme argument of the `SetRTMP` appliance command.
pub const RTMP_SCHEME: &str = "rtmp:/";

/// Number of leading characters dropped from a publish URI (`rtmp://`).
const SCHEME_PREFIX_LEN: usize = 7;

/// Route rewrite from the public streaming host to its internal address.
///
/// The appliance pushes its stream over the internal network rather than
/// through the public endpoint the publish URI was issued for.
#[derive(Debug, Clone)]
pub struct StreamRoute {
    /// Hostname appearing in publish URIs.
    pub public_host: String,
    /// Address the appliance must use instead.
    pub internal_host: String,
}

impl StreamRoute {
    /// Strip the scheme from `publish_uri` and swap in the internal host.
    ///
    /// URIs shorter than the scheme prefix yield an empty target.
    pub fn rewrite(&self, publish_uri: &str) -> String {
        let rest = publish_uri
            .char_indices()
            .nth(SCHEME_PREFIX_LEN)
            .map_or("", |(idx, _)| &publish_uri[idx..]);

        if self.public_host.is_empty() {
            return rest.to_string();
        }

        rest.replace(&self.public_host, &self.internal_host)
    }
}
