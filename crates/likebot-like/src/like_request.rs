/// Backend bucket used for any region code without a dedicated mapping.
pub const DEFAULT_BACKEND_SERVER: &str = "ind";

/// Shared backend serving the European region aliases.
pub const EUROPE_BACKEND_SERVER: &str = "eu";

const EUROPE_REGION_ALIASES: [&str; 5] = ["eu", "europe", "cis", "ru", "tr"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// The two optional strings exactly as supplied by the caller.
///
/// Callers routinely pass only a numeric player id, which then arrives in
/// the `region` slot; normalization untangles that before dispatch.
pub struct RawLikeArgs {
    pub region: Option<String>,
    pub uid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A validated like request, ready for dispatch.
pub struct LikeRequest {
    /// Non-empty digit string identifying the player.
    pub uid: String,
    /// Lower-cased region code as supplied; empty when omitted.
    pub region_code: String,
    /// Provider routing bucket resolved from the region code.
    pub backend_server: String,
}

/// Normalizes raw caller arguments into a dispatchable request.
///
/// Disambiguation rule: when the uid slot is empty but the region slot holds
/// an all-digit string, the region value is reinterpreted as the uid and the
/// request falls into the default backend bucket. That path is the only one
/// allowed to leave the region empty; a uid supplied directly still needs a
/// region. Returns `None` when either piece is missing, which the pipeline
/// reports as a missing argument.
pub fn normalize_like_args(raw: &RawLikeArgs) -> Option<LikeRequest> {
    let region = raw.region.as_deref().map(str::trim).unwrap_or("");
    let uid = raw.uid.as_deref().map(str::trim).unwrap_or("");

    let (region, uid) = if uid.is_empty() && is_all_digits(region) {
        ("", region)
    } else if region.is_empty() {
        return None;
    } else {
        (region, uid)
    };

    if !is_all_digits(uid) {
        return None;
    }

    let region_code = region.to_lowercase();
    let backend_server = resolve_backend_server(&region_code).to_string();
    Some(LikeRequest {
        uid: uid.to_string(),
        region_code,
        backend_server,
    })
}

/// Total region-to-backend mapping: every input resolves to some bucket.
pub fn resolve_backend_server(region_code: &str) -> &'static str {
    if region_code == "bd" {
        return "bd";
    }
    if EUROPE_REGION_ALIASES.contains(&region_code) {
        return EUROPE_BACKEND_SERVER;
    }
    DEFAULT_BACKEND_SERVER
}

fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}
