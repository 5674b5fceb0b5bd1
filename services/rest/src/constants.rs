// Headers used by the PlaceNext API.
pub const X_PLACENEXT_DATE: &str = "x-placenext-date";
pub const X_PLACENEXT_PREFIX: &str = "x-placenext";
pub const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
pub const CONTENT_MD5: &str = "content-md5";

/// Scheme of the `Authorization` header.
pub const AUTHORIZATION_SCHEME: &str = "AimMatic";

// Content types accepted by the PlaceNext API.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";
pub const CONTENT_TYPE_GEO_JSON: &str = "application/geo+json";

// Env values used by the PlaceNext SDK.
pub const PLACENEXT_APIKEY: &str = "PLACENEXT_APIKEY";
pub const PLACENEXT_SECRETKEY: &str = "PLACENEXT_SECRETKEY";
pub const PLACENEXT_ADDRESS: &str = "PLACENEXT_ADDRESS";

pub const DEFAULT_HOST: &str = "https://api.aimmatic.com";
pub const DEFAULT_USER_AGENT: &str = "placenext 1.0";
