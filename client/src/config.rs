/// Baked in at build time, e.g. `HOUSE_POINTS_DATA_URL=https://... trunk build`.
const DATA_URL: Option<&str> = option_env!("HOUSE_POINTS_DATA_URL");
const ACCESS_CODE: Option<&str> = option_env!("HOUSE_POINTS_ACCESS_CODE");

pub const DATA_URL_VAR: &str = "HOUSE_POINTS_DATA_URL";
pub const ACCESS_CODE_VAR: &str = "HOUSE_POINTS_ACCESS_CODE";

/// LocalStorage key for the "access granted" flag.
pub const ACCESS_FLAG_KEY: &str = "house_points_access_ok";

/// Relative-age labels are refreshed on this interval.
pub const AGE_REFRESH_MS: u32 = 30_000;

pub fn data_url() -> Option<&'static str> {
    non_blank(DATA_URL)
}

pub fn access_code() -> Option<&'static str> {
    non_blank(ACCESS_CODE)
}

fn non_blank(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
