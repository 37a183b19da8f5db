//! URL prefixes and page markers for the two Steam page layouts we read.

// Remote endpoints; the numeric ID is appended verbatim
pub const STORE_APP_URL: &str = "https://store.steampowered.com/app/";
pub const WORKSHOP_ITEM_URL: &str = "https://steamcommunity.com/sharedfiles/filedetails/?id=";

// Title of the storefront landing page we get redirected to for unknown apps
pub const STORE_LANDING_SENTINEL: &str = "Welcome to Steam";
// Title of the community error page for unknown workshop items
pub const WORKSHOP_ERROR_SENTINEL: &str = "Steam Community :: Error";

pub const STORE_TITLE_SUFFIX: &str = " on Steam";
pub const WORKSHOP_TITLE_PREFIX: &str = "Steam Workshop::";

// Right-panel detail classes on workshop item pages
pub const DETAIL_LABEL_CLASS: &str = "detailsStatLeft";
pub const DETAIL_VALUE_CLASS: &str = "detailsStatRight";

// Record keys that page attributes may not overwrite
pub const MOD_ID_KEY: &str = "id";
pub const MOD_NAME_KEY: &str = "mod_name";

pub const DEFAULT_OUTPUT_FILE: &str = "data.json";
pub const DEFAULT_CONFIG_FILE: &str = "workshop_catalog.toml";
pub const DEFAULT_CONTENT_PATH: &str = "C:/Program Files (x86)/Steam/steamapps/workshop/content";
pub const DEFAULT_USER_AGENT: &str = concat!("workshop_catalog/", env!("CARGO_PKG_VERSION"));

/// Build the store page URL for a game ID under the given base.
pub fn store_url(base: &str, game_id: &str) -> String {
    format!("{}{}", base, game_id)
}

/// Build the workshop page URL for a mod ID under the given base.
pub fn workshop_url(base: &str, mod_id: &str) -> String {
    format!("{}{}", base, mod_id)
}
