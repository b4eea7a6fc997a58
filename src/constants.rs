pub const DEFAULT_BASE_URL: &str = "http://thetvdb.com";

pub const DEFAULT_LANGUAGE: &str = "en";

pub const USER_AGENT: &str = "tvdb/1.0";

pub mod limits {

    pub const DEFAULT_WEB_RESULTS: i32 = 10;

    pub const SEARCH_DISPLAY_LIMIT: usize = 10;
}
