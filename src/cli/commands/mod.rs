mod episodes;
mod info;
mod lookup;
mod search;
mod web;

pub use episodes::cmd_episodes;
pub use info::cmd_info;
pub use lookup::cmd_lookup;
pub use search::cmd_search;
pub use web::cmd_web_search;
