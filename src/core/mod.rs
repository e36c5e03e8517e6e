pub mod completion_time;
pub mod hltb_game;
pub mod search_request;

pub use completion_time::{to_hours, CompletionTime};
pub use hltb_game::{HltbGame, HltbSearchResponse};
pub use search_request::SearchRequest;
