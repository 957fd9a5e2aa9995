pub mod basemaps;
pub mod dispatch;
pub mod list;
pub mod locate;
pub mod pois;
pub mod report;
pub mod search;
pub mod shared;
pub mod stats;
pub mod submit;
