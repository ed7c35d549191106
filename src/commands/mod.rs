pub mod clean;
pub mod dedup;
pub mod extract_report;
pub mod gallery;
pub mod headers;
pub mod localize;
pub mod merge;
pub mod migrate;
pub mod normalize;
pub mod scan;
pub mod status;
pub mod synthesize;
