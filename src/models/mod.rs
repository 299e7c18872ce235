mod summary;

pub use summary::{CompletedSummary, SummarizeResponse, SummaryRecord};
