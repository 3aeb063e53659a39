/// Category used when a submission carries none
pub const DEFAULT_CATEGORY: &str = "Other";

/// Status every report starts in
pub const INITIAL_STATUS: &str = "Submitted";

/// Reporter name used when a submission carries no reporter
pub const DEFAULT_REPORTER_NAME: &str = "Citizen";

/// Fallback photo extension when the MIME subtype is missing or unusable
pub const DEFAULT_PHOTO_EXTENSION: &str = "png";

// =============================================================================
// AUDIT NOTES
// =============================================================================

pub const NOTE_REPORT_CREATED: &str = "Report created";

pub const NOTE_STATUS_UPDATED: &str = "Status updated via API";

pub const NOTE_REVIEW_SUBMITTED: &str = "Citizen submitted a review";

// =============================================================================
// REVIEW RATING BOUNDS
// =============================================================================

pub const MIN_REVIEW_RATING: f64 = 1.0;

pub const MAX_REVIEW_RATING: f64 = 5.0;
