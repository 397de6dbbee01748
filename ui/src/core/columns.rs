//! Canonical column names for the survey dataset.
//!
//! Every column is optional: a missing column silently disables whatever
//! report section, filter dimension, or masking pass depends on it. Keeping
//! the names in one place means the section catalog, the masking pass, and
//! the sidebar all agree on spelling.

// Identity fields (masked before anything else sees them).
pub const FULL_NAME: &str = "Full Name";
pub const STUDENT_ID: &str = "Student ID";
pub const WHATSAPP: &str = "WhatsApp Number";
pub const PHONE: &str = "Phone Number";

// Filter dimensions.
pub const FACULTY: &str = "Faculty";
pub const SEMESTER: &str = "Semester";
pub const GPA: &str = "GPA";

// Survey answers.
pub const JOINS_ACTIVITIES: &str = "Joins Campus Activities";
pub const ACTIVITY_LEVEL: &str = "Activity Count_category";
pub const DISRUPTS_COURSEWORK: &str = "Activities Disrupt Coursework";
pub const DEADLINE_HABIT: &str = "Completes Assignments Before Deadline_category";
pub const MOTIVATION_IMPACT: &str = "Activity Impact on Assignment Motivation";
pub const AVG_WORK_HOURS: &str = "Average Hours on Assignments";
pub const POSTPONEMENT: &str = "Assignment Postponement_category";
pub const DILIGENCE: &str = "Works on Assignments Diligently";
pub const PRESSURE_IMPACT: &str = "Activity Impact on Working Under Pressure";

/// Affirmative participation answer, compared trimmed and case-insensitive.
pub const PARTICIPATION_YES: &str = "yes";
