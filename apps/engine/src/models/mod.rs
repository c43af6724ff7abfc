// External entities supplied by the surrounding application.
// The engine reads these records as-is; field validation (CGPA range, required
// fields) happens upstream.

mod job;
mod profile;

pub use job::JobPosting;
pub use profile::StudentProfile;
