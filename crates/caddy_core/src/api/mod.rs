//! JSON entry points for host applications.
//!
//! Requests carry the course record, the club table and (for change events)
//! the session state returned by the previous call; responses carry the
//! rendered rows, stroke counts, highlight categories and the updated state.

pub mod json_api;

pub use json_api::{
    change_club_json, change_driver_json, plan_course_json, ChangeClubRequest, ChangeClubResponse,
    ChangeDriverRequest, CourseData, CourseResponse, PlanCourseRequest,
};
