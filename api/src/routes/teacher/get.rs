use crate::routes::common::{ok, service_error};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::Response,
};
use services::teacher_service::TeacherService;

/// GET /api/teacher/overview
///
/// Class statistics: counts, class average with letter grade, highest and
/// lowest score, participation, grade distribution, subject performance,
/// monthly progress and the most recent submissions.
pub async fn overview(State(state): State<AppState>) -> Response {
    let overview = TeacherService::new(state.store()).overview();
    ok(overview, "Class overview retrieved successfully")
}

/// GET /api/teacher/students
///
/// Every student with submission count and average. `averageScore` and
/// `letterGrade` are `null` for students without submissions.
pub async fn roster(State(state): State<AppState>) -> Response {
    ok(
        TeacherService::new(state.store()).roster(),
        "Students retrieved successfully",
    )
}

/// GET /api/teacher/students/{student_id}
///
/// ### Responses
/// - `200 OK` with the student and their submissions.
/// - `404 Not Found` for an unknown student.
pub async fn student_detail(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Response {
    match TeacherService::new(state.store()).student_detail(&student_id) {
        Ok(detail) => ok(detail, "Student retrieved successfully"),
        Err(e) => service_error(e),
    }
}
