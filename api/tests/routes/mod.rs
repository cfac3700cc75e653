mod assignments_test;
mod assistant_test;
mod feedback_test;
mod grade_test;
mod health_test;
mod notifications_test;
mod resources_test;
mod students_test;
mod teacher_test;
