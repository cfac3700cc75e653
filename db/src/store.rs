//! Read-only in-memory store.
//!
//! All lookups are exact, case-sensitive id matches. The store is built once
//! and shared behind an `Arc`; there are no mutating methods.

use crate::models::{
    Assignment, LearningResource, PerformanceData, Student, StudentProgress, Submission, Teacher,
};
use crate::seed;

#[derive(Debug, Clone, Default)]
pub struct Store {
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    assignments: Vec<Assignment>,
    submissions: Vec<Submission>,
    resources: Vec<LearningResource>,
    performance: Vec<PerformanceData>,
    progress: Vec<StudentProgress>,
}

impl Store {
    /// Builds a store holding the demo dataset.
    pub fn seeded() -> Self {
        let store = Self {
            students: seed::students(),
            teachers: seed::teachers(),
            assignments: seed::assignments(),
            submissions: seed::submissions(),
            resources: seed::learning_resources(),
            performance: seed::performance(),
            progress: seed::progress(),
        };
        tracing::info!(
            students = store.students.len(),
            assignments = store.assignments.len(),
            submissions = store.submissions.len(),
            "Loaded demo dataset"
        );
        store
    }

    /// Builds a store from explicit collections. Used by tests that need
    /// edge-case data.
    pub fn from_parts(
        students: Vec<Student>,
        assignments: Vec<Assignment>,
        submissions: Vec<Submission>,
    ) -> Self {
        Self {
            students,
            assignments,
            submissions,
            ..Self::default()
        }
    }

    pub fn with_resources(mut self, resources: Vec<LearningResource>) -> Self {
        self.resources = resources;
        self
    }

    pub fn with_performance(
        mut self,
        performance: Vec<PerformanceData>,
        progress: Vec<StudentProgress>,
    ) -> Self {
        self.performance = performance;
        self.progress = progress;
        self
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn resources(&self) -> &[LearningResource] {
        &self.resources
    }

    pub fn performance(&self) -> &[PerformanceData] {
        &self.performance
    }

    pub fn progress(&self) -> &[StudentProgress] {
        &self.progress
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn assignment(&self, id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    pub fn submissions_for_student<'a>(
        &'a self,
        student_id: &'a str,
    ) -> impl Iterator<Item = &'a Submission> + 'a {
        self.submissions
            .iter()
            .filter(move |s| s.student_id == student_id)
    }

    /// Subject of the assignment a submission answers, if that assignment exists.
    pub fn subject_of(&self, submission: &Submission) -> Option<&str> {
        self.assignment(&submission.assignment_id)
            .map(|a| a.subject.as_str())
    }

    /// Distinct assignment subjects in first-seen order.
    pub fn subjects(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for a in &self.assignments {
            if !seen.contains(&a.subject.as_str()) {
                seen.push(&a.subject);
            }
        }
        seen
    }

    /// Resources for one subject (exact match, case-insensitive), or all of
    /// them when `subject` is `None`.
    pub fn resources_for(&self, subject: Option<&str>) -> Vec<&LearningResource> {
        self.resources
            .iter()
            .filter(|r| subject.is_none_or(|s| r.subject.eq_ignore_ascii_case(s)))
            .collect()
    }
}
