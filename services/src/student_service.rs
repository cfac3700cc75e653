//! Per-student views: the dashboard and personalized analytics.

use crate::error::ServiceError;
use chrono::NaiveDate;
use db::Store;
use db::models::{Assignment, LearningResource, Student, Submission};
use marker::Subject;
use marker::feedback::bank;
use marker::grade::{class_average, letter_grade, mean};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Completed,
    Overdue,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentProgress {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub status: AssignmentStatus,
    pub score: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboard {
    pub student: Student,
    pub assignments: Vec<AssignmentProgress>,
    pub submissions: Vec<Submission>,
    pub average_score: Option<f64>,
    pub letter_grade: Option<&'static str>,
    pub recommended_resources: Vec<LearningResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectAverage {
    pub subject: String,
    pub average_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectTips {
    pub subject: &'static str,
    pub tips: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedAnalytics {
    pub student_id: String,
    pub overall_average: u32,
    pub subject_averages: Vec<SubjectAverage>,
    pub strongest_subject: Option<SubjectAverage>,
    pub weakest_subject: Option<SubjectAverage>,
    pub general_tips: &'static [&'static str],
    pub subject_tips: Vec<SubjectTips>,
}

pub struct StudentService<'a> {
    store: &'a Store,
}

impl<'a> StudentService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    fn find_student(&self, student_id: &str) -> Result<&'a Student, ServiceError> {
        self.store
            .student(student_id)
            .ok_or_else(|| ServiceError::StudentNotFound(student_id.to_string()))
    }

    /// Scores of one student's submissions in `subject`. Unscored work counts as 0.
    fn subject_scores(&self, student_id: &str, subject: &str) -> Vec<u32> {
        self.store
            .submissions_for_student(student_id)
            .filter(|s| self.store.subject_of(s) == Some(subject))
            .map(|s| s.score.unwrap_or(0))
            .collect()
    }

    /// Dashboard for `student_id` as of `today`, which decides overdue status.
    pub fn dashboard(
        &self,
        student_id: &str,
        today: NaiveDate,
    ) -> Result<StudentDashboard, ServiceError> {
        let student = self.find_student(student_id)?;
        let submissions: Vec<Submission> = self
            .store
            .submissions_for_student(student_id)
            .cloned()
            .collect();

        let assignments = self
            .store
            .assignments()
            .iter()
            .map(|a| {
                let submission = submissions.iter().find(|s| s.assignment_id == a.id);
                let status = match submission {
                    Some(_) => AssignmentStatus::Completed,
                    None if a.is_overdue(today) => AssignmentStatus::Overdue,
                    None => AssignmentStatus::Pending,
                };
                AssignmentProgress {
                    assignment: a.clone(),
                    status,
                    score: submission.and_then(|s| s.score),
                }
            })
            .collect();

        let scores: Vec<u32> = submissions.iter().map(|s| s.score.unwrap_or(0)).collect();
        let average_score = (!scores.is_empty()).then(|| class_average(&scores));

        Ok(StudentDashboard {
            student: student.clone(),
            assignments,
            submissions,
            average_score,
            letter_grade: average_score.map(letter_grade),
            recommended_resources: self.recommended_resources(student_id),
        })
    }

    /// Resources whose range contains the student's exact average in that
    /// subject. Subjects the student has not submitted in recommend nothing.
    pub fn recommended_resources(&self, student_id: &str) -> Vec<LearningResource> {
        self.store
            .resources()
            .iter()
            .filter(|r| {
                let scores = self.subject_scores(student_id, &r.subject);
                !scores.is_empty() && r.recommends(mean(&scores))
            })
            .cloned()
            .collect()
    }

    pub fn analytics(&self, student_id: &str) -> Result<PersonalizedAnalytics, ServiceError> {
        let student = self.find_student(student_id)?;

        let scores: Vec<u32> = self
            .store
            .submissions_for_student(student_id)
            .map(|s| s.score.unwrap_or(0))
            .collect();
        let overall_average = rounded_mean(&scores);

        let subject_averages: Vec<SubjectAverage> = self
            .store
            .subjects()
            .into_iter()
            .filter_map(|subject| {
                let scores = self.subject_scores(student_id, subject);
                (!scores.is_empty()).then(|| SubjectAverage {
                    subject: subject.to_string(),
                    average_score: rounded_mean(&scores),
                })
            })
            .collect();

        let mut strongest: Option<&SubjectAverage> = None;
        let mut weakest: Option<&SubjectAverage> = None;
        for row in &subject_averages {
            if strongest.is_none_or(|s| row.average_score > s.average_score) {
                strongest = Some(row);
            }
            if weakest.is_none_or(|w| row.average_score < w.average_score) {
                weakest = Some(row);
            }
        }
        let strongest_subject = strongest.cloned();
        let weakest_subject = weakest.cloned();

        let subject_tips = Subject::ALL
            .into_iter()
            .map(|s| SubjectTips {
                subject: s.name(),
                tips: bank::study_tips(Some(s)),
            })
            .collect();

        tracing::debug!(student_id = %student.id, overall_average, "Built personalized analytics");

        Ok(PersonalizedAnalytics {
            student_id: student.id.clone(),
            overall_average,
            subject_averages,
            strongest_subject,
            weakest_subject,
            general_tips: bank::GENERAL_TIPS,
            subject_tips,
        })
    }
}

/// Mean rounded to the nearest integer, 0 when empty.
fn rounded_mean(scores: &[u32]) -> u32 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u64 = scores.iter().map(|&s| u64::from(s)).sum();
    (sum as f64 / scores.len() as f64).round() as u32
}
