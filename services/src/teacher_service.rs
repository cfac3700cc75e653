//! Class-level views for the teacher dashboard.

use crate::error::ServiceError;
use chrono::{DateTime, Utc};
use db::Store;
use db::models::{PerformanceData, Student, StudentProgress, Submission};
use marker::grade::{class_average, letter_grade, round1};
use serde::Serialize;

/// Number of rows in the recent-submissions table.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub score: u32,
    pub letter_grade: &'static str,
}

impl ScoreSummary {
    fn new(score: u32) -> Self {
        Self {
            score,
            letter_grade: letter_grade(f64::from(score)),
        }
    }
}

/// Submission counts per letter grade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GradeDistribution {
    #[serde(rename = "A")]
    pub a: u32,
    #[serde(rename = "B")]
    pub b: u32,
    #[serde(rename = "C")]
    pub c: u32,
    #[serde(rename = "D")]
    pub d: u32,
    #[serde(rename = "F")]
    pub f: u32,
}

impl GradeDistribution {
    fn record(&mut self, score: u32) {
        match letter_grade(f64::from(score)) {
            "A" => self.a += 1,
            "B" => self.b += 1,
            "C" => self.c += 1,
            "D" => self.d += 1,
            _ => self.f += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.a + self.b + self.c + self.d + self.f
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectPerformance {
    pub subjects: Vec<PerformanceData>,
    pub best: Option<PerformanceData>,
    pub weakest: Option<PerformanceData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub months: Vec<StudentProgress>,
    /// Last month's score minus the first month's; 0 for fewer than two points.
    pub change: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSubmission {
    pub id: String,
    pub student_name: Option<String>,
    pub assignment_title: Option<String>,
    pub subject: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub score: Option<u32>,
    pub letter_grade: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassOverview {
    pub total_students: usize,
    pub total_assignments: usize,
    pub total_submissions: usize,
    pub class_average: f64,
    pub class_letter_grade: &'static str,
    pub highest: Option<ScoreSummary>,
    pub lowest: Option<ScoreSummary>,
    pub unique_submitters: usize,
    pub participation_rate: f64,
    pub grade_distribution: GradeDistribution,
    pub subject_performance: SubjectPerformance,
    pub progress: ProgressSummary,
    pub recent_submissions: Vec<RecentSubmission>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    #[serde(flatten)]
    pub student: Student,
    pub submission_count: usize,
    pub average_score: Option<f64>,
    pub letter_grade: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRow {
    #[serde(flatten)]
    pub submission: Submission,
    pub assignment_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetail {
    pub student: Student,
    pub submissions: Vec<SubmissionRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageReceipt {
    pub student_id: String,
    pub student_name: String,
    pub message: String,
    pub confirmation: String,
}

pub struct TeacherService<'a> {
    store: &'a Store,
}

impl<'a> TeacherService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn overview(&self) -> ClassOverview {
        let submissions = self.store.submissions();
        // A recorded 0 counts as ungraded here, though the distribution still buckets it as F.
        let scored: Vec<u32> = submissions
            .iter()
            .filter_map(|s| s.score)
            .filter(|&score| score > 0)
            .collect();
        let class_average = class_average(&scored);

        let mut submitters: Vec<&str> = submissions.iter().map(|s| s.student_id.as_str()).collect();
        submitters.sort_unstable();
        submitters.dedup();

        let total_students = self.store.students().len();
        let participation_rate = if total_students == 0 {
            0.0
        } else {
            round1(submitters.len() as f64 / total_students as f64 * 100.0)
        };

        let mut grade_distribution = GradeDistribution::default();
        for s in submissions {
            grade_distribution.record(s.score.unwrap_or(0));
        }

        ClassOverview {
            total_students,
            total_assignments: self.store.assignments().len(),
            total_submissions: submissions.len(),
            class_average,
            class_letter_grade: letter_grade(class_average),
            highest: scored.iter().copied().max().map(ScoreSummary::new),
            lowest: scored.iter().copied().min().map(ScoreSummary::new),
            unique_submitters: submitters.len(),
            participation_rate,
            grade_distribution,
            subject_performance: self.subject_performance(),
            progress: self.progress(),
            recent_submissions: self.recent_submissions(RECENT_LIMIT),
        }
    }

    /// Subject rows with the best and weakest subject. The first row wins ties.
    pub fn subject_performance(&self) -> SubjectPerformance {
        let subjects = self.store.performance().to_vec();
        let mut best: Option<&PerformanceData> = None;
        let mut weakest: Option<&PerformanceData> = None;
        for row in &subjects {
            if best.is_none_or(|b| row.average_score > b.average_score) {
                best = Some(row);
            }
            if weakest.is_none_or(|w| row.average_score < w.average_score) {
                weakest = Some(row);
            }
        }
        let best = best.cloned();
        let weakest = weakest.cloned();
        SubjectPerformance {
            subjects,
            best,
            weakest,
        }
    }

    pub fn progress(&self) -> ProgressSummary {
        let months = self.store.progress().to_vec();
        let change = match (months.first(), months.last()) {
            (Some(first), Some(last)) => i64::from(last.score) - i64::from(first.score),
            _ => 0,
        };
        ProgressSummary { months, change }
    }

    /// Newest submissions first, at most `limit` rows.
    pub fn recent_submissions(&self, limit: usize) -> Vec<RecentSubmission> {
        let mut rows: Vec<&Submission> = self.store.submissions().iter().collect();
        rows.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        rows.into_iter()
            .take(limit)
            .map(|s| {
                let assignment = self.store.assignment(&s.assignment_id);
                RecentSubmission {
                    id: s.id.clone(),
                    student_name: self.store.student(&s.student_id).map(|st| st.name.clone()),
                    assignment_title: assignment.map(|a| a.title.clone()),
                    subject: assignment.map(|a| a.subject.clone()),
                    submitted_at: s.submitted_at,
                    score: s.score,
                    letter_grade: s.score.map(|v| letter_grade(f64::from(v))),
                }
            })
            .collect()
    }

    pub fn roster(&self) -> Vec<RosterEntry> {
        self.store
            .students()
            .iter()
            .map(|student| {
                let scores: Vec<u32> = self
                    .store
                    .submissions_for_student(&student.id)
                    .map(|s| s.score.unwrap_or(0))
                    .collect();
                let average_score = (!scores.is_empty()).then(|| class_average(&scores));
                RosterEntry {
                    student: student.clone(),
                    submission_count: scores.len(),
                    average_score,
                    letter_grade: average_score.map(letter_grade),
                }
            })
            .collect()
    }

    pub fn student_detail(&self, student_id: &str) -> Result<StudentDetail, ServiceError> {
        let student = self
            .store
            .student(student_id)
            .ok_or_else(|| ServiceError::StudentNotFound(student_id.to_string()))?;

        let submissions = self
            .store
            .submissions_for_student(student_id)
            .map(|s| SubmissionRow {
                submission: s.clone(),
                assignment_title: self.store.assignment(&s.assignment_id).map(|a| a.title.clone()),
            })
            .collect();

        Ok(StudentDetail {
            student: student.clone(),
            submissions,
        })
    }

    /// Mock message to a student. Nothing is delivered; the receipt carries
    /// the confirmation shown to the teacher.
    pub fn message_student(
        &self,
        student_id: &str,
        message: &str,
    ) -> Result<MessageReceipt, ServiceError> {
        let student = self
            .store
            .student(student_id)
            .ok_or_else(|| ServiceError::StudentNotFound(student_id.to_string()))?;

        let message = message.trim();
        if message.is_empty() {
            return Err(ServiceError::EmptyMessage);
        }

        tracing::info!(student_id, chars = message.chars().count(), "Teacher message recorded");

        Ok(MessageReceipt {
            student_id: student.id.clone(),
            student_name: student.name.clone(),
            message: message.to_string(),
            confirmation: format!("Message sent to {}", student.name),
        })
    }
}
