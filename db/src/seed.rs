//! The demo dataset.
//!
//! Every function returns a fresh copy; [`crate::Store::seeded`] calls each
//! once at startup.

use crate::models::{
    Assignment, LearningResource, PerformanceData, Student, StudentProgress, Submission, Teacher,
};
use chrono::{DateTime, NaiveDate, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed date is valid")
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    date(y, m, d)
        .and_hms_opt(h, min, 0)
        .expect("seed time is valid")
        .and_utc()
}

fn avatar(name: &str) -> String {
    format!("https://i.pravatar.cc/150?u={name}")
}

pub fn students() -> Vec<Student> {
    [
        ("s1", "Arjun Sharma", "arjun"),
        ("s2", "Priya Patel", "priya"),
        ("s3", "Rahul Verma", "rahul"),
        ("s4", "Aisha Khan", "aisha"),
        ("s5", "Vikram Singh", "vikram"),
    ]
    .into_iter()
    .map(|(id, name, handle)| Student {
        id: id.into(),
        name: name.into(),
        grade: "10th".into(),
        avatar_url: avatar(handle),
    })
    .collect()
}

pub fn teachers() -> Vec<Teacher> {
    [
        ("t1", "Dr. Neha Gupta", "Mathematics", "neha"),
        ("t2", "Prof. Rajesh Kumar", "Science", "rajesh"),
        ("t3", "Ms. Anjali Desai", "English", "anjali"),
        ("t4", "Mr. Anand Joshi", "History", "anand"),
    ]
    .into_iter()
    .map(|(id, name, subject, handle)| Teacher {
        id: id.into(),
        name: name.into(),
        subject: subject.into(),
        avatar_url: avatar(handle),
    })
    .collect()
}

pub fn assignments() -> Vec<Assignment> {
    vec![
        Assignment {
            id: "a1".into(),
            title: "Quadratic Equations".into(),
            subject: "Mathematics".into(),
            description: "Solve the following quadratic equations and show your work.".into(),
            due_date: date(2023, 5, 15),
            max_score: 100,
        },
        Assignment {
            id: "a2".into(),
            title: "Cell Structure Essay".into(),
            subject: "Science".into(),
            description:
                "Write a 500-word essay on the structure and function of animal cells.".into(),
            due_date: date(2023, 5, 18),
            max_score: 100,
        },
        Assignment {
            id: "a3".into(),
            title: "Literary Analysis".into(),
            subject: "English".into(),
            description:
                "Analyze the main themes in 'To Kill a Mockingbird' with textual evidence.".into(),
            due_date: date(2023, 5, 20),
            max_score: 100,
        },
        Assignment {
            id: "a4".into(),
            title: "World War II Timeline".into(),
            subject: "History".into(),
            description:
                "Create a timeline of major events during World War II with brief descriptions."
                    .into(),
            due_date: date(2023, 5, 22),
            max_score: 100,
        },
    ]
}

pub fn submissions() -> Vec<Submission> {
    vec![
        Submission {
            id: "sub1".into(),
            student_id: "s1".into(),
            assignment_id: "a1".into(),
            content: "I solved the equations by factoring and using the quadratic formula. For x^2 + 5x + 6 = 0, I got x = -2 and x = -3.".into(),
            submitted_at: at(2023, 5, 10, 14, 30),
            score: Some(85),
            feedback: Some("Good work on factoring! Make sure to check your solutions by substituting back into the original equation. You've shown a solid understanding of the quadratic formula.".into()),
        },
        Submission {
            id: "sub2".into(),
            student_id: "s2".into(),
            assignment_id: "a2".into(),
            content: "Animal cells are eukaryotic cells with a nucleus and organelles. The cell membrane controls what enters and exits the cell. The nucleus contains DNA and acts as the cell's control center.".into(),
            submitted_at: at(2023, 5, 12, 10, 15),
            score: Some(92),
            feedback: Some("Excellent description of animal cell structure. Your explanation of the function of each organelle is clear and accurate. Consider including more about the endoplasmic reticulum in future responses.".into()),
        },
        Submission {
            id: "sub3".into(),
            student_id: "s3".into(),
            assignment_id: "a3".into(),
            content: "In 'To Kill a Mockingbird', Harper Lee explores themes of racial injustice through the trial of Tom Robinson. The character of Atticus Finch represents moral integrity in the face of societal prejudice.".into(),
            submitted_at: at(2023, 5, 14, 16, 45),
            score: Some(78),
            feedback: Some("Good identification of themes. Your analysis could be strengthened with more specific textual evidence and quotes. Try to connect the themes to the historical context of the novel.".into()),
        },
        Submission {
            id: "sub4".into(),
            student_id: "s4".into(),
            assignment_id: "a4".into(),
            content: "September 1, 1939: Germany invades Poland, starting WWII. December 7, 1941: Japan attacks Pearl Harbor. June 6, 1944: D-Day invasion of Normandy. August 6, 1945: Atomic bomb dropped on Hiroshima.".into(),
            submitted_at: at(2023, 5, 16, 9, 20),
            score: Some(88),
            feedback: Some("Very good timeline with key events identified. Your chronology is accurate. To improve, consider adding brief explanations of why each event was significant to the overall course of the war.".into()),
        },
        Submission {
            id: "sub5".into(),
            student_id: "s5".into(),
            assignment_id: "a1".into(),
            content: "For the equation 2x^2 - 7x + 3 = 0, I used the quadratic formula: x = [7 ± √(49-24)]/4. This gives x = 3 and x = 0.5.".into(),
            submitted_at: at(2023, 5, 11, 11, 50),
            score: Some(75),
            feedback: Some("Your approach using the quadratic formula is correct, but there's an error in your calculation. Double-check your work with the discriminant. Review the steps for applying the quadratic formula.".into()),
        },
    ]
}

pub fn performance() -> Vec<PerformanceData> {
    [
        ("Mathematics", 82, 25),
        ("Science", 78, 22),
        ("English", 85, 28),
        ("History", 79, 20),
    ]
    .into_iter()
    .map(|(subject, average_score, submissions)| PerformanceData {
        subject: subject.into(),
        average_score,
        submissions,
    })
    .collect()
}

pub fn progress() -> Vec<StudentProgress> {
    [
        ("January", 72),
        ("February", 75),
        ("March", 79),
        ("April", 83),
        ("May", 88),
    ]
    .into_iter()
    .map(|(month, score)| StudentProgress {
        month: month.into(),
        score,
    })
    .collect()
}

pub fn learning_resources() -> Vec<LearningResource> {
    [
        ("r1", "Khan Academy: Quadratic Equations", "Video", "Mathematics", (70, 85)),
        ("r2", "Cell Biology Fundamentals", "Article", "Science", (65, 90)),
        ("r3", "Literary Analysis Techniques", "PDF", "English", (60, 80)),
        ("r4", "World History Interactive Timeline", "Interactive", "History", (75, 95)),
    ]
    .into_iter()
    .map(|(id, title, kind, subject, range)| LearningResource {
        id: id.into(),
        title: title.into(),
        kind: kind.into(),
        url: "#".into(),
        subject: subject.into(),
        recommended_for: range,
    })
    .collect()
}
