//! Fixed sentence bank for template feedback.
//!
//! Feedback is an opener chosen by score band followed by a sentence chosen
//! by (subject, band). `None` as the subject selects the generic sentences.

use crate::types::{ScoreBand, Subject};

pub fn opener(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => "Excellent work!",
        ScoreBand::Good => "Good job!",
        ScoreBand::Average => "Satisfactory effort.",
        ScoreBand::NeedsImprovement => "This submission needs more work.",
    }
}

pub fn subject_sentence(subject: Option<Subject>, band: ScoreBand) -> &'static str {
    use ScoreBand::*;

    match (subject, band) {
        (Some(Subject::Mathematics), Excellent) => {
            "Your solutions are accurate and every step of your working is clearly justified."
        }
        (Some(Subject::Mathematics), Good) => {
            "Your method is sound; double-check each solution by substituting it back into the original equation."
        }
        (Some(Subject::Mathematics), Average) => {
            "You have the right idea, but review how you apply each formula and show more of your working."
        }
        (Some(Subject::Mathematics), NeedsImprovement) => {
            "Revisit the core techniques for solving equations and practise writing out each step of the calculation."
        }

        (Some(Subject::Science), Excellent) => {
            "You explain the structure and function of each component with precision and scientific accuracy."
        }
        (Some(Subject::Science), Good) => {
            "Your scientific explanations are clear; add more detail on how each structure supports its function."
        }
        (Some(Subject::Science), Average) => {
            "Your understanding of the key concepts is developing; use more precise scientific terminology."
        }
        (Some(Subject::Science), NeedsImprovement) => {
            "Review the fundamental concepts and make sure you can describe each structure and what it does."
        }

        (Some(Subject::English), Excellent) => {
            "Your analysis of themes and characters is insightful and well supported by textual evidence."
        }
        (Some(Subject::English), Good) => {
            "You identify the main themes well; strengthen your argument with more direct quotes from the text."
        }
        (Some(Subject::English), Average) => {
            "Your analysis touches on the key themes but needs more textual evidence to support each point."
        }
        (Some(Subject::English), NeedsImprovement) => {
            "Focus on identifying the central themes and support every claim with evidence from the text."
        }

        (Some(Subject::History), Excellent) => {
            "Your account of historical events is accurate and you clearly explain the impact of each one."
        }
        (Some(Subject::History), Good) => {
            "Your timeline is accurate; explain why each event was significant to strengthen your work."
        }
        (Some(Subject::History), Average) => {
            "You cover the main events, but add more context about their causes and historical impact."
        }
        (Some(Subject::History), NeedsImprovement) => {
            "Review the key events and their chronology, and explain how each one shaped what followed."
        }

        (None, Excellent) => "You have demonstrated a thorough understanding of the material.",
        (None, Good) => {
            "You show a solid grasp of the material; a little more depth would make this even stronger."
        }
        (None, Average) => {
            "You understand the basics; review the material and add more supporting detail."
        }
        (None, NeedsImprovement) => {
            "Review the core material carefully and ask your teacher for help with anything unclear."
        }
    }
}

/// Band-level study suggestions. `{topic}` is replaced by the subject topic.
pub fn band_suggestions(band: ScoreBand) -> &'static [&'static str] {
    match band {
        ScoreBand::Excellent => &[
            "Challenge yourself with advanced problems in {topic}",
            "Help classmates by explaining the concepts you have mastered",
        ],
        ScoreBand::Good => &[
            "Review the areas where you lost marks",
            "Practise with a few more exercises in {topic}",
        ],
        ScoreBand::Average => &[
            "Revisit the core concepts of {topic}",
            "Work through guided examples before the next assignment",
            "Ask your teacher about the topics you found difficult",
        ],
        ScoreBand::NeedsImprovement => &[
            "Schedule a one-on-one session with your teacher",
            "Start again from the fundamentals of {topic}",
            "Complete extra practice exercises each week",
        ],
    }
}

/// Study tips per subject. The generic list is used for unknown subjects.
pub fn study_tips(subject: Option<Subject>) -> &'static [&'static str] {
    match subject {
        Some(Subject::Mathematics) => &[
            "Practice solving different types of problems regularly",
            "Focus on understanding concepts rather than memorizing formulas",
            "Create a formula sheet for quick reference",
            "Watch video tutorials for complex topics",
        ],
        Some(Subject::Science) => &[
            "Create diagrams and visual aids to understand concepts",
            "Connect theoretical knowledge with real-world examples",
            "Perform simple experiments when possible",
            "Use mnemonic devices for remembering scientific terminology",
        ],
        Some(Subject::English) => &[
            "Read diverse materials to improve vocabulary and comprehension",
            "Practice writing regularly and seek feedback",
            "Use mind maps for analyzing literary works",
            "Participate in discussions to develop critical thinking",
        ],
        Some(Subject::History) => &[
            "Create timelines to understand chronological relationships",
            "Focus on causes and effects rather than just dates",
            "Use storytelling techniques to remember historical events",
            "Connect historical events to present-day scenarios",
        ],
        None => GENERAL_TIPS,
    }
}

pub const GENERAL_TIPS: &[&str] = &[
    "Set aside dedicated study time each day for consistent progress",
    "Break down large assignments into smaller, manageable tasks",
    "Use active recall techniques rather than passive reading",
    "Teach concepts to others to solidify your understanding",
];
