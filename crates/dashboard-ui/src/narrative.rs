//! Fixed narrative text for the Insights and Recommendations views.

use dashboard_data::reports::{Section, SectionBody};

fn text(title: &str, lines: &[&str]) -> Section {
    Section::new(
        title,
        SectionBody::Text {
            lines: lines.iter().map(|l| l.to_string()).collect(),
        },
    )
}

pub fn insights() -> Vec<Section> {
    vec![
        text(
            "Engagement Varies by Course",
            &[
                "Average time spent differs noticeably between courses. The most engaging",
                "course suggests either stronger interest or deeper content; the least",
                "engaging one may be too easy or fail to hold attention.",
            ],
        ),
        text(
            "Younger Students Are More Engaged",
            &[
                "Learners under 18 spend the most time on courses, and engagement tends",
                "to decline with age.",
            ],
        ),
        text(
            "Gender Differences in Engagement",
            &["Female learners show slightly higher average engagement than male learners."],
        ),
        text(
            "Ratings Vary Across Courses",
            &[
                "Some courses receive consistently high ratings while others show a wide",
                "spread, pointing to uneven learner experiences.",
            ],
        ),
        text(
            "Activity Peaks in Specific Months",
            &[
                "Monthly trends show spikes that may line up with academic calendars,",
                "exam periods or course launches.",
            ],
        ),
        text(
            "Sparse Feedback",
            &[
                "Many activity rows have no matching rating. Prompting for feedback after",
                "completion would improve coverage.",
            ],
        ),
        text(
            "Completion Lags Engagement",
            &[
                "High time spent with low completion can signal unclear objectives,",
                "overly hard content or fading motivation near the end of a course.",
            ],
        ),
        text(
            "Older Age Groups Are Under-represented",
            &[
                "The 36-50 and 50+ groups have little or no activity. More data is needed",
                "to tell a small sample apart from an accessibility problem.",
            ],
        ),
    ]
}

pub fn recommendations() -> Vec<Section> {
    vec![
        text(
            "Improve Feedback Collection",
            &[
                "- Ask for a rating in-app right after a course is completed.",
                "- Offer certificates or badges for submitted feedback.",
                "- Keep feedback questions short and clear.",
            ],
        ),
        text(
            "Revise Low-Engagement Courses",
            &[
                "- Review structure, difficulty and delivery of the least engaging courses.",
                "- Add quizzes and video to break up long material.",
            ],
        ),
        text(
            "Personalise by Age Group",
            &[
                "- Gamified paths for under-18 learners, flexible modules for 26+.",
                "- Account for attention span and device access per age bracket.",
            ],
        ),
        text(
            "Promote High-Performing Courses",
            &[
                "- Feature the most engaging courses in newsletters and dashboards.",
                "- Use learner testimonials and ratings in marketing.",
            ],
        ),
        text(
            "Run Targeted Engagement Campaigns",
            &[
                "- Schedule seasonal challenges around the monthly activity peaks.",
                "- Nudge learners whose completion stalls.",
            ],
        ),
        text(
            "Localise Content",
            &[
                "- Use Location to offer regional-language support.",
                "- Time live sessions to learners' regions.",
            ],
        ),
        text(
            "Add Visible Progress Tracking",
            &["- Completion bars and milestone badges help learners keep going."],
        ),
    ]
}
