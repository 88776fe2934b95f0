use std::ops::RangeInclusive;

use crate::models::domain::QuestionType;

#[derive(Debug, Clone)]
pub struct SchoolLevel {
    pub code: &'static str,
    pub name: &'static str,
    pub classes: RangeInclusive<u8>,
}

pub static SCHOOL_LEVELS: [SchoolLevel; 3] = [
    SchoolLevel {
        code: "SD",
        name: "Sekolah Dasar",
        classes: 1..=6,
    },
    SchoolLevel {
        code: "SMP",
        name: "Sekolah Menengah Pertama",
        classes: 7..=9,
    },
    SchoolLevel {
        code: "SMA",
        name: "Sekolah Menengah Atas",
        classes: 10..=12,
    },
];

/// A selectable form value and the text shown for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormChoice {
    pub value: &'static str,
    pub label: &'static str,
}

pub static SUBJECTS: [FormChoice; 5] = [
    FormChoice {
        value: "Sejarah",
        label: "Sejarah",
    },
    FormChoice {
        value: "Matematika",
        label: "Matematika",
    },
    FormChoice {
        value: "Fisika",
        label: "Fisika",
    },
    FormChoice {
        value: "Kimia",
        label: "Kimia",
    },
    FormChoice {
        value: "Bahasa Inggris",
        label: "Bahasa Inggris",
    },
];

pub static DIFFICULTIES: [FormChoice; 3] = [
    FormChoice {
        value: "easy",
        label: "Easy",
    },
    FormChoice {
        value: "medium",
        label: "Medium",
    },
    FormChoice {
        value: "difficult",
        label: "Difficult",
    },
];

pub static MULTIPLE_CHOICE_TIPS: [&str; 4] = [
    "Be specific about the topic",
    "Specify the difficulty level",
    "Mention if you want conceptual or calculation-based questions",
    "Include any specific requirements for the choices",
];

pub static ESSAY_TIPS: [&str; 4] = [
    "Specify the desired length or depth of answers",
    "Include the type of analysis or critical thinking required",
    "Mention if you want real-world applications",
    "Specify if citations or examples should be included in answers",
];

pub fn tips_for(question_type: QuestionType) -> &'static [&'static str] {
    match question_type {
        QuestionType::MultipleChoice => &MULTIPLE_CHOICE_TIPS,
        QuestionType::Essay => &ESSAY_TIPS,
    }
}
