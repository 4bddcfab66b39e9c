/// Majors offered at WSU, as presented by the sign-up form
pub const WSU_MAJORS: [&str; 50] = [
    "Accounting",
    "Agricultural Education",
    "Animal Sciences",
    "Anthropology",
    "Architecture",
    "Art",
    "Biochemistry",
    "Biology",
    "Business Administration",
    "Chemical Engineering",
    "Chemistry",
    "Civil Engineering",
    "Communication",
    "Computer Engineering",
    "Computer Science",
    "Construction Management",
    "Criminal Justice and Criminology",
    "Data Analytics",
    "Economics",
    "Education",
    "Electrical Engineering",
    "Elementary Education",
    "English",
    "Environmental Science",
    "Finance",
    "Food Science",
    "History",
    "Hospitality Business Management",
    "Information Systems",
    "International Business",
    "Journalism and Media Production",
    "Kinesiology",
    "Management",
    "Marketing",
    "Mathematics",
    "Mechanical Engineering",
    "Microbiology",
    "Music",
    "Neuroscience",
    "Nursing",
    "Nutrition and Exercise Physiology",
    "Philosophy",
    "Physics",
    "Political Science",
    "Psychology",
    "Public Relations",
    "Sociology",
    "Software Engineering",
    "Sport Management",
    "Statistics",
];

/// Majors whose name contains `query`, ignoring case. An empty query matches all.
pub fn filter_majors(query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    WSU_MAJORS
        .iter()
        .copied()
        .filter(|major| major.to_lowercase().contains(&needle))
        .collect()
}

/// The major spelled exactly as `query`, ignoring case and surrounding spaces
pub fn resolve_major(query: &str) -> Option<&'static str> {
    let query = query.trim();
    WSU_MAJORS
        .iter()
        .copied()
        .find(|major| major.eq_ignore_ascii_case(query))
}
