//! Fixed filter choices offered by the job listing pickers
//!
//! Both lists start with the [`ALL`](crate::types::ALL) sentinel.

use crate::types::ALL;

pub const CITIES: &[&str] = &[
    ALL,
    "Mumbai",
    "Pune",
    "Hyderabad",
    "Bengaluru",
    "Chandigarh",
    "Delhi",
    "Gurugram",
    "Ahmedabad",
    "Noida",
    "Faridabad",
];

pub const NICHES: &[&str] = &[
    ALL,
    "Software Development",
    "Web Development",
    "Cybersecurity",
    "Data Science",
    "Artificial Intelligence",
    "Cloud Computing",
    "DevOps",
    "Mobile App Development",
    "Blockchain",
    "Database Administration",
    "Network Administration",
    "UI/UX Design",
    "Game Development",
    "IoT (Internet of Things)",
    "Big Data",
    "Machine Learning",
    "IT Project Management",
    "IT Support and Helpdesk",
    "Systems Administration",
    "IT Consulting",
];

/// Case-insensitive lookup returning the canonical spelling
pub fn find_city(name: &str) -> Option<&'static str> {
    find(CITIES, name)
}

pub fn find_niche(name: &str) -> Option<&'static str> {
    find(NICHES, name)
}

fn find(list: &[&'static str], name: &str) -> Option<&'static str> {
    let name = name.trim();
    list.iter().copied().find(|entry| entry.eq_ignore_ascii_case(name))
}
