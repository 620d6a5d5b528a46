/// Dataset holding every resource regardless of category.
pub const CATEGORY_ALL: &str = "all";
/// Dataset holding submitted resources pending moderation.
pub const CATEGORY_NEW: &str = "new-url";

/// The closed set of browseable category identifiers and their display names.
const CATEGORY_NAMES: &[(&str, &str)] = &[
    ("featured", "Featured"),
    ("latest", "Last 3 days"),
    ("official", "Official"),
    ("search", "Search"),
    ("web-scraping", "Web Scraping"),
    ("communication", "Communication"),
    ("productivity", "Productivity"),
    ("development", "Development"),
    ("database", "Database"),
    ("cloud-service", "Cloud Service"),
    ("file-system", "File System"),
    ("cloud-storage", "Cloud Storage"),
    ("version-control", "Version Control"),
    ("ai-ml", "AI ML"),
    ("blockchain", "Blockchain"),
    ("multimedia", "Multimedia"),
    ("data-analysis", "Data Analysis"),
    ("monitoring", "Monitoring"),
    ("integration", "Integration"),
    ("other", "Other"),
];

/// Returns the display name for a category identifier.
///
/// Unknown identifiers fall back to a title-cased rendering of the raw id,
/// for display purposes only; the loader will simply find no backing file.
pub fn display_name(category: &str) -> String {
    CATEGORY_NAMES
        .iter()
        .find(|(id, _)| *id == category)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| title_case(category))
}

/// The browseable category identifiers, in display order.
///
/// `all` and `new-url` are addressable datasets but not browse facets.
pub fn browseable_categories() -> Vec<&'static str> {
    CATEGORY_NAMES.iter().map(|(id, _)| *id).collect()
}

fn title_case(raw: &str) -> String {
    raw.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
