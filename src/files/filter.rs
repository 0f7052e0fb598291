//! Client-side filtering of the file list

use super::types::{FileRecord, FilterCriteria};

/// One entry of the type selector: a label and the substring it filters on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeOption {
    pub label: &'static str,
    pub query: &'static str,
}

/// Options offered by the type selector; the empty query matches everything.
pub const TYPE_OPTIONS: &[TypeOption] = &[
    TypeOption { label: "All", query: "" },
    TypeOption { label: "PDF", query: "pdf" },
    TypeOption { label: "Images", query: "image" },
    TypeOption { label: "Word", query: "word" },
    TypeOption { label: "CSV", query: "csv" },
    TypeOption { label: "Excel", query: "excel" },
];

/// Keep records whose filename contains the name query and whose content type
/// contains the type query. Both tests ignore case; server order is preserved.
pub fn filter_files<'a>(files: &'a [FileRecord], criteria: &FilterCriteria) -> Vec<&'a FileRecord> {
    let name_query = criteria.name_query.to_lowercase();
    let type_query = criteria.type_query.to_lowercase();

    files
        .iter()
        .filter(|file| {
            let matches_name = file.filename.to_lowercase().contains(&name_query);
            let matches_type =
                type_query.is_empty() || file.content_type.to_lowercase().contains(&type_query);
            matches_name && matches_type
        })
        .collect()
}
