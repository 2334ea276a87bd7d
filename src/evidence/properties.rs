//! Human labels for the Wikidata property codes the retriever queries.
//!
//! Mirrors the predicate map used upstream. Codes not listed here pass
//! through verbatim in evidence titles.

/// Label for a known Wikidata property ID
pub fn property_label(pid: &str) -> Option<&'static str> {
    let label = match pid {
        "P19" => "place of birth",
        "P20" => "place of death",
        "P26" => "spouse",
        "P31" => "instance of",
        "P39" => "position held",
        "P50" => "author",
        "P57" => "director",
        "P61" => "discoverer or inventor",
        "P69" => "educated at",
        "P112" => "founded by",
        "P131" => "located in",
        "P159" => "headquarters location",
        "P276" => "location",
        "P279" => "subclass of",
        "P488" => "chairperson",
        "P569" => "date of birth",
        "P570" => "date of death",
        "P571" => "inception",
        _ => return None,
    };
    Some(label)
}
