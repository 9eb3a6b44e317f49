use promptvars_core::{PatternKind, get_pattern_description};

pub fn run() {
    for kind in PatternKind::LEGACY {
        println!("{:<16}{}", kind.as_str(), get_pattern_description(kind));
    }
    println!(
        "{:<16}{}  (supported)",
        PatternKind::Canonical.as_str(),
        get_pattern_description(PatternKind::Canonical)
    );
}
