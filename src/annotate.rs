use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::PlayerPerformance;

// Grade tokens the generator tends to hallucinate next to player names.
static PAREN_GRADE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(Grade:\s*\d+\)").expect("static regex"));
static WORD_GRADE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+grade\s+\d{1,2}\b").expect("static regex"));
static BARE_GRADE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(\d{1,2}\)").expect("static regex"));

/// Remove grade tokens the generator may have attached to player names, so a
/// later annotation pass never doubles up: `Name (Grade: 7)`, `Name grade 7`
/// and a bare trailing `(7)` all collapse back to the plain name.
pub fn strip_grade_tokens(text: &str) -> String {
    let text = PAREN_GRADE_RE.replace_all(text, "");
    let text = WORD_GRADE_RE.replace_all(&text, "");
    BARE_GRADE_RE.replace_all(&text, "").into_owned()
}

/// Annotate the first mention of each rated player as `Name (Position, Grade)`.
///
/// Performances are processed longest name first so a full name is always
/// matched before a shorter name that happens to be a substring of it. Each
/// player is annotated at most once per call; repeat mentions stay untouched.
/// The already-annotated set lives only for this call, so a second
/// independent call over raw text annotates again.
pub fn annotate(text: &str, performances: &[PlayerPerformance]) -> String {
    let mut out = strip_grade_tokens(text);

    let mut rated: Vec<&PlayerPerformance> = performances
        .iter()
        .filter(|p| p.grade.is_some() && !p.name.trim().is_empty())
        .collect();
    rated.sort_by(|a, b| b.name.len().cmp(&a.name.len()));

    let mut annotated_names: HashSet<String> = HashSet::new();
    // Byte spans already rewritten this call, so a surname never re-annotates
    // inside an already-annotated full name.
    let mut taken: Vec<(usize, usize)> = Vec::new();

    for performance in rated {
        let key = performance.name.to_lowercase();
        if annotated_names.contains(&key) {
            continue;
        }
        let Some(grade) = performance.grade else {
            continue;
        };

        let pattern = format!(r"(?i)\b{}\b", regex::escape(&performance.name));
        let Ok(name_re) = Regex::new(&pattern) else {
            continue;
        };
        let Some(found) = name_re
            .find_iter(&out)
            .find(|m| !overlaps(&taken, m.start(), m.end()))
        else {
            continue;
        };

        let insertion = format!(" ({}, {})", performance.position, grade);
        let at = found.end();
        let span = (found.start(), found.end() + insertion.len());
        out.insert_str(at, &insertion);

        shift_after(&mut taken, at, insertion.len());
        taken.push(span);
        annotated_names.insert(key);
    }

    out
}

fn overlaps(taken: &[(usize, usize)], start: usize, end: usize) -> bool {
    taken.iter().any(|(s, e)| start < *e && end > *s)
}

fn shift_after(taken: &mut [(usize, usize)], at: usize, by: usize) {
    for (s, e) in taken.iter_mut() {
        if *s >= at {
            *s += by;
        }
        if *e > at {
            *e += by;
        }
    }
}
